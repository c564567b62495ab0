use serde::{Deserialize, Serialize};

use crate::foundation::{color::Color, core::Millis};
use crate::render::surface::{
    AttrChange, EdgeHandle, Selection, Surface, Target, VertexHandle,
};

/// Default gap between two playback steps.
pub const STEP_DELAY: Millis = Millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayOptions {
    pub step_delay: Millis,
    pub highlight_color: Color,
    /// Stroke width given to highlighted edges.
    pub emphasis_width: f64,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            step_delay: STEP_DELAY,
            highlight_color: Color::from_rgb8(0xff, 0xcc, 0x00),
            emphasis_width: 5.0,
        }
    }
}

/// What a call to [`play_path`] queued on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackStats {
    pub steps: usize,
    pub edges_scheduled: usize,
    pub vertices_scheduled: usize,
    /// Consecutive pairs with no drawn edge between them.
    pub missing_edges: usize,
    /// Delay of the last step, `None` when nothing was queued.
    pub last_delay: Option<Millis>,
}

/// Queue the highlight animation of `path` on `surface` and return immediately.
///
/// `path` is ordered finish first, the way solvers return it, and is consumed from the back.
/// Step `i` fires after `i * step_delay`: it highlights the edge between the two nodes popped
/// last and fills the earlier of the two. The node popped last of all is never filled on its
/// own. Pairs without a drawn edge still fill their vertex; only the edge is skipped.
#[tracing::instrument(skip_all, fields(len = path.len(), step_delay = %opts.step_delay))]
pub fn play_path<S>(
    surface: &mut S,
    edges: &Selection<EdgeHandle>,
    vertices: &Selection<VertexHandle>,
    mut path: Vec<String>,
    opts: &PlayOptions,
) -> PlaybackStats
where
    S: Surface + ?Sized,
{
    let mut stats = PlaybackStats::default();
    let Some(mut end) = path.pop() else {
        return stats;
    };

    let edge_change = AttrChange::default()
        .stroke(opts.highlight_color)
        .stroke_width(opts.emphasis_width);
    let vertex_change = AttrChange::default().fill(opts.highlight_color);

    let mut i = 0u64;
    while let Some(start) = path.pop() {
        let delay = opts.step_delay.times(i);

        let mut hits = 0;
        for handle in joining(edges, &start, &end) {
            surface.schedule(Target::Edge(handle.id), delay, edge_change);
            hits += 1;
        }
        if hits == 0 {
            stats.missing_edges += 1;
        }
        stats.edges_scheduled += hits;

        for handle in vertices.named(&end) {
            surface.schedule(Target::Vertex(handle.id), delay, vertex_change);
            stats.vertices_scheduled += 1;
        }

        tracing::debug!(step = i, %delay, from = %end, to = %start, edges = hits, "step queued");

        stats.steps += 1;
        stats.last_delay = Some(delay);
        i += 1;
        end = start;
    }

    stats
}

/// Edges drawn for `start -> end`, falling back to `end -> start` when that is the only
/// direction on the canvas.
fn joining<'a>(
    edges: &'a Selection<EdgeHandle>,
    start: &'a str,
    end: &'a str,
) -> Vec<&'a EdgeHandle> {
    let forward: Vec<_> = edges.between(start, end).collect();
    if !forward.is_empty() {
        return forward;
    }
    edges.between(end, start).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
