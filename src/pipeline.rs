use rand::Rng;

use crate::{
    config::SessionConfig,
    foundation::core::Millis,
    foundation::error::PathglowResult,
    graph::model::Graph,
    graph::solve::{SolvedPath, Solver},
    layout::generator::{Layout, generate_layout},
    playback::player::{PlaybackStats, play_path},
    render::draw::{DrawnGraph, draw_layout},
    render::raster::rasterize_svg,
    render::scene::{Scene, SceneFrame, ScheduledChange},
};

/// One rendering session: a laid-out, drawn graph with its path animation queued.
#[derive(Debug)]
pub struct Session {
    pub layout: Layout,
    pub drawn: DrawnGraph,
    pub path: SolvedPath,
    pub stats: PlaybackStats,
    scene: Scene,
}

impl Session {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Time at which the last highlight has fully settled.
    pub fn duration(&self) -> Millis {
        self.scene.end_time()
    }

    /// Mutations still waiting on the scene's clock, earliest first.
    pub fn schedule(&self) -> Vec<ScheduledChange> {
        self.scene.schedule_report()
    }

    /// Advance playback to `t`. Time only moves forward.
    pub fn seek(&mut self, t: Millis) -> PathglowResult<SceneFrame> {
        self.scene.advance_to(t)?;
        Ok(self.scene.snapshot())
    }

    /// Advance playback past the last highlight.
    pub fn seek_end(&mut self) -> PathglowResult<SceneFrame> {
        self.scene.finish()?;
        Ok(self.scene.snapshot())
    }

    pub fn render_svg(&self) -> String {
        self.scene.to_svg()
    }

    pub fn render_png(&self) -> PathglowResult<image::RgbaImage> {
        rasterize_svg(&self.render_svg())
    }
}

/// Lay out `graph`, draw it, ask `solver` for the route from `start` to `finish` and queue its
/// playback.
///
/// Nothing is animated yet when this returns; drive the clock with [`Session::seek`].
#[tracing::instrument(skip(solver, graph, config, rng), fields(nodes = graph.node_count()))]
pub fn run<V, R>(
    solver: &V,
    graph: &Graph,
    start: &str,
    finish: &str,
    config: &SessionConfig,
    rng: &mut R,
) -> PathglowResult<Session>
where
    V: Solver + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;

    let layout = generate_layout(config.viewport, graph, rng)?;

    let mut scene = Scene::new(config.viewport, config.style.background)
        .with_transition(config.transition());
    let drawn = draw_layout(&mut scene, &layout, &config.style);

    let path = solver.solve(graph, start, finish)?;

    let stats = play_path(
        &mut scene,
        &drawn.edges,
        &drawn.vertices,
        path.path.clone(),
        &config.play_options(),
    );

    tracing::info!(
        steps = stats.steps,
        missing_edges = stats.missing_edges,
        duration = %scene.end_time(),
        "playback queued"
    );

    Ok(Session {
        layout,
        drawn,
        path,
        stats,
        scene,
    })
}

/// [`run`] with a fresh random layout.
pub fn run_unseeded<V>(
    solver: &V,
    graph: &Graph,
    start: &str,
    finish: &str,
    config: &SessionConfig,
) -> PathglowResult<Session>
where
    V: Solver + ?Sized,
{
    run(solver, graph, start, finish, config, &mut rand::thread_rng())
}
