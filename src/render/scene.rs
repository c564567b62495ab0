use serde::Serialize;

use crate::animation::{
    ease::{Ease, Lerp},
    timeline::Timeline,
};
use crate::foundation::{
    color::Color,
    core::{Canvas, Millis, Point},
    error::PathglowResult,
};
use crate::layout::generator::{LayoutPoint, Link};
use crate::render::surface::{
    AttrChange, EdgeAttrs, EdgeId, Surface, Target, VertexAttrs, VertexId,
};

/// Lifecycle of a drawn shape under playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "at", rename_all = "snake_case")]
pub enum ShapeState {
    #[default]
    Idle,
    /// A mutation is queued to commit at `at`.
    Scheduled(Millis),
    /// The latest mutation committed at `at`; it stays in place afterwards.
    Highlighted(Millis),
}

/// How committed mutations animate from the old attributes to the new ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transition {
    pub duration: Millis,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Millis(250),
            ease: Ease::InOutCubic,
        }
    }
}

impl Transition {
    fn progress(self, started: Millis, now: Millis) -> f64 {
        if self.duration.0 == 0 || now >= started.saturating_add(self.duration) {
            return 1.0;
        }
        let elapsed = now.saturating_sub(started).0 as f64;
        self.ease.apply(elapsed / self.duration.0 as f64)
    }
}

#[derive(Clone, Debug)]
struct Animated<A> {
    from: A,
    to: A,
    started: Millis,
}

impl<A: Lerp + Copy> Animated<A> {
    fn still(value: A) -> Self {
        Self {
            from: value,
            to: value,
            started: Millis::ZERO,
        }
    }

    fn value_at(&self, transition: Transition, now: Millis) -> A {
        A::lerp(&self.from, &self.to, transition.progress(self.started, now))
    }

    fn retarget(&mut self, to: A, at: Millis, transition: Transition) {
        self.from = self.value_at(transition, at);
        self.to = to;
        self.started = at;
    }
}

#[derive(Clone, Debug)]
struct EdgeShape {
    parent: String,
    child: String,
    from: Point,
    to: Point,
    attrs: Animated<EdgeAttrs>,
    state: ShapeState,
}

#[derive(Clone, Debug)]
struct VertexShape {
    name: String,
    center: Point,
    attrs: Animated<VertexAttrs>,
    state: ShapeState,
}

#[derive(Clone, Copy, Debug)]
struct Mutation {
    target: Target,
    change: AttrChange,
}

/// In-memory drawing surface with its own virtual clock.
///
/// Shapes are kept in draw order (edges beneath vertices). Scheduled mutations wait in a
/// [`Timeline`] until [`Scene::advance_to`] reaches them.
#[derive(Debug)]
pub struct Scene {
    canvas: Canvas,
    background: Color,
    transition: Transition,
    edges: Vec<EdgeShape>,
    vertices: Vec<VertexShape>,
    timeline: Timeline<Mutation>,
    // Latest commit time plus transition; the scene is static from here on.
    settled_at: Millis,
}

/// Resolved attributes of one edge at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeFrame {
    pub id: EdgeId,
    pub parent: String,
    pub child: String,
    pub from: Point,
    pub to: Point,
    pub attrs: EdgeAttrs,
    pub state: ShapeState,
}

/// Resolved attributes of one vertex at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexFrame {
    pub id: VertexId,
    pub name: String,
    pub center: Point,
    pub attrs: VertexAttrs,
    pub state: ShapeState,
}

/// Everything needed to paint the scene at [`SceneFrame::time`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneFrame {
    pub time: Millis,
    pub canvas: Canvas,
    pub background: Color,
    pub edges: Vec<EdgeFrame>,
    pub vertices: Vec<VertexFrame>,
}

/// One queued mutation, as reported by [`Scene::schedule_report`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScheduledChange {
    pub at: Millis,
    pub target: Target,
    /// Node name for vertices, `parent->child` for edges.
    pub label: String,
    pub change: AttrChange,
}

impl Scene {
    pub fn new(canvas: Canvas, background: Color) -> Self {
        Self {
            canvas,
            background,
            transition: Transition::default(),
            edges: Vec::new(),
            vertices: Vec::new(),
            timeline: Timeline::new(),
            settled_at: Millis::ZERO,
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn now(&self) -> Millis {
        self.timeline.now()
    }

    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    pub fn edge_state(&self, id: EdgeId) -> Option<ShapeState> {
        self.edges.get(id.0 as usize).map(|e| e.state)
    }

    pub fn vertex_state(&self, id: VertexId) -> Option<ShapeState> {
        self.vertices.get(id.0 as usize).map(|v| v.state)
    }

    /// Time after which nothing changes anymore: the last queued commit plus its transition.
    pub fn end_time(&self) -> Millis {
        let last_pending = self
            .timeline
            .pending()
            .last()
            .map(|(at, _)| at.saturating_add(self.transition.duration))
            .unwrap_or(Millis::ZERO);
        last_pending.max(self.settled_at).max(self.now())
    }

    /// Move the clock to `t`, committing every mutation due by then. Returns how many committed.
    #[tracing::instrument(skip(self), fields(pending = self.timeline.len()))]
    pub fn advance_to(&mut self, t: Millis) -> PathglowResult<usize> {
        let due = self.timeline.advance_to(t)?;
        let n = due.len();
        for (at, mutation) in due {
            self.commit(at, mutation);
        }
        Ok(n)
    }

    /// Run playback to the end, including the final transition.
    pub fn finish(&mut self) -> PathglowResult<Millis> {
        let end = self.end_time();
        self.advance_to(end)?;
        Ok(end)
    }

    fn commit(&mut self, at: Millis, mutation: Mutation) {
        let transition = self.transition;
        match mutation.target {
            Target::Edge(id) => {
                let Some(edge) = self.edges.get_mut(id.0 as usize) else {
                    return;
                };
                let next = mutation.change.apply_to_edge(edge.attrs.to);
                edge.attrs.retarget(next, at, transition);
                edge.state = ShapeState::Highlighted(at);
            }
            Target::Vertex(id) => {
                let Some(vertex) = self.vertices.get_mut(id.0 as usize) else {
                    return;
                };
                let next = mutation.change.apply_to_vertex(vertex.attrs.to);
                vertex.attrs.retarget(next, at, transition);
                vertex.state = ShapeState::Highlighted(at);
            }
        }
        self.settled_at = self
            .settled_at
            .max(at.saturating_add(transition.duration));
        tracing::trace!(?mutation.target, %at, "mutation committed");
    }

    /// Queued mutations in commit order.
    pub fn schedule_report(&self) -> Vec<ScheduledChange> {
        self.timeline
            .pending()
            .into_iter()
            .map(|(at, m)| ScheduledChange {
                at,
                target: m.target,
                label: self.label(m.target),
                change: m.change,
            })
            .collect()
    }

    fn label(&self, target: Target) -> String {
        match target {
            Target::Edge(id) => self
                .edges
                .get(id.0 as usize)
                .map(|e| format!("{}->{}", e.parent, e.child))
                .unwrap_or_default(),
            Target::Vertex(id) => self
                .vertices
                .get(id.0 as usize)
                .map(|v| v.name.clone())
                .unwrap_or_default(),
        }
    }

    /// Attributes as they look at the current clock.
    pub fn snapshot(&self) -> SceneFrame {
        let now = self.now();
        let transition = self.transition;
        SceneFrame {
            time: now,
            canvas: self.canvas,
            background: self.background,
            edges: self
                .edges
                .iter()
                .enumerate()
                .map(|(i, e)| EdgeFrame {
                    id: EdgeId(i as u32),
                    parent: e.parent.clone(),
                    child: e.child.clone(),
                    from: e.from,
                    to: e.to,
                    attrs: e.attrs.value_at(transition, now),
                    state: e.state,
                })
                .collect(),
            vertices: self
                .vertices
                .iter()
                .enumerate()
                .map(|(i, v)| VertexFrame {
                    id: VertexId(i as u32),
                    name: v.name.clone(),
                    center: v.center,
                    attrs: v.attrs.value_at(transition, now),
                    state: v.state,
                })
                .collect(),
        }
    }

    pub fn to_svg(&self) -> String {
        crate::render::svg::frame_to_svg(&self.snapshot())
    }
}

impl Surface for Scene {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn draw_line(&mut self, link: &Link, from: Point, to: Point, attrs: EdgeAttrs) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(EdgeShape {
            parent: link.parent.clone(),
            child: link.child.clone(),
            from,
            to,
            attrs: Animated::still(attrs),
            state: ShapeState::Idle,
        });
        id
    }

    fn draw_circle(&mut self, point: &LayoutPoint, attrs: VertexAttrs) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(VertexShape {
            name: point.name.clone(),
            center: point.pos(),
            attrs: Animated::still(attrs),
            state: ShapeState::Idle,
        });
        id
    }

    fn schedule(&mut self, target: Target, delay: Millis, change: AttrChange) {
        let state = match target {
            Target::Edge(id) => self.edges.get_mut(id.0 as usize).map(|e| &mut e.state),
            Target::Vertex(id) => self.vertices.get_mut(id.0 as usize).map(|v| &mut v.state),
        };
        let Some(state) = state else {
            tracing::warn!(?target, "schedule on a shape this scene never drew; dropped");
            return;
        };

        let at = self.timeline.now().saturating_add(delay);
        match *state {
            ShapeState::Scheduled(existing) if existing <= at => {}
            _ => *state = ShapeState::Scheduled(at),
        }
        self.timeline.schedule_in(delay, Mutation { target, change });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
