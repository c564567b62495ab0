//! pathglow lays out a weighted directed graph on a canvas, asks a pluggable solver for a route
//! between two nodes, and plays that route back as a timed highlight animation.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `Graph -> Layout` (random node positions, edge weights normalized to `0..=1`)
//! 2. **Draw**: `Layout -> DrawnGraph` on a [`Surface`] (styled lines and circles, filterable handles)
//! 3. **Solve**: any [`Solver`] returns the route ordered finish to start
//! 4. **Play**: [`play_path`] queues one highlight step per hop, `step_delay` apart
//!
//! [`Scene`] is the bundled surface: it keeps shapes in memory, runs queued mutations on a
//! virtual clock and exports any moment as SVG or PNG. [`run`] wires the four steps together.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod graph;
mod layout;
mod pipeline;
mod playback;
mod render;

pub use animation::ease::{Ease, Lerp};
pub use animation::timeline::Timeline;
pub use config::{PlaybackConfig, SessionConfig};
pub use foundation::color::Color;
pub use foundation::core::{Canvas, Millis, Point};
pub use foundation::error::{PathglowError, PathglowResult};
pub use graph::model::Graph;
pub use graph::solve::{DijkstraSolver, SolvedPath, Solver};
pub use layout::generator::{
    Layout, LayoutPoint, Link, generate_layout, generate_layout_unseeded,
};
pub use pipeline::{Session, run, run_unseeded};
pub use playback::player::{PlayOptions, PlaybackStats, STEP_DELAY, play_path};
pub use render::draw::{DrawnGraph, draw_layout};
pub use render::raster::rasterize_svg;
pub use render::scene::{
    EdgeFrame, Scene, SceneFrame, ScheduledChange, ShapeState, Transition, VertexFrame,
};
pub use render::style::RenderStyle;
pub use render::surface::{
    AttrChange, EdgeAttrs, EdgeHandle, EdgeId, Selection, Surface, Target, VertexAttrs,
    VertexHandle, VertexId,
};
pub use render::svg::frame_to_svg;
