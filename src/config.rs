use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::core::{Canvas, Millis},
    foundation::error::{PathglowError, PathglowResult},
    playback::player::{PlayOptions, STEP_DELAY},
    render::scene::Transition,
    render::style::RenderStyle,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything a session needs besides the graph, solver and endpoints.
///
/// Every field has a default, so `{}` is a complete configuration:
///
/// ```json
/// { "viewport": { "width": 800, "height": 600 }, "playback": { "step_delay_ms": 250 } }
/// ```
pub struct SessionConfig {
    /// Canvas the layout is placed on.
    pub viewport: Canvas,
    /// Colors, widths and radii of the drawing.
    pub style: RenderStyle,
    /// Timing of the path animation.
    pub playback: PlaybackConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub step_delay_ms: u64,
    pub transition_ms: u64,
    pub ease: Ease,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: STEP_DELAY.0,
            transition_ms: Transition::default().duration.0,
            ease: Ease::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(s: &str) -> PathglowResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> PathglowResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> PathglowResult<()> {
        self.viewport.validate()?;
        let [w0, w1] = self.style.edge_width_range;
        if !(w0.is_finite() && w1.is_finite() && w0 >= 0.0 && w1 >= 0.0) {
            return Err(PathglowError::validation(
                "edge_width_range must hold two finite, non-negative widths",
            ));
        }
        for (field, r) in [
            ("node_radius", self.style.node_radius),
            ("endpoint_radius", self.style.endpoint_radius),
            ("highlight_stroke_width", self.style.highlight_stroke_width),
        ] {
            if !(r.is_finite() && r >= 0.0) {
                return Err(PathglowError::validation(format!(
                    "{field} must be finite and >= 0, got {r}"
                )));
            }
        }
        Ok(())
    }

    pub fn play_options(&self) -> PlayOptions {
        PlayOptions {
            step_delay: Millis(self.playback.step_delay_ms),
            highlight_color: self.style.highlight_color,
            emphasis_width: self.style.highlight_stroke_width,
        }
    }

    pub fn transition(&self) -> Transition {
        Transition {
            duration: Millis(self.playback.transition_ms),
            ease: self.playback.ease,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
