use crate::whiteboard::model::{Color, StrokeStyle, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use serde::{Deserialize, Serialize};

/// Application settings, persisted as `settings.json` next to the binary.
/// A missing or empty file yields the defaults; a malformed one is an
/// error so typos do not silently reset the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub debug_logging: bool,
    /// Initial whiteboard stroke color, `#RRGGBB`.
    pub stroke_color: String,
    /// Initial whiteboard stroke width, slider range 1..=10.
    pub stroke_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 960.0,
            window_height: 720.0,
            debug_logging: false,
            stroke_color: Color::BLACK.to_hex(),
            stroke_width: MIN_STROKE_WIDTH,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the configured stroke style, falling back to defaults for
    /// values outside what the controls can produce.
    pub fn initial_style(&self) -> StrokeStyle {
        let color = match Color::from_hex(&self.stroke_color) {
            Some(color) => color,
            None => {
                tracing::warn!(
                    "stroke_color '{}' is not a #RRGGBB string; using black",
                    self.stroke_color
                );
                Color::BLACK
            }
        };
        StrokeStyle {
            color,
            width: self.stroke_width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
        }
    }
}
