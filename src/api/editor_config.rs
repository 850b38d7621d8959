use serde::{Deserialize, Serialize};

use crate::core::{ChartMargins, DEFAULT_HEIGHT_PX, MAX_HEIGHT_PX, MIN_HEIGHT_PX, YStep};
use crate::error::{ChartError, ChartResult};

/// Public editor bootstrap configuration.
///
/// This type is serializable so host applications can persist/load editor
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEditorConfig {
    /// Track the viewport instead of the container and widen the right margin.
    #[serde(default)]
    pub full_screen: bool,
    /// Seed name for the first entity until explicit data arrives.
    #[serde(default)]
    pub self_display_name: Option<String>,
    #[serde(default = "default_height_px")]
    pub height_px: f64,
    #[serde(default)]
    pub y_step: YStep,
    /// Width used until the first resize notification is applied.
    #[serde(default = "default_initial_width_px")]
    pub initial_width_px: u32,
    #[serde(default)]
    pub margins: ChartMargins,
    #[serde(default = "default_full_screen_right_margin_px")]
    pub full_screen_right_margin_px: f64,
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f64,
}

impl Default for ChartEditorConfig {
    fn default() -> Self {
        Self {
            full_screen: false,
            self_display_name: None,
            height_px: default_height_px(),
            y_step: YStep::Auto,
            initial_width_px: default_initial_width_px(),
            margins: ChartMargins::default(),
            full_screen_right_margin_px: default_full_screen_right_margin_px(),
            point_radius_px: default_point_radius_px(),
            hit_radius_px: default_hit_radius_px(),
        }
    }
}

impl ChartEditorConfig {
    #[must_use]
    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    #[must_use]
    pub fn with_self_display_name(mut self, name: impl Into<String>) -> Self {
        self.self_display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_height_px(mut self, height_px: f64) -> Self {
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_y_step(mut self, y_step: YStep) -> Self {
        self.y_step = y_step;
        self
    }

    #[must_use]
    pub fn with_initial_width_px(mut self, width_px: u32) -> Self {
        self.initial_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Loads a config from JSON; absent fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse editor config: {e}")))?;
        config.validated()
    }

    /// Checks every field and clamps the height into the supported band.
    pub fn validated(mut self) -> ChartResult<Self> {
        if !self.height_px.is_finite() || self.height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "editor height must be finite and > 0".to_owned(),
            ));
        }
        self.height_px = clamp_height_px(self.height_px);
        if !self.y_step.is_valid() {
            return Err(ChartError::InvalidData(
                "y step must be finite and > 0".to_owned(),
            ));
        }
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if !self.full_screen_right_margin_px.is_finite() || self.full_screen_right_margin_px < 0.0
        {
            return Err(ChartError::InvalidData(
                "full-screen right margin must be finite and >= 0".to_owned(),
            ));
        }
        for (name, radius) in [
            ("point radius", self.point_radius_px),
            ("hit radius", self.hit_radius_px),
        ] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }

    /// Margins for the given mode; full screen reserves a legend column.
    #[must_use]
    pub fn margins_for(&self, full_screen: bool) -> ChartMargins {
        if full_screen {
            self.margins.with_right(self.full_screen_right_margin_px)
        } else {
            self.margins
        }
    }
}

#[must_use]
pub fn clamp_height_px(height_px: f64) -> f64 {
    height_px.clamp(MIN_HEIGHT_PX, MAX_HEIGHT_PX)
}

fn default_height_px() -> f64 {
    DEFAULT_HEIGHT_PX
}

fn default_initial_width_px() -> u32 {
    800
}

fn default_full_screen_right_margin_px() -> f64 {
    160.0
}

fn default_point_radius_px() -> f64 {
    5.0
}

fn default_hit_radius_px() -> f64 {
    10.0
}
