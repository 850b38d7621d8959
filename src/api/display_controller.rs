use tracing::debug;

use crate::core::{HEIGHT_OPTIONS_PX, YStep, default_entity_name};
use crate::error::{ChartError, ChartResult};
use crate::host::EditorHost;
use crate::render::Renderer;

use super::ChartEditor;
use super::editor_config::clamp_height_px;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.state.min_y, self.state.max_y)
    }

    #[must_use]
    pub fn height_px(&self) -> f64 {
        self.state.height_px
    }

    #[must_use]
    pub fn y_step(&self) -> YStep {
        self.state.y_step
    }

    /// Heights a host may offer in its selector.
    #[must_use]
    pub fn height_options_px(&self) -> &'static [f64] {
        &HEIGHT_OPTIONS_PX
    }

    /// Sets the shared Y range. Values outside the new range are kept as-is.
    pub fn set_range(&mut self, min_y: f64, max_y: f64) -> ChartResult<()> {
        self.ensure_attached()?;
        if !min_y.is_finite() || !max_y.is_finite() {
            return Err(ChartError::InvalidData(
                "y range bounds must be finite".to_owned(),
            ));
        }
        if min_y > max_y {
            return Err(ChartError::InvalidData(
                "y range min must be <= max".to_owned(),
            ));
        }
        debug!(min_y, max_y, "set y range");
        self.state.min_y = min_y;
        self.state.max_y = max_y;
        self.commit_local_change();
        Ok(())
    }

    /// Sets the chart height; values above the maximum are clamped.
    pub fn set_height(&mut self, height_px: f64) -> ChartResult<()> {
        self.ensure_attached()?;
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "editor height must be finite and > 0".to_owned(),
            ));
        }
        self.state.height_px = clamp_height_px(height_px);
        self.commit_local_change();
        Ok(())
    }

    pub fn set_y_step(&mut self, y_step: YStep) -> ChartResult<()> {
        self.ensure_attached()?;
        if !y_step.is_valid() {
            return Err(ChartError::InvalidData(
                "y step must be finite and > 0".to_owned(),
            ));
        }
        self.state.y_step = y_step;
        self.commit_local_change();
        Ok(())
    }

    /// Updates the host's "self" name.
    ///
    /// Until explicit external data has been applied, the first entity takes
    /// this name as long as it still carries an automatic one (its default
    /// name or an earlier self name). A name the user typed is kept.
    pub fn set_self_display_name(&mut self, name: impl Into<String>) -> ChartResult<()> {
        self.ensure_attached()?;
        let name = name.into();
        let trimmed = name.trim();
        let previous = if trimmed.is_empty() {
            self.self_display_name.take()
        } else {
            self.self_display_name.replace(trimmed.to_owned())
        };
        if trimmed.is_empty() || self.external_applied {
            return Ok(());
        }
        let Some(first) = self.state.entities.first_mut().map(|(_, entity)| entity) else {
            return Ok(());
        };
        let automatic =
            first.name == default_entity_name(0) || previous.as_deref() == Some(first.name.as_str());
        if !automatic || first.name == trimmed {
            return Ok(());
        }
        debug!(name = trimmed, "naming first entity from self display name");
        first.name = trimmed.to_owned();
        self.commit_local_change();
        Ok(())
    }
}
