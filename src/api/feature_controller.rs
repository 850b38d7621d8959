use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::host::EditorHost;
use crate::render::Renderer;

use super::ChartEditor;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.state.features
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.state.features.len()
    }

    /// Appends a feature; every entity gains a midpoint value for it.
    ///
    /// Returns the new feature's index.
    pub fn add_feature(&mut self, name: impl Into<String>) -> ChartResult<usize> {
        self.ensure_attached()?;
        let name = name.into();
        debug!(name = %name, "add feature");
        self.state.features.push(name);
        self.commit_local_change();
        Ok(self.state.features.len() - 1)
    }

    pub fn rename_feature(&mut self, index: usize, name: impl Into<String>) -> ChartResult<()> {
        self.ensure_attached()?;
        let len = self.state.features.len();
        let slot = self
            .state
            .features
            .get_mut(index)
            .ok_or(ChartError::FeatureIndexOutOfRange { index, len })?;
        *slot = name.into();
        self.commit_local_change();
        Ok(())
    }

    /// Removes a feature and the value at its index from every entity.
    ///
    /// Later features shift down by one, keeping their relative order. A drag
    /// on the removed feature ends; a drag on a later one follows it.
    pub fn remove_feature(&mut self, index: usize) -> ChartResult<()> {
        self.ensure_attached()?;
        let len = self.state.features.len();
        if index >= len {
            return Err(ChartError::FeatureIndexOutOfRange { index, len });
        }
        let removed = self.state.features.remove(index);
        for entity in self.state.entities.values_mut() {
            if index < entity.values.len() {
                entity.values.remove(index);
            }
        }
        if let Some(frame) = self.drag.on_feature_removed(index) {
            self.host.cancel_animation_frame(frame);
        }
        debug!(index, name = %removed, "remove feature");
        self.commit_local_change();
        Ok(())
    }
}
