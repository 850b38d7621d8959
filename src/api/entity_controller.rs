use tracing::debug;

use crate::core::{Entity, EntityId, round_to_cents};
use crate::error::{ChartError, ChartResult};
use crate::host::EditorHost;
use crate::render::Renderer;

use super::ChartEditor;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    /// Entities in display order.
    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> {
        self.state.entities.values()
    }

    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.state.entities.get(id)
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.state.entities.len()
    }

    /// Appends an entity with midpoint values and the next palette color.
    ///
    /// A blank or missing name becomes `Entity N`.
    pub fn add_entity(&mut self, name: Option<&str>) -> ChartResult<EntityId> {
        self.ensure_attached()?;
        let id = self.state.push_new_entity(name);
        debug!(id = %id, "add entity");
        self.commit_local_change();
        Ok(id)
    }

    pub fn rename_entity(&mut self, id: &EntityId, name: impl Into<String>) -> ChartResult<()> {
        self.ensure_attached()?;
        self.entity_mut(id)?.name = name.into();
        self.commit_local_change();
        Ok(())
    }

    /// Deletes an entity. Its id is never handed out again by this editor.
    pub fn remove_entity(&mut self, id: &EntityId) -> ChartResult<()> {
        self.ensure_attached()?;
        if self.state.entities.shift_remove(id).is_none() {
            return Err(ChartError::UnknownEntity(id.to_string()));
        }
        if self
            .drag
            .target()
            .is_some_and(|target| &target.entity_id == id)
        {
            self.cancel_drag();
        }
        debug!(id = %id, "remove entity");
        self.commit_local_change();
        Ok(())
    }

    /// Flips rendering visibility; returns the new flag.
    pub fn toggle_entity_visibility(&mut self, id: &EntityId) -> ChartResult<bool> {
        self.ensure_attached()?;
        let entity = self.entity_mut(id)?;
        entity.visible = !entity.visible;
        let visible = entity.visible;
        if !visible
            && self
                .drag
                .target()
                .is_some_and(|target| &target.entity_id == id)
        {
            self.cancel_drag();
        }
        self.commit_local_change();
        Ok(visible)
    }

    /// Sets one value from typed input, rounded to two decimals.
    pub fn set_entity_value(
        &mut self,
        id: &EntityId,
        feature_index: usize,
        value: f64,
    ) -> ChartResult<()> {
        self.ensure_attached()?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "entity value must be finite".to_owned(),
            ));
        }
        let len = self.state.features.len();
        let slot = self
            .entity_mut(id)?
            .values
            .get_mut(feature_index)
            .ok_or(ChartError::FeatureIndexOutOfRange {
                index: feature_index,
                len,
            })?;
        let value = round_to_cents(value);
        if *slot == value {
            return Ok(());
        }
        *slot = value;
        self.commit_local_change();
        Ok(())
    }

    fn entity_mut(&mut self, id: &EntityId) -> ChartResult<&mut Entity> {
        self.state
            .entities
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownEntity(id.to_string()))
    }
}
