use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    ChartSnapshot, DEFAULT_MAX_Y, DEFAULT_MIN_Y, Entity, EntityId, MAX_HEIGHT_PX, MIN_HEIGHT_PX,
    YStep, default_entity_name, midpoint, palette_color,
};
use crate::render::Color;

/// Mints `entity-<n>` ids from a counter that only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct EntityIdAllocator {
    next: u64,
}

impl Default for EntityIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIdAllocator {
    /// Moves the counter past ids this crate minted earlier, possibly in
    /// another session.
    pub(super) fn observe(&mut self, id: &EntityId) {
        if let Some(seq) = id.minted_sequence() {
            self.next = self.next.max(seq.saturating_add(1));
        }
    }

    pub(super) fn mint(&mut self, taken: &IndexMap<EntityId, Entity>) -> EntityId {
        loop {
            let id = EntityId::new(format!("entity-{}", self.next));
            self.next += 1;
            if !taken.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Local working copy of the chart.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct EditorState {
    pub(super) features: Vec<String>,
    pub(super) min_y: f64,
    pub(super) max_y: f64,
    pub(super) entities: IndexMap<EntityId, Entity>,
    pub(super) height_px: f64,
    pub(super) y_step: YStep,
    pub(super) ids: EntityIdAllocator,
    /// Creation ordinal of the next entity; drives palette and default names.
    pub(super) created_entities: u64,
}

impl EditorState {
    pub(super) fn new(height_px: f64, y_step: YStep) -> Self {
        Self {
            features: Vec::new(),
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            entities: IndexMap::new(),
            height_px,
            y_step,
            ids: EntityIdAllocator::default(),
            created_entities: 0,
        }
    }

    pub(super) fn to_snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            features: self.features.clone(),
            min_y: self.min_y,
            max_y: self.max_y,
            entities: self.entities.values().cloned().collect(),
            height: Some(self.height_px),
            y_step: self.y_step.as_option(),
        }
    }

    pub(super) fn midpoint(&self) -> f64 {
        midpoint(self.min_y, self.max_y)
    }

    /// Creates a new entity at the end, aligned to the current features.
    pub(super) fn push_new_entity(&mut self, name: Option<&str>) -> EntityId {
        let ordinal = self.created_entities;
        self.created_entities += 1;
        let id = self.ids.mint(&self.entities);
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| default_entity_name(ordinal), str::to_owned);
        let entity = Entity::new(
            id.clone(),
            name,
            palette_color(ordinal),
            vec![self.midpoint(); self.features.len()],
        );
        self.entities.insert(id.clone(), entity);
        id
    }

    /// Replaces everything with an externally sourced snapshot.
    ///
    /// Each field is sanitized on its own: a bad field never rejects the rest.
    /// Value vectors are not resized here; the reconciler runs afterwards.
    pub(super) fn overwrite_from(&mut self, snapshot: ChartSnapshot) {
        let ChartSnapshot {
            features,
            min_y,
            max_y,
            entities,
            height,
            y_step,
        } = snapshot;

        self.features = features;
        (self.min_y, self.max_y) = sanitize_range(min_y, max_y);
        match height {
            Some(height) if is_accepted_height(height) => self.height_px = height,
            Some(height) => debug!(height, retained = self.height_px, "ignoring inbound height"),
            None => {}
        }
        self.y_step = YStep::from_option(y_step);

        for entity in &entities {
            self.ids.observe(&entity.id);
        }
        let fill = self.midpoint();
        let mut next = IndexMap::with_capacity(entities.len());
        for (position, mut entity) in entities.into_iter().enumerate() {
            if entity.id.is_blank() || next.contains_key(&entity.id) {
                entity.id = self.ids.mint(&next);
            }
            if entity.name.trim().is_empty() {
                entity.name = default_entity_name(position as u64);
            }
            if Color::from_hex(&entity.color).is_err() {
                entity.color = palette_color(position as u64).to_owned();
            }
            for value in &mut entity.values {
                if !value.is_finite() {
                    *value = fill;
                }
            }
            next.insert(entity.id.clone(), entity);
        }
        self.created_entities = self.created_entities.max(next.len() as u64);
        self.entities = next;
    }
}

fn sanitize_range(min_y: f64, max_y: f64) -> (f64, f64) {
    let min_y = if min_y.is_finite() { min_y } else { DEFAULT_MIN_Y };
    let max_y = if max_y.is_finite() { max_y } else { DEFAULT_MAX_Y };
    if min_y <= max_y {
        (min_y, max_y)
    } else {
        (max_y, min_y)
    }
}

fn is_accepted_height(height: f64) -> bool {
    height.is_finite() && (MIN_HEIGHT_PX..=MAX_HEIGHT_PX).contains(&height)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::{EditorState, EntityIdAllocator, sanitize_range};
    use crate::core::{ChartSnapshot, Entity, EntityId, YStep};

    #[test]
    fn allocator_skips_observed_and_taken_ids() {
        let mut ids = EntityIdAllocator::default();
        ids.observe(&EntityId::new("entity-4"));
        ids.observe(&EntityId::new("custom"));
        let mut taken = IndexMap::new();
        taken.insert(
            EntityId::new("entity-5"),
            Entity::new(EntityId::new("entity-5"), "x", "#000000", Vec::new()),
        );
        assert_eq!(ids.mint(&taken), EntityId::new("entity-6"));
    }

    #[test]
    fn range_is_defaulted_and_ordered() {
        assert_eq!(sanitize_range(f64::NAN, 4.0), (0.0, 4.0));
        assert_eq!(sanitize_range(1.0, f64::INFINITY), (1.0, 10.0));
        assert_eq!(sanitize_range(8.0, 2.0), (2.0, 8.0));
    }

    #[test]
    fn overwrite_repairs_entities_field_by_field() {
        let mut state = EditorState::new(400.0, YStep::Auto);
        let mut snapshot = ChartSnapshot::defaults(None);
        snapshot.height = Some(5_000.0);
        snapshot.y_step = Some(-1.0);
        let mut duplicate = snapshot.entities[0].clone();
        duplicate.name = "  ".to_owned();
        duplicate.color = "blue".to_owned();
        duplicate.values = vec![f64::NAN];
        snapshot.entities.push(duplicate);

        state.overwrite_from(snapshot);

        assert_eq!(state.height_px, 400.0);
        assert_eq!(state.y_step, YStep::Auto);
        assert_eq!(state.entities.len(), 2);
        let second = &state.entities[1];
        assert_ne!(second.id, EntityId::new("entity-1"));
        assert_eq!(second.name, "Entity 2");
        assert!(second.color.starts_with('#'));
        assert_eq!(second.values, vec![5.0]);
        assert_eq!(state.created_entities, 2);
    }
}
