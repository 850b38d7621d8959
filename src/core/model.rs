use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::primitives::midpoint;

pub const DEFAULT_FEATURES: [&str; 3] = ["Price", "Quality", "Service"];
pub const DEFAULT_MIN_Y: f64 = 0.0;
pub const DEFAULT_MAX_Y: f64 = 10.0;

/// Series colors, assigned by creation ordinal and cycled.
pub const ENTITY_PALETTE: [&str; 8] = [
    "#2563eb", "#dc2626", "#16a34a", "#d97706", "#7c3aed", "#0891b2", "#db2777", "#4b5563",
];

/// Pixel heights a host may offer in its height selector.
pub const HEIGHT_OPTIONS_PX: [f64; 6] = [300.0, 400.0, 500.0, 600.0, 800.0, 1080.0];
pub const DEFAULT_HEIGHT_PX: f64 = 400.0;
pub const MIN_HEIGHT_PX: f64 = 200.0;
pub const MAX_HEIGHT_PX: f64 = 1080.0;

#[must_use]
pub fn palette_color(ordinal: u64) -> &'static str {
    ENTITY_PALETTE[(ordinal % ENTITY_PALETTE.len() as u64) as usize]
}

#[must_use]
pub fn default_entity_name(ordinal: u64) -> String {
    format!("Entity {}", ordinal + 1)
}

/// Opaque, stable entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Numeric suffix of ids minted by this crate (`entity-<n>`).
    #[must_use]
    pub(crate) fn minted_sequence(&self) -> Option<u64> {
        self.0.strip_prefix("entity-")?.parse().ok()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn default_visible() -> bool {
    true
}

/// One named data series with a value per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Entity {
    #[must_use]
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        color: impl Into<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            values,
            visible: true,
        }
    }
}

/// Grid density on the shared Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum YStep {
    #[default]
    Auto,
    Fixed(f64),
}

impl YStep {
    /// Maps the persisted optional step; non-positive or non-finite steps mean `Auto`.
    #[must_use]
    pub fn from_option(step: Option<f64>) -> Self {
        match step {
            Some(step) if step.is_finite() && step > 0.0 => Self::Fixed(step),
            _ => Self::Auto,
        }
    }

    #[must_use]
    pub fn as_option(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Fixed(step) => Some(step),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Auto => true,
            Self::Fixed(step) => step.is_finite() && step > 0.0,
        }
    }
}

/// Externally persisted chart aggregate.
///
/// Field order is part of the comparison-key contract: serialization must be
/// deterministic so equal snapshots always produce equal keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub features: Vec<String>,
    pub min_y: f64,
    pub max_y: f64,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub y_step: Option<f64>,
}

impl ChartSnapshot {
    /// Built-in defaults used when the host has no data yet.
    #[must_use]
    pub fn defaults(first_entity_name: Option<&str>) -> Self {
        let features: Vec<String> = DEFAULT_FEATURES.iter().map(|f| (*f).to_owned()).collect();
        let mid = midpoint(DEFAULT_MIN_Y, DEFAULT_MAX_Y);
        let name = first_entity_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| default_entity_name(0), str::to_owned);
        let entity = Entity::new(
            EntityId::new("entity-1"),
            name,
            palette_color(0),
            vec![mid; features.len()],
        );
        Self {
            features,
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            entities: vec![entity],
            height: None,
            y_step: None,
        }
    }

    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| &entity.id == id)
    }

    /// True when every value vector matches the feature count.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.entities
            .iter()
            .all(|entity| entity.values.len() == self.features.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartSnapshot, EntityId, YStep, palette_color};

    #[test]
    fn palette_cycles_by_ordinal() {
        assert_eq!(palette_color(0), palette_color(8));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn defaults_use_self_name_when_present() {
        let snapshot = ChartSnapshot::defaults(Some("  Acme  "));
        assert_eq!(snapshot.entities[0].name, "Acme");
        assert!(snapshot.is_aligned());

        let snapshot = ChartSnapshot::defaults(Some("   "));
        assert_eq!(snapshot.entities[0].name, "Entity 1");
    }

    #[test]
    fn minted_sequence_parses_own_ids_only() {
        assert_eq!(EntityId::new("entity-12").minted_sequence(), Some(12));
        assert_eq!(EntityId::new("abc").minted_sequence(), None);
    }

    #[test]
    fn y_step_rejects_non_positive_steps() {
        assert_eq!(YStep::from_option(Some(0.0)), YStep::Auto);
        assert_eq!(YStep::from_option(Some(-2.0)), YStep::Auto);
        assert_eq!(YStep::from_option(Some(2.0)), YStep::Fixed(2.0));
        assert_eq!(YStep::from_option(None), YStep::Auto);
    }

    #[test]
    fn snapshot_uses_camel_case_fields() {
        let json = serde_json::to_string(&ChartSnapshot::defaults(None)).expect("serialize");
        assert!(json.contains("\"minY\""));
        assert!(json.contains("\"maxY\""));
        assert!(json.contains("\"yStep\""));
    }
}
