//! Per-field tolerant decoding of externally persisted snapshots.
//!
//! Stored chart payloads are owned by another system and may have drifted in
//! shape. Decoding never fails: each field falls back independently.

use serde_json::Value;

use crate::core::model::{ChartSnapshot, DEFAULT_MAX_Y, DEFAULT_MIN_Y, Entity, EntityId};
use crate::core::primitives::midpoint;

impl ChartSnapshot {
    /// Decodes a loosely shaped JSON value.
    ///
    /// `null` or a non-object value means "no data yet" and yields `None`.
    /// Blank ids, names and colors are left empty for the editor to assign.
    #[must_use]
    pub fn from_loose_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let features = match object.get("features") {
            Some(Value::Array(items)) => items.iter().map(loose_feature_name).collect(),
            _ => Vec::new(),
        };
        let min_y = object
            .get("minY")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_MIN_Y);
        let max_y = object
            .get("maxY")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_MAX_Y);
        let fill = midpoint(min_y, max_y);
        let entities = match object.get("entities") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| loose_entity(item, fill))
                .collect(),
            _ => Vec::new(),
        };

        Some(Self {
            features,
            min_y,
            max_y,
            entities,
            height: object.get("height").and_then(Value::as_f64),
            y_step: object.get("yStep").and_then(Value::as_f64),
        })
    }
}

fn loose_feature_name(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

fn loose_entity(value: &Value, fill: f64) -> Option<Entity> {
    let object = value.as_object()?;
    let id = match object.get("id") {
        Some(Value::String(id)) => EntityId::new(id.clone()),
        Some(Value::Number(id)) => EntityId::new(id.to_string()),
        _ => EntityId::new(String::new()),
    };
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let color = object
        .get("color")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let values = match object.get("values") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_f64().filter(|v| v.is_finite()).unwrap_or(fill))
            .collect(),
        _ => Vec::new(),
    };
    let visible = object
        .get("visible")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Some(Entity {
        id,
        name,
        color,
        values,
        visible,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::core::ChartSnapshot;

    #[test]
    fn null_and_scalars_mean_no_data() {
        assert!(ChartSnapshot::from_loose_value(&json!(null)).is_none());
        assert!(ChartSnapshot::from_loose_value(&json!("chart")).is_none());
        assert!(ChartSnapshot::from_loose_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn each_field_defaults_independently() {
        let snapshot = ChartSnapshot::from_loose_value(&json!({
            "features": "Price",
            "minY": "low",
            "maxY": 20,
            "entities": [
                { "id": "a", "name": "A", "values": [1, "x", null] },
                42,
                { "values": "none", "visible": false }
            ],
            "height": "tall",
            "yStep": 2
        }))
        .expect("object decodes");

        assert!(snapshot.features.is_empty());
        assert_eq!(snapshot.min_y, 0.0);
        assert_eq!(snapshot.max_y, 20.0);
        assert_eq!(snapshot.entities.len(), 2);
        assert_eq!(snapshot.entities[0].values, vec![1.0, 10.0, 10.0]);
        assert!(snapshot.entities[1].id.is_blank());
        assert!(snapshot.entities[1].values.is_empty());
        assert!(!snapshot.entities[1].visible);
        assert_eq!(snapshot.height, None);
        assert_eq!(snapshot.y_step, Some(2.0));
    }

    #[test]
    fn numeric_feature_names_are_stringified() {
        let snapshot =
            ChartSnapshot::from_loose_value(&json!({ "features": ["Price", 7, null] }))
                .expect("object decodes");
        assert_eq!(snapshot.features, vec!["Price", "7", ""]);
    }
}
