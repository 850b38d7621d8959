use chart_editor::api::{ChartEditor, ChartEditorConfig, InboundOutcome};
use chart_editor::core::{ChartSnapshot, DimensionReconciler, Entity, EntityId};
use chart_editor::host::ManualHost;
use chart_editor::render::NullRenderer;

fn editor() -> ChartEditor<NullRenderer, ManualHost> {
    ChartEditor::new(
        NullRenderer::default(),
        ManualHost::default(),
        ChartEditorConfig::default(),
    )
    .expect("editor init")
}

fn two_feature_snapshot() -> ChartSnapshot {
    ChartSnapshot {
        features: vec!["Price".to_owned(), "Location".to_owned()],
        min_y: 0.0,
        max_y: 10.0,
        entities: vec![Entity::new(
            EntityId::new("entity-1"),
            "Acme",
            "#2563eb",
            vec![5.0, 5.0],
        )],
        height: None,
        y_step: None,
    }
}

fn values_of(editor: &ChartEditor<NullRenderer, ManualHost>) -> Vec<f64> {
    editor
        .entities()
        .next()
        .expect("one entity")
        .values
        .clone()
}

#[test]
fn adding_a_feature_pads_with_midpoint() {
    let mut editor = editor();
    assert_eq!(
        editor.apply_external_snapshot(Some(two_feature_snapshot())),
        InboundOutcome::Applied
    );

    editor.add_feature("Quality").expect("add feature");

    assert_eq!(editor.features(), ["Price", "Location", "Quality"]);
    assert_eq!(values_of(&editor), vec![5.0, 5.0, 5.0]);
}

#[test]
fn removing_a_feature_keeps_remaining_values_in_order() {
    let mut editor = editor();
    editor.apply_external_snapshot(Some(two_feature_snapshot()));
    editor.add_feature("Quality").expect("add feature");
    assert_eq!(values_of(&editor), vec![5.0, 5.0, 5.0]);

    editor.remove_feature(0).expect("remove feature");

    assert_eq!(editor.features(), ["Location", "Quality"]);
    assert_eq!(values_of(&editor), vec![5.0, 5.0]);
}

#[test]
fn removing_a_feature_shifts_distinct_values_down() {
    let mut editor = editor();
    let id = editor.entities().next().expect("default entity").id.clone();
    editor.set_entity_value(&id, 0, 1.0).expect("set value");
    editor.set_entity_value(&id, 1, 2.0).expect("set value");
    editor.set_entity_value(&id, 2, 3.0).expect("set value");

    editor.remove_feature(0).expect("remove feature");

    assert_eq!(values_of(&editor), vec![2.0, 3.0]);
}

#[test]
fn padding_uses_current_range_midpoint() {
    let mut editor = editor();
    editor.set_range(-20.0, 40.0).expect("set range");
    editor.add_feature("Reach").expect("add feature");
    assert_eq!(values_of(&editor)[3], 10.0);
}

#[test]
fn inbound_vectors_are_aligned_to_inbound_features() {
    let mut editor = editor();
    let mut snapshot = two_feature_snapshot();
    snapshot.entities[0].values = vec![1.0, 2.0, 3.0, 4.0];
    snapshot.entities.push(Entity::new(
        EntityId::new("entity-2"),
        "Globex",
        "#dc2626",
        vec![9.0],
    ));

    editor.apply_external_snapshot(Some(snapshot));

    let values: Vec<Vec<f64>> = editor.entities().map(|e| e.values.clone()).collect();
    assert_eq!(values, vec![vec![1.0, 2.0], vec![9.0, 5.0]]);
    assert!(editor.snapshot().is_aligned());
}

#[test]
fn reconciler_pass_is_idempotent() {
    let mut entities = vec![
        Entity::new(EntityId::new("a"), "A", "#2563eb", vec![1.0]),
        Entity::new(EntityId::new("b"), "B", "#dc2626", vec![1.0, 2.0, 3.0, 4.0]),
    ];
    let mut reconciler = DimensionReconciler::default();

    let first = reconciler.reconcile(entities.iter_mut(), 3, 0.0, 10.0);
    assert_eq!(first.padded_entities, 1);
    assert_eq!(first.truncated_entities, 1);
    let after_first = entities.clone();

    let second = reconciler.reconcile(entities.iter_mut(), 3, 0.0, 10.0);
    assert!(!second.changed());
    assert_eq!(entities, after_first);
}

#[test]
fn reconciler_skips_pass_until_feature_count_changes() {
    let mut entities = vec![Entity::new(EntityId::new("a"), "A", "#2563eb", vec![1.0])];
    let mut reconciler = DimensionReconciler::default();
    assert!(reconciler.is_due(2));

    reconciler.reconcile_if_due(entities.iter_mut(), 2, 0.0, 10.0);
    assert_eq!(reconciler.aligned_feature_count(), Some(2));
    assert!(!reconciler.is_due(2));

    entities[0].values.push(7.0);
    let report = reconciler.reconcile_if_due(entities.iter_mut(), 2, 0.0, 10.0);
    assert!(!report.changed());
    assert_eq!(entities[0].values.len(), 3);
}
