use chart_editor::api::{ChartEditor, ChartEditorConfig};
use chart_editor::core::{DimensionReconciler, Entity, EntityId};
use chart_editor::host::ManualHost;
use chart_editor::render::NullRenderer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum ListEdit {
    AddFeature,
    RemoveFeature(usize),
    AddEntity,
    RemoveEntity(usize),
}

fn list_edit() -> impl Strategy<Value = ListEdit> {
    prop_oneof![
        Just(ListEdit::AddFeature),
        (0usize..8).prop_map(ListEdit::RemoveFeature),
        Just(ListEdit::AddEntity),
        (0usize..8).prop_map(ListEdit::RemoveEntity),
    ]
}

fn apply(editor: &mut ChartEditor<NullRenderer, ManualHost>, edit: &ListEdit) {
    match edit {
        ListEdit::AddFeature => {
            editor.add_feature("Feature").expect("add feature");
        }
        ListEdit::RemoveFeature(index) => {
            if *index < editor.feature_count() {
                editor.remove_feature(*index).expect("remove feature");
            }
        }
        ListEdit::AddEntity => {
            editor.add_entity(None).expect("add entity");
        }
        ListEdit::RemoveEntity(index) => {
            let id = editor.entities().nth(*index).map(|entity| entity.id.clone());
            if let Some(id) = id {
                editor.remove_entity(&id).expect("remove entity");
            }
        }
    }
}

proptest! {
    #[test]
    fn value_vectors_track_feature_count_property(
        edits in prop::collection::vec(list_edit(), 1..40)
    ) {
        let mut editor = ChartEditor::new(
            NullRenderer::default(),
            ManualHost::default(),
            ChartEditorConfig::default(),
        )
        .expect("editor init");

        for edit in &edits {
            apply(&mut editor, edit);
            let feature_count = editor.feature_count();
            for entity in editor.entities() {
                prop_assert_eq!(entity.values.len(), feature_count);
            }
        }
    }

    #[test]
    fn minted_ids_are_never_reused_property(
        edits in prop::collection::vec(list_edit(), 1..40)
    ) {
        let mut editor = ChartEditor::new(
            NullRenderer::default(),
            ManualHost::default(),
            ChartEditorConfig::default(),
        )
        .expect("editor init");
        let mut seen: Vec<EntityId> = editor.entities().map(|e| e.id.clone()).collect();

        for edit in &edits {
            if let ListEdit::AddEntity = edit {
                let id = editor.add_entity(None).expect("add entity");
                prop_assert!(!seen.contains(&id));
                seen.push(id);
            } else {
                apply(&mut editor, edit);
            }
        }
    }

    #[test]
    fn reconcile_twice_equals_once_property(
        lengths in prop::collection::vec(0usize..10, 0..8),
        feature_count in 0usize..10,
        min_y in -100.0f64..100.0,
        span in 0.0f64..100.0
    ) {
        let max_y = min_y + span;
        let mut entities: Vec<Entity> = lengths
            .iter()
            .enumerate()
            .map(|(i, len)| {
                Entity::new(EntityId::new(format!("e{i}")), "E", "#2563eb", vec![1.0; *len])
            })
            .collect();
        let mut reconciler = DimensionReconciler::default();

        reconciler.reconcile(entities.iter_mut(), feature_count, min_y, max_y);
        let once = entities.clone();
        let report = reconciler.reconcile(entities.iter_mut(), feature_count, min_y, max_y);

        prop_assert!(!report.changed());
        prop_assert_eq!(&entities, &once);
        for entity in &entities {
            prop_assert_eq!(entity.values.len(), feature_count);
        }
    }
}
