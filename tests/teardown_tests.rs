use chart_editor::api::{ChartEditor, ChartEditorConfig, EchoGuard, InboundOutcome};
use chart_editor::core::ChartSnapshot;
use chart_editor::error::ChartError;
use chart_editor::host::{ManualHost, ResizeTarget};
use chart_editor::render::NullRenderer;

type Editor = ChartEditor<NullRenderer, ManualHost>;

fn editor() -> Editor {
    ChartEditor::new(
        NullRenderer::default(),
        ManualHost::default(),
        ChartEditorConfig::default(),
    )
    .expect("editor init")
}

#[test]
fn teardown_releases_host_resources() {
    let mut editor = editor();
    let id = editor.entities().next().expect("entity").id.clone();
    assert!(editor.begin_drag(&id, 0));
    editor.pointer_move(40.0);
    editor.notify_resize(ResizeTarget::Container, 640.0);
    assert_eq!(editor.host().pending_frames().len(), 2);

    editor.teardown();

    assert!(editor.is_torn_down());
    assert!(editor.host().pending_frames().is_empty());
    assert_eq!(editor.host().cancelled_frames().len(), 2);
    assert_eq!(editor.host().observed_count(), 0);
}

#[test]
fn teardown_releases_echo_guard() {
    let mut editor = editor();
    let mut snapshot = ChartSnapshot::defaults(None);
    snapshot.max_y = 50.0;
    editor.apply_external_snapshot(Some(snapshot));
    assert_eq!(editor.echo_guard(), EchoGuard::ApplyingExternal);

    editor.teardown();
    assert_eq!(editor.echo_guard(), EchoGuard::Idle);
}

#[test]
fn events_after_teardown_are_ignored() {
    let mut editor = editor();
    let id = editor.entities().next().expect("entity").id.clone();
    editor.teardown();
    let before = editor.snapshot();

    assert_eq!(
        editor.apply_external_snapshot(None),
        InboundOutcome::IgnoredAfterTeardown
    );
    assert!(editor.pointer_down(413.0, 186.0).is_none());
    assert!(!editor.begin_drag(&id, 0));
    editor.pointer_move(20.0);
    editor.pointer_up();
    editor.notify_resize(ResizeTarget::Container, 300.0);
    editor.on_tick();

    assert!(editor.host().pending_frames().is_empty());
    assert_eq!(editor.host().commit_count(), 0);
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn local_edits_after_teardown_fail() {
    let mut editor = editor();
    let id = editor.entities().next().expect("entity").id.clone();
    editor.teardown();

    assert!(matches!(editor.add_feature("Late"), Err(ChartError::TornDown)));
    assert!(matches!(
        editor.set_entity_value(&id, 0, 1.0),
        Err(ChartError::TornDown)
    ));
    assert!(matches!(editor.set_full_screen(true), Err(ChartError::TornDown)));
    assert_eq!(editor.feature_count(), 3);
}

#[test]
fn teardown_is_idempotent() {
    let mut editor = editor();
    editor.notify_resize(ResizeTarget::Container, 640.0);
    editor.teardown();
    editor.teardown();
    assert_eq!(editor.host().cancelled_frames().len(), 1);
}
