#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_editor::ChartError;
use chart_editor::api::{ChartEditor, ChartEditorConfig};
use chart_editor::host::ManualHost;
use chart_editor::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_points_lines_and_labels() {
    let renderer = CairoRenderer::new(800, 400).expect("renderer");
    let mut editor = ChartEditor::new(renderer, ManualHost::default(), ChartEditorConfig::default())
        .expect("editor init");
    editor.add_entity(Some("Second")).expect("add entity");

    editor.render().expect("render");
    let stats = editor.renderer().last_stats();

    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 13);
    assert_eq!(stats.circles_drawn, 6);
    assert_eq!(stats.texts_drawn, 9);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(800, 400).expect("renderer");
    let mut editor = ChartEditor::new(
        renderer,
        ManualHost::default(),
        ChartEditorConfig::default().with_full_screen(true),
    )
    .expect("editor init");

    let surface = ImageSurface::create(Format::ARgb32, 800, 400).expect("surface");
    let context = Context::new(&surface).expect("context");
    editor
        .render_on_cairo_context(&context)
        .expect("render on context");

    let stats = editor.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 3);
    // Plot background plus one legend swatch.
    assert_eq!(stats.rects_drawn, 2);
}
