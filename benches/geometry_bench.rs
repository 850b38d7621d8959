use chart_editor::api::{ChartEditor, ChartEditorConfig, SnapshotKey};
use chart_editor::core::{
    ChartGeometry, ChartMargins, ChartSnapshot, Entity, EntityId, Viewport, YStep,
};
use chart_editor::host::ManualHost;
use chart_editor::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wide_snapshot(features: usize, entities: usize) -> ChartSnapshot {
    ChartSnapshot {
        features: (0..features).map(|i| format!("Feature {i}")).collect(),
        min_y: 0.0,
        max_y: 100.0,
        entities: (0..entities)
            .map(|i| {
                Entity::new(
                    EntityId::new(format!("entity-{}", i + 1)),
                    format!("Entity {}", i + 1),
                    "#2563eb",
                    (0..features).map(|f| ((i * 7 + f * 3) % 100) as f64).collect(),
                )
            })
            .collect(),
        height: Some(600.0),
        y_step: Some(5.0),
    }
}

fn bench_geometry_round_trip(c: &mut Criterion) {
    let geometry = ChartGeometry::new(
        Viewport::new(1920, 1080),
        ChartMargins::default(),
        12,
        -250.0,
        750.0,
        YStep::Auto,
    )
    .expect("valid geometry");

    c.bench_function("geometry_round_trip", |b| {
        b.iter(|| {
            let px = geometry.y_for_value(black_box(321.123));
            let _ = geometry.value_for_y(black_box(px));
        })
    });
}

fn bench_step_ticks(c: &mut Criterion) {
    let geometry = ChartGeometry::new(
        Viewport::new(1920, 1080),
        ChartMargins::default(),
        12,
        0.0,
        1_000.0,
        YStep::Fixed(2.5),
    )
    .expect("valid geometry");

    c.bench_function("grid_ticks_fixed_step_400", |b| {
        b.iter(|| black_box(geometry.grid_ticks()))
    });
}

fn bench_snapshot_key(c: &mut Criterion) {
    let snapshot = wide_snapshot(20, 50);

    c.bench_function("snapshot_key_20x50", |b| {
        b.iter(|| SnapshotKey::of(black_box(&snapshot)).expect("key"))
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let mut editor = ChartEditor::new(
        NullRenderer::default(),
        ManualHost::default(),
        ChartEditorConfig::default().with_initial_width_px(1_600),
    )
    .expect("editor init");
    editor.apply_external_snapshot(Some(wide_snapshot(20, 50)));
    editor.on_tick();

    c.bench_function("render_frame_20x50", |b| {
        b.iter(|| editor.render_frame().expect("frame"))
    });
}

criterion_group!(
    benches,
    bench_geometry_round_trip,
    bench_step_ticks,
    bench_snapshot_key,
    bench_render_frame
);
criterion_main!(benches);
