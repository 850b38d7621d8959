use chart_editor::core::{ChartGeometry, ChartMargins, Viewport, YStep};
use proptest::prelude::*;

fn geometry(width: u32, height: u32, min_y: f64, max_y: f64, y_step: YStep) -> ChartGeometry {
    ChartGeometry::new(
        Viewport::new(width, height),
        ChartMargins::default(),
        4,
        min_y,
        max_y,
        y_step,
    )
    .expect("valid geometry")
}

proptest! {
    #[test]
    fn pixel_round_trip_property(
        width in 200u32..2_000,
        height in 200u32..1_080,
        min_y in -10_000.0f64..10_000.0,
        span in 1.0f64..10_000.0,
        pixel_factor in 0.0f64..=1.0
    ) {
        let geometry = geometry(width, height, min_y, min_y + span, YStep::Auto);
        let plot = geometry.plot_area();
        let pixel = plot.top + pixel_factor * plot.height;

        let recovered = geometry.y_for_value(geometry.value_for_y(pixel));
        prop_assert!((recovered - pixel).abs() <= 1e-6);
    }

    #[test]
    fn value_round_trip_property(
        min_y in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        value_factor in 0.0f64..=1.0
    ) {
        let max_y = min_y + span;
        let value = min_y + value_factor * span;
        let geometry = geometry(1_024, 600, min_y, max_y, YStep::Auto);

        let recovered = geometry.value_for_y(geometry.y_for_value(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn value_for_y_stays_in_range_property(
        min_y in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        pixel in -5_000.0f64..5_000.0
    ) {
        let max_y = min_y + span;
        let geometry = geometry(800, 400, min_y, max_y, YStep::Auto);
        let value = geometry.value_for_y(pixel);
        prop_assert!(value >= min_y - 1e-9);
        prop_assert!(value <= min_y + geometry.y_denominator() + 1e-9);
    }

    #[test]
    fn step_ticks_are_sorted_bounded_and_include_boundaries(
        min_y in -100.0f64..100.0,
        span in 0.5f64..100.0,
        step in 0.5f64..25.0
    ) {
        let max_y = min_y + span;
        let ticks = geometry(800, 400, min_y, max_y, YStep::Fixed(step)).grid_ticks();

        prop_assert_eq!(ticks.first().copied(), Some(min_y));
        prop_assert_eq!(ticks.last().copied(), Some(max_y));
        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for tick in &ticks {
            prop_assert!(*tick >= min_y && *tick <= max_y);
        }
    }
}
