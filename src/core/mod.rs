pub mod geometry;
pub mod model;
pub mod primitives;
pub mod reconcile;
pub mod snapshot_decode;
pub mod types;

pub use geometry::{AUTO_TICK_COUNT, ChartGeometry, GridTicks, MAX_STEP_TICKS};
pub use model::{
    ChartSnapshot, DEFAULT_FEATURES, DEFAULT_HEIGHT_PX, DEFAULT_MAX_Y, DEFAULT_MIN_Y,
    ENTITY_PALETTE, Entity, EntityId, HEIGHT_OPTIONS_PX, MAX_HEIGHT_PX, MIN_HEIGHT_PX, YStep,
    default_entity_name, palette_color,
};
pub use primitives::{format_axis_value, midpoint, round_to_cents};
pub use reconcile::{DimensionReconciler, ReconcileReport, reconcile_values};
pub use types::{ChartMargins, PlotArea, Viewport};
