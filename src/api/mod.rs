mod display_controller;
mod drag_controller;
mod editor;
mod editor_config;
mod editor_init;
mod editor_state;
mod entity_controller;
mod feature_controller;
mod frame_controller;
mod json_contract;
mod layout_controller;
mod layout_observer;
mod render_frame_builder;
mod render_style;
mod sync_controller;
mod sync_gate;

pub use editor::ChartEditor;
pub use editor_config::{ChartEditorConfig, clamp_height_px};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use layout_observer::LayoutObserver;
pub use render_style::RenderStyle;
pub use sync_controller::InboundOutcome;
pub use sync_gate::{ApplyingExternalToken, EchoGuard, OutboundDecision, SnapshotKey, SyncGate};
