//! chart-editor-rs: headless editor for drag-editable comparison charts.
//!
//! A chart holds ordered named features (the X categories) and named entities
//! (series) with one value per feature on a shared Y scale. The editor keeps a
//! local working copy that the user mutates through list edits and pointer
//! drags, and stays synchronized with a host-owned persisted snapshot without
//! echoing inbound updates back out.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEditor, ChartEditorConfig, InboundOutcome};
pub use core::{ChartSnapshot, Entity, EntityId, YStep};
pub use error::{ChartError, ChartResult};
pub use host::{EditorHost, ManualHost};
