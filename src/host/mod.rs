mod manual_host;

pub use manual_host::ManualHost;

use serde::{Deserialize, Serialize};

use crate::core::ChartSnapshot;

/// Handle for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameRequestId(pub u64);

/// What the layout observer measures.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ResizeTarget {
    /// Content box of the hosting container.
    Container,
    /// The whole viewport (full-screen mode).
    Viewport,
}

/// Collaborators supplied by the embedding application.
///
/// The editor is driven entirely by host calls and never blocks. Every
/// request made through this trait is answered by the host calling back
/// into the editor: frames through `ChartEditor::on_animation_frame`, ticks
/// through `ChartEditor::on_tick`, resizes through `ChartEditor::notify_resize`.
pub trait EditorHost {
    /// Receives every non-suppressed, non-duplicate local change.
    ///
    /// The editor does not observe success or failure.
    fn commit(&mut self, snapshot: &ChartSnapshot);

    fn request_animation_frame(&mut self) -> FrameRequestId;

    fn cancel_animation_frame(&mut self, frame: FrameRequestId);

    /// Asks for `ChartEditor::on_tick` once the current synchronous batch ends.
    fn schedule_tick(&mut self);

    fn observe_resize(&mut self, target: ResizeTarget);

    fn unobserve_resize(&mut self, target: ResizeTarget);
}
