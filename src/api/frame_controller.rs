use tracing::trace;

use crate::host::{EditorHost, FrameRequestId};
use crate::render::Renderer;

use super::ChartEditor;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    /// Animation frame granted by the host.
    ///
    /// Frames that no longer belong to a pending drag update or layout pass
    /// (cancelled, superseded, or after teardown) are ignored.
    pub fn on_animation_frame(&mut self, frame: FrameRequestId) {
        if self.torn_down {
            return;
        }
        if let Some((target, pixel_y)) = self.drag.on_frame(frame) {
            self.apply_drag_pixel(&target, pixel_y);
            return;
        }
        if let Some(width) = self.layout.on_frame(frame) {
            trace!(width, "layout width changed");
        }
    }
}
