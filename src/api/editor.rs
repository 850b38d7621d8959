use tracing::debug;

use crate::core::DimensionReconciler;
use crate::host::EditorHost;
use crate::interaction::DragState;
use crate::render::Renderer;

use super::{
    ChartEditorConfig, editor_state::EditorState, layout_observer::LayoutObserver,
    render_style::RenderStyle, sync_gate::SyncGate,
};

/// Main facade consumed by host applications.
///
/// `ChartEditor` owns the local working copy of the chart and coordinates
/// reconciliation, outbound/inbound synchronization, pointer drags, layout
/// and rendering. It is single-threaded and event-driven: every method is
/// expected to be called from the host's UI loop.
pub struct ChartEditor<R: Renderer, H: EditorHost> {
    pub(super) renderer: R,
    pub(super) host: H,
    pub(super) config: ChartEditorConfig,
    pub(super) render_style: RenderStyle,
    pub(super) state: EditorState,
    pub(super) reconciler: DimensionReconciler,
    pub(super) sync: SyncGate,
    pub(super) drag: DragState,
    pub(super) layout: LayoutObserver,
    pub(super) self_display_name: Option<String>,
    /// Set once explicit external data has been applied; disables auto-naming.
    pub(super) external_applied: bool,
    pub(super) torn_down: bool,
}

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn config(&self) -> &ChartEditorConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Detaches the editor from its host.
    ///
    /// Cancels pending frame requests, stops resize observation and releases
    /// the echo guard. Every later host callback becomes a no-op and local
    /// edits fail with `ChartError::TornDown`. Calling it again does nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(frame) = self.drag.reset() {
            self.host.cancel_animation_frame(frame);
        }
        let (target, frame) = self.layout.stop();
        if let Some(frame) = frame {
            self.host.cancel_animation_frame(frame);
        }
        if let Some(target) = target {
            self.host.unobserve_resize(target);
        }
        self.sync.release_held();
        debug!("chart editor torn down");
    }

    pub(super) fn ensure_attached(&self) -> crate::error::ChartResult<()> {
        if self.torn_down {
            return Err(crate::error::ChartError::TornDown);
        }
        Ok(())
    }
}

impl<R: Renderer, H: EditorHost> Drop for ChartEditor<R, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
