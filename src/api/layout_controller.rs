use tracing::debug;

use crate::core::{ChartGeometry, ChartMargins, Viewport};
use crate::error::ChartResult;
use crate::host::{EditorHost, ResizeTarget};
use crate::interaction::ThrottleDecision;
use crate::render::Renderer;

use super::ChartEditor;

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.layout.is_full_screen()
    }

    /// Width applied by the last layout pass, in whole pixels.
    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.layout.applied_width()
    }

    #[must_use]
    pub fn observed_resize_target(&self) -> Option<ResizeTarget> {
        self.layout.observing()
    }

    #[must_use]
    pub fn margins(&self) -> ChartMargins {
        self.config.margins_for(self.layout.is_full_screen())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.layout.applied_width(), self.state.height_px.round() as u32)
    }

    /// Geometry for the current layout and data range.
    ///
    /// Fails while the measured width leaves no room inside the margins.
    pub fn geometry(&self) -> ChartResult<ChartGeometry> {
        ChartGeometry::new(
            self.viewport(),
            self.margins(),
            self.state.features.len(),
            self.state.min_y,
            self.state.max_y,
            self.state.y_step,
        )
    }

    /// Size notification from the host's resize observer.
    ///
    /// The layout pass runs on the next animation frame with the latest width.
    pub fn notify_resize(&mut self, target: ResizeTarget, width_px: f64) {
        if self.torn_down {
            return;
        }
        if let Some(ThrottleDecision::RequestFrame) = self.layout.on_resize(target, width_px) {
            let frame = self.host.request_animation_frame();
            self.layout.arm(frame);
        }
    }

    /// Switches between embedded and full-screen presentation.
    ///
    /// Resize observation moves to the window viewport in full screen and back
    /// to the container otherwise. Full screen is not part of the snapshot.
    pub fn set_full_screen(&mut self, full_screen: bool) -> ChartResult<()> {
        self.ensure_attached()?;
        let Some((previous, next, stale_frame)) = self.layout.set_full_screen(full_screen) else {
            return Ok(());
        };
        if let Some(frame) = stale_frame {
            self.host.cancel_animation_frame(frame);
        }
        if let Some(previous) = previous {
            self.host.unobserve_resize(previous);
        }
        self.host.observe_resize(next);
        debug!(full_screen, target = ?next, "presentation mode changed");
        Ok(())
    }
}
