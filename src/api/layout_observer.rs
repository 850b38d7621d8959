use crate::host::{FrameRequestId, ResizeTarget};
use crate::interaction::{FrameThrottle, ThrottleDecision};

/// Tracks the width available to the chart.
///
/// Resize notifications are coalesced to one layout pass per animation frame,
/// and a pass only reports a change when the whole-pixel width differs from
/// the last applied one. This keeps observe -> relayout -> observe from
/// looping.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutObserver {
    full_screen: bool,
    observing: Option<ResizeTarget>,
    applied_width: u32,
    pending_width: FrameThrottle<f64>,
}

impl LayoutObserver {
    #[must_use]
    pub fn new(full_screen: bool, initial_width: u32) -> Self {
        Self {
            full_screen,
            observing: None,
            applied_width: initial_width,
            pending_width: FrameThrottle::default(),
        }
    }

    #[must_use]
    pub fn target_for(full_screen: bool) -> ResizeTarget {
        if full_screen {
            ResizeTarget::Viewport
        } else {
            ResizeTarget::Container
        }
    }

    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    #[must_use]
    pub fn observing(&self) -> Option<ResizeTarget> {
        self.observing
    }

    #[must_use]
    pub fn applied_width(&self) -> u32 {
        self.applied_width
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending_width.pending_frame()
    }

    /// Starts observing the target for the current mode and returns it.
    pub fn start(&mut self) -> ResizeTarget {
        let target = Self::target_for(self.full_screen);
        self.observing = Some(target);
        target
    }

    /// Stops observing; returns the target to unobserve and the frame to cancel.
    pub fn stop(&mut self) -> (Option<ResizeTarget>, Option<FrameRequestId>) {
        (self.observing.take(), self.pending_width.cancel())
    }

    /// Switches mode. Returns `None` when the mode is unchanged, otherwise the
    /// previous target, the new target, and a stale frame to cancel.
    pub fn set_full_screen(
        &mut self,
        full_screen: bool,
    ) -> Option<(Option<ResizeTarget>, ResizeTarget, Option<FrameRequestId>)> {
        if self.full_screen == full_screen {
            return None;
        }
        let (previous, stale_frame) = self.stop();
        self.full_screen = full_screen;
        let next = self.start();
        Some((previous, next, stale_frame))
    }

    /// Offers a measured width. Notifications for a target that is not being
    /// observed, or with unusable widths, are dropped.
    pub fn on_resize(&mut self, target: ResizeTarget, width: f64) -> Option<ThrottleDecision> {
        if self.observing != Some(target) || !width.is_finite() || width < 0.0 {
            return None;
        }
        Some(self.pending_width.push(width))
    }

    pub fn arm(&mut self, frame: FrameRequestId) {
        self.pending_width.arm(frame);
    }

    /// Runs the layout pass for `frame`; `Some(width)` only when it changed.
    pub fn on_frame(&mut self, frame: FrameRequestId) -> Option<u32> {
        let measured = self.pending_width.fire(frame)?;
        let width = measured.floor() as u32;
        if width == self.applied_width {
            return None;
        }
        self.applied_width = width;
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutObserver;
    use crate::host::{FrameRequestId, ResizeTarget};
    use crate::interaction::ThrottleDecision;

    #[test]
    fn bursts_collapse_into_one_pass_with_latest_width() {
        let mut layout = LayoutObserver::new(false, 800);
        assert_eq!(layout.start(), ResizeTarget::Container);

        assert_eq!(
            layout.on_resize(ResizeTarget::Container, 640.4),
            Some(ThrottleDecision::RequestFrame)
        );
        layout.arm(FrameRequestId(1));
        assert_eq!(
            layout.on_resize(ResizeTarget::Container, 700.9),
            Some(ThrottleDecision::Coalesced)
        );
        assert_eq!(layout.on_frame(FrameRequestId(1)), Some(700));
        assert_eq!(layout.applied_width(), 700);
    }

    #[test]
    fn unchanged_width_does_not_report() {
        let mut layout = LayoutObserver::new(false, 800);
        layout.start();
        layout.on_resize(ResizeTarget::Container, 800.2);
        layout.arm(FrameRequestId(3));
        assert_eq!(layout.on_frame(FrameRequestId(3)), None);
    }

    #[test]
    fn ignores_targets_not_observed_in_current_mode() {
        let mut layout = LayoutObserver::new(true, 800);
        layout.start();
        assert_eq!(layout.on_resize(ResizeTarget::Container, 500.0), None);
        assert!(layout.on_resize(ResizeTarget::Viewport, 1600.0).is_some());
    }

    #[test]
    fn switching_mode_swaps_targets_and_drops_stale_frame() {
        let mut layout = LayoutObserver::new(false, 800);
        layout.start();
        layout.on_resize(ResizeTarget::Container, 500.0);
        layout.arm(FrameRequestId(9));

        let (previous, next, stale) = layout.set_full_screen(true).expect("mode changed");
        assert_eq!(previous, Some(ResizeTarget::Container));
        assert_eq!(next, ResizeTarget::Viewport);
        assert_eq!(stale, Some(FrameRequestId(9)));
        assert!(layout.set_full_screen(true).is_none());
    }
}
