use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::host::FrameRequestId;

/// Point currently grabbed by the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTarget {
    pub entity_id: EntityId,
    pub feature_index: usize,
}

impl DragTarget {
    #[must_use]
    pub fn new(entity_id: EntityId, feature_index: usize) -> Self {
        Self {
            entity_id,
            feature_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging(DragTarget),
}

impl InteractionMode {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn drag_target(&self) -> Option<&DragTarget> {
        match self {
            Self::Dragging(target) => Some(target),
            Self::Idle => None,
        }
    }
}

/// Result of offering a payload to a [`FrameThrottle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// No frame is pending; the caller must request one and `arm` it.
    RequestFrame,
    /// A frame is already pending; the payload replaced the previous one.
    Coalesced,
}

/// Single-slot frame throttle: one pending frame handle plus the latest payload.
///
/// Repeated pushes before the frame fires overwrite the payload without
/// asking for more frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameThrottle<T> {
    frame: Option<FrameRequestId>,
    pending: Option<T>,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self {
            frame: None,
            pending: None,
        }
    }
}

impl<T> FrameThrottle<T> {
    pub fn push(&mut self, payload: T) -> ThrottleDecision {
        self.pending = Some(payload);
        if self.frame.is_some() {
            ThrottleDecision::Coalesced
        } else {
            ThrottleDecision::RequestFrame
        }
    }

    pub fn arm(&mut self, frame: FrameRequestId) {
        self.frame = Some(frame);
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.frame
    }

    #[must_use]
    pub fn has_pending_payload(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the payload when `frame` is the one this throttle is waiting for.
    pub fn fire(&mut self, frame: FrameRequestId) -> Option<T> {
        if self.frame != Some(frame) {
            return None;
        }
        self.frame = None;
        self.pending.take()
    }

    /// Takes the payload immediately, returning the frame handle to cancel.
    pub fn flush(&mut self) -> (Option<T>, Option<FrameRequestId>) {
        (self.pending.take(), self.frame.take())
    }

    /// Drops the payload, returning the frame handle to cancel.
    pub fn cancel(&mut self) -> Option<FrameRequestId> {
        self.pending = None;
        self.frame.take()
    }
}

/// Pointer drag lifecycle with frame-throttled value updates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragState {
    mode: InteractionMode,
    pointer_y: FrameThrottle<f64>,
}

impl DragState {
    #[must_use]
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode.is_dragging()
    }

    #[must_use]
    pub fn target(&self) -> Option<&DragTarget> {
        self.mode.drag_target()
    }

    /// `Idle -> Dragging`. A second pointer-down while dragging retargets.
    pub fn on_pointer_down(&mut self, target: DragTarget) {
        self.mode = InteractionMode::Dragging(target);
    }

    /// Queues a pointer Y for the next frame. `None` while idle.
    pub fn on_pointer_move(&mut self, pixel_y: f64) -> Option<ThrottleDecision> {
        if !self.mode.is_dragging() {
            return None;
        }
        Some(self.pointer_y.push(pixel_y))
    }

    pub fn arm_frame(&mut self, frame: FrameRequestId) {
        self.pointer_y.arm(frame);
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pointer_y.pending_frame()
    }

    /// Pointer Y to apply for `frame`, if this drag is waiting on it.
    pub fn on_frame(&mut self, frame: FrameRequestId) -> Option<(DragTarget, f64)> {
        let pixel_y = self.pointer_y.fire(frame)?;
        let target = self.mode.drag_target()?.clone();
        Some((target, pixel_y))
    }

    /// `Dragging -> Idle`. Returns the last unapplied pointer Y with its
    /// target, and the frame request to cancel.
    pub fn on_pointer_up(&mut self) -> (Option<(DragTarget, f64)>, Option<FrameRequestId>) {
        let (pending, frame) = self.pointer_y.flush();
        let last = match (std::mem::take(&mut self.mode), pending) {
            (InteractionMode::Dragging(target), Some(pixel_y)) => Some((target, pixel_y)),
            _ => None,
        };
        (last, frame)
    }

    /// Re-points the drag after feature `removed` was deleted.
    ///
    /// A drag on the removed feature ends and returns its frame to cancel; a
    /// drag on a later feature follows that feature down one slot.
    pub fn on_feature_removed(&mut self, removed: usize) -> Option<FrameRequestId> {
        let grabbed = self.mode.drag_target()?.feature_index;
        match grabbed.cmp(&removed) {
            Ordering::Less => None,
            Ordering::Equal => self.reset(),
            Ordering::Greater => {
                if let InteractionMode::Dragging(target) = &mut self.mode {
                    target.feature_index = grabbed - 1;
                }
                None
            }
        }
    }

    /// Silent transition to `Idle` (lost target or teardown).
    pub fn reset(&mut self) -> Option<FrameRequestId> {
        self.mode = InteractionMode::Idle;
        self.pointer_y.cancel()
    }
}
