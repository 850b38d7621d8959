use std::collections::BTreeSet;

use crate::core::ChartSnapshot;
use crate::host::{EditorHost, FrameRequestId, ResizeTarget};

/// Deterministic host that records every request instead of scheduling it.
///
/// Used by tests and headless embedding: the caller decides when frames and
/// ticks happen by draining the recorded requests.
#[derive(Debug, Default)]
pub struct ManualHost {
    commits: Vec<ChartSnapshot>,
    next_frame: u64,
    pending_frames: BTreeSet<FrameRequestId>,
    cancelled_frames: Vec<FrameRequestId>,
    tick_requests: usize,
    observed: BTreeSet<ResizeTarget>,
}

impl ManualHost {
    #[must_use]
    pub fn commits(&self) -> &[ChartSnapshot] {
        &self.commits
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    #[must_use]
    pub fn last_commit(&self) -> Option<&ChartSnapshot> {
        self.commits.last()
    }

    pub fn clear_commits(&mut self) {
        self.commits.clear();
    }

    #[must_use]
    pub fn pending_frames(&self) -> Vec<FrameRequestId> {
        self.pending_frames.iter().copied().collect()
    }

    /// Removes and returns every outstanding frame request, oldest first.
    pub fn take_pending_frames(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending_frames)
            .into_iter()
            .collect()
    }

    #[must_use]
    pub fn cancelled_frames(&self) -> &[FrameRequestId] {
        &self.cancelled_frames
    }

    #[must_use]
    pub fn tick_requests(&self) -> usize {
        self.tick_requests
    }

    /// Consumes outstanding tick requests; returns whether any were pending.
    pub fn take_tick_request(&mut self) -> bool {
        let pending = self.tick_requests > 0;
        self.tick_requests = 0;
        pending
    }

    #[must_use]
    pub fn is_observing(&self, target: ResizeTarget) -> bool {
        self.observed.contains(&target)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

impl EditorHost for ManualHost {
    fn commit(&mut self, snapshot: &ChartSnapshot) {
        self.commits.push(snapshot.clone());
    }

    fn request_animation_frame(&mut self) -> FrameRequestId {
        self.next_frame += 1;
        let frame = FrameRequestId(self.next_frame);
        self.pending_frames.insert(frame);
        frame
    }

    fn cancel_animation_frame(&mut self, frame: FrameRequestId) {
        if self.pending_frames.remove(&frame) {
            self.cancelled_frames.push(frame);
        }
    }

    fn schedule_tick(&mut self) {
        self.tick_requests += 1;
    }

    fn observe_resize(&mut self, target: ResizeTarget) {
        self.observed.insert(target);
    }

    fn unobserve_resize(&mut self, target: ResizeTarget) {
        self.observed.remove(&target);
    }
}
