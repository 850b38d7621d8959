use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::ChartSnapshot;
use crate::error::{ChartError, ChartResult};
use crate::host::EditorHost;
use crate::render::Renderer;

use super::ChartEditor;
use super::sync_gate::{EchoGuard, OutboundDecision, SnapshotKey};

/// What happened to an inbound snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InboundOutcome {
    Applied,
    /// Equal by value to the local state; nothing changed.
    Unchanged,
    /// Dropped because a pointer drag is in progress.
    IgnoredWhileDragging,
    IgnoredAfterTeardown,
}

impl<R: Renderer, H: EditorHost> ChartEditor<R, H> {
    /// Current local state as a persistable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        self.state.to_snapshot()
    }

    pub fn snapshot_key(&self) -> ChartResult<SnapshotKey> {
        SnapshotKey::of(&self.snapshot())
    }

    #[must_use]
    pub fn echo_guard(&self) -> EchoGuard {
        self.sync.guard()
    }

    /// Whether explicit external data has been applied at least once.
    #[must_use]
    pub fn has_applied_external(&self) -> bool {
        self.external_applied
    }

    /// Accepts a snapshot pushed by the host.
    ///
    /// `None` means "no data yet" and resets to the built-in defaults. While a
    /// drag is active the snapshot is dropped entirely. Otherwise a snapshot
    /// equal to the local state is skipped, and anything else overwrites the
    /// local state with outbound commits suppressed until the next tick.
    pub fn apply_external_snapshot(&mut self, inbound: Option<ChartSnapshot>) -> InboundOutcome {
        if self.torn_down {
            return InboundOutcome::IgnoredAfterTeardown;
        }
        if self.drag.is_dragging() {
            debug!("ignoring inbound snapshot during drag");
            return InboundOutcome::IgnoredWhileDragging;
        }

        let explicit = inbound.is_some();
        let snapshot = inbound.unwrap_or_else(|| {
            let seed = if self.external_applied {
                None
            } else {
                self.self_display_name.as_deref()
            };
            let mut defaults = ChartSnapshot::defaults(seed);
            defaults.height = Some(self.state.height_px);
            defaults.y_step = self.state.y_step.as_option();
            defaults
        });

        let unchanged = match (SnapshotKey::of(&snapshot), self.snapshot_key()) {
            (Ok(inbound_key), Ok(local_key)) => inbound_key == local_key,
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "failed to key snapshots, applying inbound");
                false
            }
        };
        if explicit {
            self.external_applied = true;
        }
        if unchanged {
            trace!("inbound snapshot equals local state");
            return InboundOutcome::Unchanged;
        }

        let token = self.sync.begin_external();
        self.state.overwrite_from(snapshot);
        let feature_count = self.state.features.len();
        let report = self.reconciler.reconcile(
            self.state.entities.values_mut(),
            feature_count,
            self.state.min_y,
            self.state.max_y,
        );
        match self.snapshot_key() {
            Ok(key) => self.sync.record_external(key),
            Err(err) => warn!(error = %err, "inbound state has no outbound baseline"),
        }
        if self.sync.hold_until_tick(token) {
            self.host.schedule_tick();
        }

        debug!(
            explicit,
            feature_count,
            entity_count = self.state.entities.len(),
            padded = report.padded_entities,
            truncated = report.truncated_entities,
            "applied inbound snapshot"
        );
        InboundOutcome::Applied
    }

    /// Decodes a stored JSON payload leniently and applies it.
    ///
    /// Shape problems are repaired field by field; only text that is not JSON
    /// at all is rejected, leaving local state untouched.
    pub fn apply_external_json(&mut self, input: &str) -> ChartResult<InboundOutcome> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse inbound snapshot json: {e}"))
        })?;
        Ok(self.apply_external_snapshot(ChartSnapshot::from_loose_value(&value)))
    }

    /// Scheduling tick requested through `EditorHost::schedule_tick`.
    ///
    /// Releases the echo guard, then flushes any local edit made while it was
    /// engaged.
    pub fn on_tick(&mut self) {
        if self.torn_down {
            return;
        }
        if self.sync.release_held() {
            trace!("echo guard released");
            self.sync_outbound();
        }
    }

    /// Reconciles if the feature count moved, then offers the state outbound.
    pub(super) fn commit_local_change(&mut self) {
        let feature_count = self.state.features.len();
        let report = self.reconciler.reconcile_if_due(
            self.state.entities.values_mut(),
            feature_count,
            self.state.min_y,
            self.state.max_y,
        );
        if report.changed() {
            debug!(
                feature_count,
                padded = report.padded_entities,
                truncated = report.truncated_entities,
                "reconciled entity values"
            );
        }
        self.sync_outbound();
    }

    pub(super) fn sync_outbound(&mut self) {
        let snapshot = self.snapshot();
        let key = match SnapshotKey::of(&snapshot) {
            Ok(key) => key,
            Err(err) => {
                warn!(error = %err, "skipping outbound commit");
                return;
            }
        };
        match self.sync.admit(key) {
            OutboundDecision::Emit => {
                trace!(entity_count = snapshot.entities.len(), "commit snapshot");
                self.host.commit(&snapshot);
            }
            OutboundDecision::Duplicate => trace!("outbound snapshot unchanged"),
            OutboundDecision::Suppressed => trace!("outbound commit suppressed by echo guard"),
        }
    }
}
