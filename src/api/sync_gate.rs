use serde::{Deserialize, Serialize};

use crate::core::ChartSnapshot;
use crate::error::{ChartError, ChartResult};

/// Stable comparison key of a snapshot.
///
/// The key is the compact JSON serialization; struct field order is fixed, so
/// snapshots that are equal by value always produce equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(String);

impl SnapshotKey {
    pub fn of(snapshot: &ChartSnapshot) -> ChartResult<Self> {
        serde_json::to_string(snapshot)
            .map(Self)
            .map_err(|e| ChartError::InvalidData(format!("failed to key snapshot: {e}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Re-entrancy guard for the outbound path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EchoGuard {
    #[default]
    Idle,
    ApplyingExternal,
}

/// Proof that an external application is in progress.
///
/// The guard returns to `Idle` only by handing this token back, so there is
/// exactly one way out of `ApplyingExternal`.
#[derive(Debug)]
#[must_use = "dropping the token leaves the echo guard engaged"]
pub struct ApplyingExternalToken {
    _private: (),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundDecision {
    Emit,
    Duplicate,
    Suppressed,
}

/// Outbound choke point: every candidate commit passes through [`SyncGate::admit`].
#[derive(Debug, Default)]
pub struct SyncGate {
    guard: EchoGuard,
    held: Option<ApplyingExternalToken>,
    last_emitted: Option<SnapshotKey>,
}

impl SyncGate {
    #[must_use]
    pub fn new(baseline: Option<SnapshotKey>) -> Self {
        Self {
            guard: EchoGuard::Idle,
            held: None,
            last_emitted: baseline,
        }
    }

    #[must_use]
    pub fn guard(&self) -> EchoGuard {
        self.guard
    }

    #[must_use]
    pub fn last_emitted(&self) -> Option<&SnapshotKey> {
        self.last_emitted.as_ref()
    }

    pub fn begin_external(&mut self) -> ApplyingExternalToken {
        self.guard = EchoGuard::ApplyingExternal;
        ApplyingExternalToken { _private: () }
    }

    pub fn release(&mut self, token: ApplyingExternalToken) {
        let ApplyingExternalToken { _private: () } = token;
        self.guard = EchoGuard::Idle;
    }

    /// Parks the token until the next scheduling tick.
    ///
    /// Returns `true` when a tick must be requested (nothing was parked yet).
    pub fn hold_until_tick(&mut self, token: ApplyingExternalToken) -> bool {
        self.held.replace(token).is_none()
    }

    /// Releases a parked token; returns whether the guard changed.
    pub fn release_held(&mut self) -> bool {
        match self.held.take() {
            Some(token) => {
                self.release(token);
                true
            }
            None => false,
        }
    }

    /// Marks externally applied state as already known to the host.
    pub fn record_external(&mut self, key: SnapshotKey) {
        self.last_emitted = Some(key);
    }

    pub fn admit(&mut self, key: SnapshotKey) -> OutboundDecision {
        if self.guard == EchoGuard::ApplyingExternal {
            return OutboundDecision::Suppressed;
        }
        if self.last_emitted.as_ref() == Some(&key) {
            return OutboundDecision::Duplicate;
        }
        self.last_emitted = Some(key);
        OutboundDecision::Emit
    }
}
