//! Unification of render triggers.
//!
//! Two independent change sources, user interaction with the internal
//! input and programmatic `value` assignment, converge on a single
//! render call. The bridge is the per-instance registration that decides
//! whether a trigger is honored at all: one explicit state machine in
//! place of retained listener references and mutation observation.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Listener registration state for one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BridgeState {
    #[default]
    Unattached,
    Attached,
    Detached,
}

/// Per-instance render-trigger gate.
///
/// Transitions: `Unattached -> Attached` exactly once, then
/// `Attached -> Detached`. Detach is idempotent and never errors, so
/// teardown is safe after a partial construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeBridge {
    state: BridgeState,
}

impl ChangeBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Installs the trigger gate. A second attach, or an attach after
    /// detach, is ignored: lifecycle hooks must stay total.
    pub fn attach(&mut self) {
        match self.state {
            BridgeState::Unattached => self.state = BridgeState::Attached,
            BridgeState::Attached | BridgeState::Detached => {
                warn!(state = ?self.state, "ignoring attach on already-wired bridge");
            }
        }
    }

    /// Removes the trigger gate. No-op when never attached or already
    /// detached.
    pub fn detach(&mut self) {
        self.state = BridgeState::Detached;
    }

    /// Whether a render trigger fired now should be honored.
    #[must_use]
    pub fn accepts_triggers(&self) -> bool {
        self.state == BridgeState::Attached
    }
}
