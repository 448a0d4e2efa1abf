//! Private mode gate for Scout.
//!
//! A small state machine deciding whether private searches may run and
//! whether history recording is bypassed. Unlocking is delegated to an
//! external authenticator (the platform biometric prompt); this module only
//! tracks the resulting state.
//!
//! While the feature is enabled (any state other than `Disabled`), searches
//! are never recorded to history.

use tracing::{debug, warn};

use crate::types::auth::{AuthOutcome, AuthPolicy, GateState, UnlockResult};

/// External authenticator collaborator.
///
/// `evaluate` resolves only when the platform prompt has completed; there is
/// no timeout on this side.
pub trait Authenticator {
    fn evaluate(&self, policy: AuthPolicy) -> AuthOutcome;
}

/// The private mode gate.
pub struct PrivateModeGate {
    state: GateState,
    authenticator: Box<dyn Authenticator>,
}

impl PrivateModeGate {
    /// Creates the gate. With the feature off it starts `Disabled`,
    /// otherwise `Locked`.
    pub fn new(authenticator: Box<dyn Authenticator>, feature_enabled: bool) -> Self {
        let state = if feature_enabled {
            GateState::Locked
        } else {
            GateState::Disabled
        };
        Self {
            state,
            authenticator,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether the private mode feature is currently on. While it is,
    /// searches bypass history regardless of unlock state.
    pub fn is_active(&self) -> bool {
        self.state != GateState::Disabled
    }

    /// Whether private searches may run right now.
    pub fn can_search(&self) -> bool {
        matches!(
            self.state,
            GateState::Unlocked | GateState::UnlockedDegraded
        )
    }

    /// Standing warning: access was granted without proof of identity.
    pub fn degraded_warning(&self) -> bool {
        self.state == GateState::UnlockedDegraded
    }

    /// Toggles the feature on or off. An unlocked gate locks on the way out,
    /// so re-enabling always starts from `Locked`.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state = match (enabled, self.state) {
            (true, GateState::Disabled) => GateState::Locked,
            (true, current) => current,
            (false, _) => GateState::Disabled,
        };
    }

    /// Asks the authenticator to unlock the gate.
    ///
    /// Only a `Locked` gate consults the authenticator: a failed or cancelled
    /// attempt leaves the gate `Locked` and the caller re-offers the unlock
    /// action. When no authenticator is configured on the device at all,
    /// access is granted in the `UnlockedDegraded` state and
    /// [`degraded_warning`](Self::degraded_warning) turns on.
    pub fn request_unlock(&mut self) -> UnlockResult {
        match self.state {
            GateState::Unlocked | GateState::UnlockedDegraded => return UnlockResult::Granted,
            GateState::Disabled => return UnlockResult::Denied,
            GateState::Locked => {}
        }

        match self.authenticator.evaluate(AuthPolicy::Biometric) {
            AuthOutcome::Success => {
                self.state = GateState::Unlocked;
                UnlockResult::Granted
            }
            AuthOutcome::Failure(reason) => {
                debug!("unlock denied: {}", reason);
                UnlockResult::Denied
            }
            AuthOutcome::Unavailable => {
                warn!("no authenticator configured, granting degraded access");
                self.state = GateState::UnlockedDegraded;
                UnlockResult::Granted
            }
        }
    }

    /// Explicit lock action, also used when the surrounding session ends.
    pub fn lock(&mut self) {
        if self.state != GateState::Disabled {
            self.state = GateState::Locked;
        }
    }
}
