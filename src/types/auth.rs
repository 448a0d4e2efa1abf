/// Authentication policy requested from the device authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Biometrics only (Face ID / fingerprint equivalents).
    Biometric,
    /// Biometrics, falling back to the device passcode.
    BiometricOrPasscode,
}

/// Outcome reported by the external authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    /// Authentication ran and was denied or cancelled.
    Failure(String),
    /// No usable authenticator is configured on the device at all.
    Unavailable,
}

/// States of the private mode gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Private mode feature is turned off.
    Disabled,
    Locked,
    Unlocked,
    /// Access granted without proof of identity because no authenticator is
    /// configured; callers must surface a standing warning.
    UnlockedDegraded,
}

/// Result of an unlock request, as seen by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockResult {
    Granted,
    /// The caller should re-offer the unlock action.
    Denied,
}
