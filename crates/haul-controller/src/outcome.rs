//! Action outcomes — what the action layer reports back for each request.
//!
//! The three-way split separates the signals a caller must react to
//! differently: `Done` needs nothing, `Retryable` means the same action will
//! succeed once some transient condition clears (the controller converts
//! out-of-range into a move request and retries naturally next tick), and
//! `Failed` means repeating the action as-is is pointless this tick.

/// Result of a single action request (pickup, withdraw, transfer, move).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ActionOutcome {
    /// The action took effect this tick.
    Done,
    /// The action cannot take effect yet; retry once `reason` clears.
    Retryable(RetryReason),
    /// The action cannot take effect against current state.
    Failed(FailureReason),
}

impl ActionOutcome {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, ActionOutcome::Done)
    }
}

/// Why an action must wait.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RetryReason {
    /// The actor is too far from the target; moving closer will clear this.
    OutOfRange,
}

/// Why an action failed outright.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FailureReason {
    /// No such entity: no deposit to pick up, unknown structure id.
    NotFound,
    /// The source side has nothing to give (empty carried store or source).
    InsufficientResource,
    /// The receiving side has no room.
    StoreFull,
    /// Anything else; carried verbatim into diagnostics.
    Other(&'static str),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::NotFound             => f.write_str("not found"),
            FailureReason::InsufficientResource => f.write_str("insufficient resource"),
            FailureReason::StoreFull            => f.write_str("store full"),
            FailureReason::Other(what)          => f.write_str(what),
        }
    }
}
