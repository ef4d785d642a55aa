//! The two-state machine and the per-agent memory that persists it.

/// The controller's operating mode.
///
/// The transition table is explicit and total:
///
/// | Current   | Behavior invoked      | May transition to |
/// |-----------|-----------------------|-------------------|
/// | `Acquire` | acquisition (pickup/withdraw) | `Deliver`  |
/// | `Deliver` | delivery (select/transfer)    | `Acquire`  |
///
/// Behaviors return the *next* mode; the dispatcher stores it, so a tick can
/// never leave the mode unset or invalid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Filling the carried store from the environment.
    #[default]
    Acquire,
    /// Emptying the carried store into the most urgent sink.
    Deliver,
}

impl Mode {
    /// Short label for telemetry columns and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Acquire => "acquire",
            Mode::Deliver => "deliver",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-agent controller state surviving across ticks.
///
/// This is the *entire* persistent footprint of the controller: one mode
/// flag.  New agents start in [`Mode::Acquire`].
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMemory {
    pub mode: Mode,
}
