//! `haul-controller` — the logistics controller for the `rust_haul` framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`mode`]       | `Mode` (the two-state machine), `AgentMemory`              |
//! | [`outcome`]    | `ActionOutcome`, `RetryReason`, `FailureReason`            |
//! | [`policy`]     | `ControllerPolicy` — injected routing/threshold config     |
//! | [`api`]        | `Environment` + `ActionLayer` collaborator traits          |
//! | [`diag`]       | `Diagnostics` trait, `LogDiagnostics`, `NullDiagnostics`   |
//! | [`select`]     | pure fill-target selection (priority classes, tie-breaks)  |
//! | [`controller`] | `LogisticsController` — dispatcher + the two behaviors     |
//! | [`error`]      | `ControllerError`, `ControllerResult`                      |
//!
//! # Design notes
//!
//! The controller is a closed-loop, tick-driven state machine with exactly
//! two states:
//!
//! - **Acquire** — obtain energy: ambient pickup first, the designated
//!   reserve as fallback.  Transitions to Deliver when the carried store is
//!   full (or, degraded, when it holds more than a policy threshold and no
//!   source exists).
//! - **Deliver** — route carried energy to the most urgent sink, chosen by
//!   priority class with kind-specific tie-breaks.  Transitions back to
//!   Acquire when depleted.
//!
//! One invocation per agent per tick; each invocation issues at most one
//! movement/transfer request and returns.  Every failure an action can
//! report is absorbed within the tick that produced it — out-of-range
//! becomes a move request, insufficient-resource becomes a mode transition,
//! anything else becomes a diagnostic and a fresh attempt next tick.  The
//! only state carried between ticks is the [`Mode`] flag in [`AgentMemory`];
//! all capacities and positions are re-queried fresh, never cached.

pub mod api;
pub mod controller;
pub mod diag;
pub mod error;
pub mod mode;
pub mod outcome;
pub mod policy;
pub mod select;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use api::{ActionLayer, Environment};
pub use controller::{LogisticsController, TAG};
pub use diag::{Diagnostics, LogDiagnostics, NullDiagnostics};
pub use error::{ControllerError, ControllerResult};
pub use mode::{AgentMemory, Mode};
pub use outcome::{ActionOutcome, FailureReason, RetryReason};
pub use policy::ControllerPolicy;
pub use select::select_fill_target;
