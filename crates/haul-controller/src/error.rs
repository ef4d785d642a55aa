use haul_core::AgentId;
use thiserror::Error;

/// Controller errors.
///
/// Deliberately tiny: every failure an action can report (not-found,
/// out-of-range, insufficient resource…) is absorbed inside the tick that
/// produced it.  The one thing that *is* an error is being asked to drive an
/// agent the environment has never heard of — a harness wiring bug, not a
/// world condition.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("agent {0} not present in the environment")]
    UnknownAgent(AgentId),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
