use haul_core::{AgentId, StructureId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("structure {0} already exists")]
    DuplicateStructure(StructureId),

    #[error("agent {0} already exists")]
    DuplicateAgent(AgentId),

    #[error("structure {0} not found")]
    UnknownStructure(StructureId),

    #[error("agent {0} not found")]
    UnknownAgent(AgentId),
}

pub type WorldResult<T> = Result<T, WorldError>;
