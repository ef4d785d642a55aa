//! The physical state of a logistics agent.

use haul_core::{AgentId, GridPos, Store};

/// An agent's body: where it stands and what it carries.
///
/// Owned by the surrounding agent-management system (haul-sim); controllers
/// read snapshots of it and issue action requests against it.  The only
/// controller-owned state — the two-value `mode` flag — lives in
/// `AgentMemory` (haul-controller), not here.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentBody {
    pub id:    AgentId,
    pub pos:   GridPos,
    pub store: Store,
}

impl AgentBody {
    pub fn new(id: AgentId, pos: GridPos, store: Store) -> Self {
        Self { id, pos, store }
    }
}
