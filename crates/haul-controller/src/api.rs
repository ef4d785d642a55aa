//! Collaborator traits the controller consumes.
//!
//! These are the controller's entire view of the outside world.  Queries
//! return owned snapshots so state is re-read fresh every tick — capacities
//! and positions may change between ticks (other agents, combat, decay) and
//! must never be cached across one.
//!
//! The split mirrors the ownership rule: the controller reads through
//! [`Environment`] and *requests* mutations through [`ActionLayer`]; it
//! never mutates world state directly.

use haul_core::{AgentId, GridPos, ResourceKind, StructureId};
use haul_world::{AgentBody, Structure};

use crate::ActionOutcome;

/// Read-only environment queries, evaluated fresh each call.
pub trait Environment {
    /// The agent's current physical state (position, carried store).
    fn agent_body(&self, agent: AgentId) -> Option<AgentBody>;

    /// Every structure owned by the agent's faction.
    ///
    /// Iteration order must be stable across calls within one tick: the
    /// tie-break rules resolve equal candidates to the first one seen.
    fn owned_structures(&self) -> Vec<Structure>;

    /// The designated fallback withdrawal reserve, if any.
    fn designated_reserve(&self) -> Option<Structure>;
}

/// Action request primitives.
///
/// Each call issues one request and reports synchronously whether it took
/// effect; multi-tick consequences (travel) are owned by the implementor.
pub trait ActionLayer {
    /// Attempt ambient pickup of loose deposits near the agent.
    ///
    /// Fully delegated: the implementor owns deposit discovery and any
    /// approach movement.  Returns `Failed(NotFound)` only when no deposit
    /// exists to go for.
    fn pickup_nearby_deposit(&mut self, agent: AgentId) -> ActionOutcome;

    /// Withdraw `kind` from `source` into the agent's carried store.
    fn withdraw(&mut self, agent: AgentId, source: StructureId, kind: ResourceKind)
    -> ActionOutcome;

    /// Transfer `kind` from the agent's carried store into `target`.
    fn transfer(&mut self, agent: AgentId, target: StructureId, kind: ResourceKind)
    -> ActionOutcome;

    /// Request movement toward `dest`.  Fire-and-forget: completion takes as
    /// many ticks as it takes, owned entirely by the implementor.
    fn request_move(&mut self, agent: AgentId, dest: GridPos) -> ActionOutcome;
}
