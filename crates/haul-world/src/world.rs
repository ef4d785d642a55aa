//! The `World` — the queryable container of all environment entities.

use rustc_hash::FxHashMap;

use haul_core::{AgentId, GridPos, StructureId};

use crate::{AgentBody, Deposit, Structure, WorldError, WorldResult};

/// All environment state: structures, agent bodies, loose deposits, and the
/// optional designated reserve.
///
/// Lookup by id is O(1) through side indexes; `structures()` iterates in
/// insertion order, which downstream tie-breaks rely on for determinism.
///
/// The controller never holds a `&World` across ticks — it re-queries
/// capacities fresh every invocation, so there is nothing to invalidate.
#[derive(Default)]
pub struct World {
    structures:      Vec<Structure>,
    structure_index: FxHashMap<StructureId, usize>,

    agents:      Vec<AgentBody>,
    agent_index: FxHashMap<AgentId, usize>,

    deposits: Vec<Deposit>,

    /// The designated fallback withdrawal reserve, if one has been assigned.
    reserve: Option<StructureId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Structures ────────────────────────────────────────────────────────

    /// Insert a structure.  Ids must be unique.
    pub fn add_structure(&mut self, structure: Structure) -> WorldResult<()> {
        if self.structure_index.contains_key(&structure.id) {
            return Err(WorldError::DuplicateStructure(structure.id));
        }
        self.structure_index.insert(structure.id, self.structures.len());
        self.structures.push(structure);
        Ok(())
    }

    /// All owned structures, in insertion order.
    #[inline]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn structure(&self, id: StructureId) -> Option<&Structure> {
        self.structure_index.get(&id).map(|&i| &self.structures[i])
    }

    pub fn structure_mut(&mut self, id: StructureId) -> Option<&mut Structure> {
        self.structure_index.get(&id).map(|&i| &mut self.structures[i])
    }

    /// Designate `id` as the fallback withdrawal reserve.
    pub fn designate_reserve(&mut self, id: StructureId) -> WorldResult<()> {
        if !self.structure_index.contains_key(&id) {
            return Err(WorldError::UnknownStructure(id));
        }
        self.reserve = Some(id);
        Ok(())
    }

    /// The designated reserve structure, if one is assigned and still exists.
    pub fn reserve(&self) -> Option<&Structure> {
        self.reserve.and_then(|id| self.structure(id))
    }

    // ── Agents ────────────────────────────────────────────────────────────

    /// Insert an agent body.  Ids must be unique.
    pub fn add_agent(&mut self, agent: AgentBody) -> WorldResult<()> {
        if self.agent_index.contains_key(&agent.id) {
            return Err(WorldError::DuplicateAgent(agent.id));
        }
        self.agent_index.insert(agent.id, self.agents.len());
        self.agents.push(agent);
        Ok(())
    }

    /// All agent bodies, in insertion order.
    #[inline]
    pub fn agents(&self) -> &[AgentBody] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentBody> {
        self.agent_index.get(&id).map(|&i| &self.agents[i])
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut AgentBody> {
        self.agent_index.get(&id).map(|&i| &mut self.agents[i])
    }

    // ── Deposits ──────────────────────────────────────────────────────────

    pub fn add_deposit(&mut self, deposit: Deposit) {
        self.deposits.push(deposit);
    }

    #[inline]
    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    /// Index and reference of the deposit nearest to `pos` by Manhattan
    /// distance, or `None` if the world has no deposits.  Ties keep the
    /// first deposit in insertion order.
    pub fn nearest_deposit(&self, pos: GridPos) -> Option<(usize, &Deposit)> {
        let mut best: Option<(usize, &Deposit)> = None;
        for (i, dep) in self.deposits.iter().enumerate() {
            match best {
                Some((_, b)) if pos.manhattan(dep.pos) >= pos.manhattan(b.pos) => {}
                _ => best = Some((i, dep)),
            }
        }
        best
    }

    /// Mutable access to a deposit by index (used by the action layer when
    /// an agent scoops part of a pile).
    pub fn deposit_mut(&mut self, index: usize) -> Option<&mut Deposit> {
        self.deposits.get_mut(index)
    }

    /// Remove a fully-drained deposit.
    pub fn remove_deposit(&mut self, index: usize) {
        if index < self.deposits.len() {
            self.deposits.remove(index);
        }
    }
}
