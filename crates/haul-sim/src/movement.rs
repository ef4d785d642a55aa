//! Multi-tick movement resolution.
//!
//! The controller's `request_move` is fire-and-forget: it records a
//! destination here and returns.  Travel happens in the harness's move
//! phase, one grid cell per agent per tick, until the agent is within
//! action range of the destination.  A new request for a moving agent
//! simply overwrites the old destination (last-request-wins).

use rustc_hash::FxHashMap;

use haul_core::{AgentId, GridPos};
use haul_world::World;

use crate::world::ACTION_RANGE;

/// Pending destinations and the per-tick stepping logic.
#[derive(Default)]
pub struct MovementEngine {
    pending: FxHashMap<AgentId, GridPos>,
}

impl MovementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) `agent`'s destination.
    pub fn request(&mut self, agent: AgentId, dest: GridPos) {
        self.pending.insert(agent, dest);
    }

    /// `true` if `agent` has a pending destination.
    #[inline]
    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.pending.contains_key(&agent)
    }

    pub fn destination(&self, agent: AgentId) -> Option<GridPos> {
        self.pending.get(&agent).copied()
    }

    /// Advance every moving agent one cell toward its destination.
    ///
    /// An agent arrives — and its pending entry is cleared — once it is
    /// within [`ACTION_RANGE`] of the destination, so agents stop adjacent
    /// to target structures rather than walking onto them.  Agents are
    /// stepped in ascending id order for determinism.
    ///
    /// Returns the agents that arrived this tick.
    pub fn advance(&mut self, world: &mut World) -> Vec<AgentId> {
        let mut moving: Vec<AgentId> = self.pending.keys().copied().collect();
        moving.sort();

        let mut arrived = Vec::new();
        for agent in moving {
            let Some(&dest) = self.pending.get(&agent) else { continue };
            let Some(body) = world.agent_mut(agent) else {
                // Agent died mid-journey; drop the stale request.
                self.pending.remove(&agent);
                continue;
            };

            if body.pos.chebyshev(dest) > ACTION_RANGE {
                body.pos = body.pos.step_toward(dest);
            }
            if body.pos.chebyshev(dest) <= ACTION_RANGE {
                self.pending.remove(&agent);
                arrived.push(agent);
            }
        }
        arrived
    }
}
