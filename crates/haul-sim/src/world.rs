//! `SimWorld` — the harness-side implementation of the controller's
//! collaborator traits.
//!
//! All transfer primitives resolve synchronously against current world
//! state: range is checked first, then source/destination quantities, and a
//! successful action moves `min(space, available)` units immediately.  The
//! multi-tick part — getting in range — is owned by the
//! [`MovementEngine`], never by the primitives' callers.

use haul_controller::{ActionLayer, ActionOutcome, Environment, FailureReason, RetryReason};
use haul_core::{AgentId, GridPos, ResourceKind, StructureId};
use haul_world::{AgentBody, Structure, World};

use crate::MovementEngine;

/// Interaction range for withdraw/transfer/pickup, in Chebyshev distance
/// (diagonal neighbors count as adjacent).
pub const ACTION_RANGE: u32 = 1;

/// A [`World`] plus the movement engine, wired up as the environment the
/// controller talks to.
pub struct SimWorld {
    world:    World,
    movement: MovementEngine,
}

impl SimWorld {
    pub fn new(world: World) -> Self {
        Self { world, movement: MovementEngine::new() }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn movement(&self) -> &MovementEngine {
        &self.movement
    }

    /// Run the move phase: advance every moving agent one cell.
    pub fn advance_movement(&mut self) -> Vec<AgentId> {
        self.movement.advance(&mut self.world)
    }
}

// ── Environment ───────────────────────────────────────────────────────────────

impl Environment for SimWorld {
    fn agent_body(&self, agent: AgentId) -> Option<AgentBody> {
        self.world.agent(agent).cloned()
    }

    fn owned_structures(&self) -> Vec<Structure> {
        self.world.structures().to_vec()
    }

    fn designated_reserve(&self) -> Option<Structure> {
        self.world.reserve().cloned()
    }
}

// ── ActionLayer ───────────────────────────────────────────────────────────────

impl ActionLayer for SimWorld {
    /// Ambient pickup, approach movement included: the nearest deposit is
    /// the implicit target, and an out-of-range agent starts walking to it
    /// as part of this call.  `Failed(NotFound)` only when no deposit exists
    /// anywhere.
    fn pickup_nearby_deposit(&mut self, agent: AgentId) -> ActionOutcome {
        let Some(body) = self.world.agent(agent) else {
            return ActionOutcome::Failed(FailureReason::Other("unknown agent"));
        };
        let pos = body.pos;
        let free = body.store.free_capacity();

        let Some((index, deposit)) = self.world.nearest_deposit(pos) else {
            return ActionOutcome::Failed(FailureReason::NotFound);
        };
        let deposit = *deposit;

        if pos.chebyshev(deposit.pos) > ACTION_RANGE {
            self.movement.request(agent, deposit.pos);
            return ActionOutcome::Retryable(RetryReason::OutOfRange);
        }
        if free == 0 {
            return ActionOutcome::Failed(FailureReason::StoreFull);
        }

        let amount = free.min(deposit.amount);
        if let Some(body) = self.world.agent_mut(agent) {
            body.store.fill(deposit.kind, amount);
        }
        if deposit.amount > amount {
            if let Some(dep) = self.world.deposit_mut(index) {
                dep.amount -= amount;
            }
        } else {
            self.world.remove_deposit(index);
        }
        ActionOutcome::Done
    }

    fn withdraw(&mut self, agent: AgentId, source: StructureId, kind: ResourceKind) -> ActionOutcome {
        let Some(body) = self.world.agent(agent) else {
            return ActionOutcome::Failed(FailureReason::Other("unknown agent"));
        };
        let pos = body.pos;
        let free = body.store.free_capacity();

        let Some(src) = self.world.structure(source) else {
            return ActionOutcome::Failed(FailureReason::NotFound);
        };
        if pos.chebyshev(src.pos) > ACTION_RANGE {
            return ActionOutcome::Retryable(RetryReason::OutOfRange);
        }
        let available = src.store.used(kind);
        if available == 0 {
            return ActionOutcome::Failed(FailureReason::InsufficientResource);
        }
        if free == 0 {
            return ActionOutcome::Failed(FailureReason::StoreFull);
        }

        let amount = free.min(available);
        if let Some(src) = self.world.structure_mut(source) {
            src.store.drain(kind, amount);
        }
        if let Some(body) = self.world.agent_mut(agent) {
            body.store.fill(kind, amount);
        }
        ActionOutcome::Done
    }

    fn transfer(&mut self, agent: AgentId, target: StructureId, kind: ResourceKind) -> ActionOutcome {
        let Some(body) = self.world.agent(agent) else {
            return ActionOutcome::Failed(FailureReason::Other("unknown agent"));
        };
        let pos = body.pos;
        let carried = body.store.used(kind);

        let Some(dst) = self.world.structure(target) else {
            return ActionOutcome::Failed(FailureReason::NotFound);
        };
        if pos.chebyshev(dst.pos) > ACTION_RANGE {
            return ActionOutcome::Retryable(RetryReason::OutOfRange);
        }
        if carried == 0 {
            return ActionOutcome::Failed(FailureReason::InsufficientResource);
        }
        let space = dst.store.free_capacity();
        if space == 0 {
            return ActionOutcome::Failed(FailureReason::StoreFull);
        }

        let amount = carried.min(space);
        if let Some(body) = self.world.agent_mut(agent) {
            body.store.drain(kind, amount);
        }
        if let Some(dst) = self.world.structure_mut(target) {
            dst.store.fill(kind, amount);
        }
        ActionOutcome::Done
    }

    fn request_move(&mut self, agent: AgentId, dest: GridPos) -> ActionOutcome {
        self.movement.request(agent, dest);
        ActionOutcome::Done
    }
}
