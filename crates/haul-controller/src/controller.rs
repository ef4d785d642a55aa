//! The `LogisticsController`: mode dispatcher plus the two behaviors.

use haul_core::AgentId;
use haul_world::AgentBody;

use crate::{
    ActionLayer, ActionOutcome, AgentMemory, ControllerError, ControllerPolicy, ControllerResult,
    Diagnostics, Environment, FailureReason, Mode, RetryReason, select_fill_target,
};

/// Diagnostic tag for all controller log lines.
pub const TAG: &str = "logistics";

/// The per-tick decision engine for one logistics agent.
///
/// Stateless between ticks apart from what the caller passes back in
/// [`AgentMemory`]; one controller instance can drive any number of agents.
///
/// # Type parameters
///
/// `D` is the diagnostic sink.  The world is supplied per call as anything
/// implementing [`Environment`] + [`ActionLayer`], so the two behaviors are
/// unit-testable against a scripted mock with no live simulation.
pub struct LogisticsController<D: Diagnostics> {
    policy:      ControllerPolicy,
    diagnostics: D,
}

impl<D: Diagnostics> LogisticsController<D> {
    pub fn new(policy: ControllerPolicy, diagnostics: D) -> Self {
        Self { policy, diagnostics }
    }

    pub fn policy(&self) -> &ControllerPolicy {
        &self.policy
    }

    /// The diagnostic sink (e.g. for draining a recording sink in tests).
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    // ── Mode dispatcher ───────────────────────────────────────────────────

    /// Run one tick for `agent`: invoke exactly one behavior for the current
    /// mode and store the mode it returns.
    ///
    /// Issues at most one movement/transfer request against `world` and
    /// returns; it never blocks or retries within a tick.
    ///
    /// # Errors
    ///
    /// Only [`ControllerError::UnknownAgent`] — every action failure is
    /// absorbed here, because no caller above this tick can react to one.
    pub fn tick<W: Environment + ActionLayer>(
        &mut self,
        agent:  AgentId,
        world:  &mut W,
        memory: &mut AgentMemory,
    ) -> ControllerResult<()> {
        memory.mode = match memory.mode {
            Mode::Acquire => self.acquire(agent, world)?,
            Mode::Deliver => self.deliver(agent, world)?,
        };
        Ok(())
    }

    // ── Acquisition behavior ──────────────────────────────────────────────

    /// Fill the carried store; returns the mode to persist for next tick.
    ///
    /// Ambient pickup runs first.  Only when no deposit exists does the
    /// designated reserve come into play: absent or empty, the agent either
    /// switches to delivery (if it already carries more than the fallback
    /// threshold) or idles until the world changes; otherwise it withdraws,
    /// walking over first if out of range.
    ///
    /// The full-store check at the end is independent of which path ran — a
    /// successful pickup this tick must flip the mode this tick.
    fn acquire<W: Environment + ActionLayer>(
        &mut self,
        agent: AgentId,
        world: &mut W,
    ) -> ControllerResult<Mode> {
        let kind = self.policy.resource;

        let pickup = world.pickup_nearby_deposit(agent);
        if pickup == ActionOutcome::Failed(FailureReason::NotFound) {
            match world.designated_reserve() {
                Some(reserve) if reserve.store.used(kind) > 0 => {
                    self.diagnostics.log(TAG, "no loose energy, gathering from reserve");
                    match world.withdraw(agent, reserve.id, kind) {
                        ActionOutcome::Done => {}
                        ActionOutcome::Retryable(RetryReason::OutOfRange) => {
                            world.request_move(agent, reserve.pos);
                        }
                        ActionOutcome::Failed(reason) => {
                            self.diagnostics
                                .log(TAG, &format!("reserve withdraw failed: {reason}"));
                        }
                    }
                }
                _ => {
                    self.diagnostics.say(agent, "No energy could be found");
                    // Degraded fallback: deliver what we already carry while
                    // waiting on the world to produce more.
                    if self.body(agent, world)?.store.used(kind) > self.policy.fallback_threshold {
                        return Ok(Mode::Deliver);
                    }
                    // Below the threshold the agent idles in place.
                    return Ok(Mode::Acquire);
                }
            }
        }

        // Re-read the store: a pickup or withdraw above may have filled it.
        if self.body(agent, world)?.store.is_full() {
            self.diagnostics.say(agent, "Energy full");
            return Ok(Mode::Deliver);
        }
        Ok(Mode::Acquire)
    }

    // ── Delivery behavior ─────────────────────────────────────────────────

    /// Deliver carried energy to the most urgent sink; returns the mode to
    /// persist for next tick.
    ///
    /// Target selection is pure (see [`select_fill_target`]); the priority
    /// total order is never violated — a class-1 sink with free capacity
    /// always wins over everything below it, however close the latter is.
    fn deliver<W: Environment + ActionLayer>(
        &mut self,
        agent: AgentId,
        world: &mut W,
    ) -> ControllerResult<Mode> {
        let kind = self.policy.resource;
        let body = self.body(agent, world)?;

        let structures = world.owned_structures();
        let Some(target) = select_fill_target(&structures, body.pos, &self.policy) else {
            self.diagnostics.log(TAG, "no structures to fill with energy");
            return Ok(Mode::Deliver);
        };

        match world.transfer(agent, target.id, kind) {
            ActionOutcome::Done => {}
            ActionOutcome::Retryable(RetryReason::OutOfRange) => {
                world.request_move(agent, target.pos);
            }
            ActionOutcome::Failed(FailureReason::InsufficientResource) => {
                // Nothing carried — repeating the transfer is doomed.  Switch
                // immediately; no further delivery logic this tick.
                self.diagnostics.say(agent, "Out of energy");
                return Ok(Mode::Acquire);
            }
            ActionOutcome::Failed(reason) => {
                self.diagnostics.say(agent, &format!("transfer failed: {reason}"));
            }
        }

        if self.body(agent, world)?.store.used(kind) == 0 {
            return Ok(Mode::Acquire);
        }
        Ok(Mode::Deliver)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn body<W: Environment>(&self, agent: AgentId, world: &W) -> ControllerResult<AgentBody> {
        world
            .agent_body(agent)
            .ok_or(ControllerError::UnknownAgent(agent))
    }
}
