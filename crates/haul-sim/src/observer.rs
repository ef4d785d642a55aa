//! Simulation observer trait for progress reporting and data collection.

use haul_controller::Mode;
use haul_core::Tick;
use haul_world::AgentBody;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each agent's controller invocation, with the agent's
    /// post-decision body and the mode it will carry into next tick.
    fn on_agent_ticked(&mut self, _tick: Tick, _body: &AgentBody, _mode: Mode) {}

    /// Called at the end of each tick, after movement and regeneration.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
