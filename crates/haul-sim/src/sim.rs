//! The `Sim` struct, its builder, and the tick loop.

use rustc_hash::FxHashMap;

use haul_controller::{AgentMemory, ControllerPolicy, Diagnostics, LogisticsController};
use haul_core::{AgentId, Tick};
use haul_world::World;

use crate::{DepositRegen, RegenConfig, SimError, SimObserver, SimResult, SimWorld};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// One [`LogisticsController`] drives every agent; per-agent state is just
/// the [`AgentMemory`] map (mode flags), exactly what the controller
/// persists between ticks.  Create via [`SimBuilder`].
pub struct Sim<D: Diagnostics> {
    /// Global configuration.
    pub config: SimConfig,

    /// Current tick, advanced at the end of each iteration.
    pub tick: Tick,

    /// The environment plus movement engine the controller talks to.
    pub world: SimWorld,

    /// The decision engine, shared by all agents.
    pub controller: LogisticsController<D>,

    /// Per-agent persisted controller state.
    pub memories: FxHashMap<AgentId, AgentMemory>,

    regen: Option<DepositRegen>,
}

impl<D: Diagnostics> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            let now = self.tick;
            self.process_tick(now, observer)?;
            self.tick = now.offset(1);
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            self.process_tick(now, observer)?;
            self.tick = now.offset(1);
        }
        Ok(())
    }

    /// The mode `agent` will carry into its next tick.
    pub fn memory(&self, agent: AgentId) -> AgentMemory {
        self.memories.get(&agent).copied().unwrap_or_default()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);

        // ── Phase 1: decisions, ascending agent id ────────────────────────
        //
        // Sequential and ordered: when two agents contend for the same
        // capacity this tick, the earlier id acts first and the later one
        // sees the already-updated stores.
        let mut ids: Vec<AgentId> = self.world.world().agents().iter().map(|a| a.id).collect();
        ids.sort();

        for agent in ids {
            let memory = self.memories.entry(agent).or_default();
            self.controller.tick(agent, &mut self.world, memory)?;
            let mode = memory.mode;
            if let Some(body) = self.world.world().agent(agent) {
                observer.on_agent_ticked(now, body, mode);
            }
        }

        // ── Phase 2: movement ─────────────────────────────────────────────
        self.world.advance_movement();

        // ── Phase 3: deposit regeneration ─────────────────────────────────
        if let Some(regen) = &mut self.regen {
            regen.tick(self.world.world_mut());
        }

        observer.on_tick_end(now);
        Ok(())
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks and seed
/// - [`World`] — from a scenario file or built in code
/// - `D: Diagnostics` — where controller diagnostics go
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                      |
/// |--------------|------------------------------|
/// | `.policy(p)` | `ControllerPolicy::default()`|
/// | `.regen(r)`  | no deposit regeneration      |
pub struct SimBuilder<D: Diagnostics> {
    config:      SimConfig,
    world:       World,
    diagnostics: D,
    policy:      Option<ControllerPolicy>,
    regen:       Option<RegenConfig>,
}

impl<D: Diagnostics> SimBuilder<D> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, world: World, diagnostics: D) -> Self {
        Self {
            config,
            world,
            diagnostics,
            policy: None,
            regen:  None,
        }
    }

    /// Override the controller policy.
    pub fn policy(mut self, policy: ControllerPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Enable deposit regeneration (seeded from `config.seed`).
    pub fn regen(mut self, regen: RegenConfig) -> Self {
        self.regen = Some(regen);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        if let Some(regen) = &self.regen {
            if !(0.0..=1.0).contains(&regen.probability) {
                return Err(SimError::Config(format!(
                    "regen probability {} outside [0, 1]",
                    regen.probability
                )));
            }
        }

        let policy = self.policy.unwrap_or_default();
        let seed = self.config.seed;
        Ok(Sim {
            config:     self.config,
            tick:       Tick::ZERO,
            world:      SimWorld::new(self.world),
            controller: LogisticsController::new(policy, self.diagnostics),
            memories:   FxHashMap::default(),
            regen:      self.regen.map(|r| DepositRegen::new(r, seed)),
        })
    }
}
