//! Seeded stochastic deposit regeneration.
//!
//! The world produces loose energy over time: each tick, with probability
//! `probability`, one pile of `amount` units appears at one of the
//! configured spawn points.  Driven by a seed-only [`SimRng`], so a given
//! seed always produces the same sequence of spawns.

use haul_core::{GridPos, ResourceKind, SimRng};
use haul_world::{Deposit, World};

/// Regeneration parameters.
#[derive(Clone, Debug)]
pub struct RegenConfig {
    /// Per-tick probability of spawning one deposit.  Must be in `[0, 1]`.
    pub probability: f64,
    /// Energy units per spawned deposit.
    pub amount: u32,
    /// Candidate spawn cells; one is chosen uniformly per spawn.
    pub spawn_points: Vec<GridPos>,
}

/// The spawner itself: config plus its private RNG stream.
pub struct DepositRegen {
    config: RegenConfig,
    rng:    SimRng,
}

impl DepositRegen {
    pub fn new(config: RegenConfig, seed: u64) -> Self {
        Self { config, rng: SimRng::new(seed) }
    }

    /// Maybe spawn one deposit this tick.
    pub fn tick(&mut self, world: &mut World) {
        if self.config.spawn_points.is_empty() || self.config.amount == 0 {
            return;
        }
        if !self.rng.gen_bool(self.config.probability) {
            return;
        }
        if let Some(&pos) = self.rng.choose(&self.config.spawn_points) {
            world.add_deposit(Deposit::new(pos, ResourceKind::Energy, self.config.amount));
        }
    }
}
