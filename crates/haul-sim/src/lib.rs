//! `haul-sim` — the tick harness for the `rust_haul` logistics framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`world`]     | `SimWorld` — implements the controller's collaborator traits |
//! | [`movement`]  | `MovementEngine` — multi-tick movement resolution         |
//! | [`regen`]     | `DepositRegen` — seeded stochastic deposit spawning       |
//! | [`scenario`]  | CSV scenario loader                                       |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                       |
//! | [`telemetry`] | `CsvTelemetry` — per-agent-tick CSV output                |
//! | [`sim`]       | `Sim`, `SimBuilder`, `SimConfig` — the tick loop          |
//! | [`error`]     | `SimError`, `SimResult`                                   |
//!
//! # Tick phases
//!
//! Each tick runs four sequential phases:
//!
//! 1. **Decide**: the controller runs once per agent, in ascending `AgentId`
//!    order.  Action requests resolve synchronously against current world
//!    state; when two agents contend for the same capacity, the earlier id
//!    wins and the later one observes the updated state (last-request-wins
//!    races, resolved by request order).
//! 2. **Move**: every agent with a pending destination advances one cell.
//! 3. **Regenerate**: the optional deposit spawner may drop a new pile.
//! 4. **Observe**: observer hooks fire for telemetry/progress.
//!
//! The loop is single-threaded and synchronous; a controller invocation
//! never suspends, and nothing in the harness retries within a tick.

pub mod error;
pub mod movement;
pub mod observer;
pub mod regen;
pub mod scenario;
pub mod sim;
pub mod telemetry;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use movement::MovementEngine;
pub use observer::{NoopObserver, SimObserver};
pub use regen::{DepositRegen, RegenConfig};
pub use scenario::{load_scenario_csv, load_scenario_reader};
pub use sim::{Sim, SimBuilder, SimConfig};
pub use telemetry::CsvTelemetry;
pub use world::{ACTION_RANGE, SimWorld};
