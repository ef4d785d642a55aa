//! `haul-core` — foundational types for the `rust_haul` logistics framework.
//!
//! This crate is a dependency of every other `haul-*` crate.  It intentionally
//! has no `haul-*` dependencies and minimal external ones (only `rand` and
//! `rustc-hash`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`ids`]      | `AgentId`, `StructureId`                          |
//! | [`grid`]     | `GridPos`, Manhattan/Chebyshev distance, stepping |
//! | [`time`]     | `Tick`                                            |
//! | [`resource`] | `ResourceKind`, `Store`                           |
//! | [`rng`]      | `SimRng` (seeded, for harness-side processes)     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod grid;
pub mod ids;
pub mod resource;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use grid::GridPos;
pub use ids::{AgentId, StructureId};
pub use resource::{ResourceKind, Store};
pub use rng::SimRng;
pub use time::Tick;
