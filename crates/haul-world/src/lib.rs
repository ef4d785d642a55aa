//! `haul-world` — world entities for the `rust_haul` logistics framework.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`structure`] | `StructureKind`, `Structure`, the `HasStore` trait     |
//! | [`agent`]     | `AgentBody` — an agent's physical state                |
//! | [`deposit`]   | `Deposit` — a loose resource pile on the ground        |
//! | [`world`]     | `World` — the queryable entity container               |
//! | [`error`]     | `WorldError`, `WorldResult`                            |
//!
//! # Design notes
//!
//! Everything here is *environment-owned* data: controllers read it through
//! fresh per-tick queries and never mutate it directly.  Mutation happens in
//! the action layer (haul-sim), which resolves transfer/movement requests
//! against this container.

pub mod agent;
pub mod deposit;
pub mod error;
pub mod structure;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::AgentBody;
pub use deposit::Deposit;
pub use error::{WorldError, WorldResult};
pub use structure::{HasStore, Structure, StructureKind};
pub use world::World;
