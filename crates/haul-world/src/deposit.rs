//! Loose resource deposits.

use haul_core::{GridPos, ResourceKind};

/// A pile of loose resource lying on the ground, free for any agent to pick
/// up.  Deposits have no capacity — only a remaining amount — and disappear
/// from the world when drained to zero.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deposit {
    pub pos:    GridPos,
    pub kind:   ResourceKind,
    pub amount: u32,
}

impl Deposit {
    pub fn new(pos: GridPos, kind: ResourceKind, amount: u32) -> Self {
        Self { pos, kind, amount }
    }
}
