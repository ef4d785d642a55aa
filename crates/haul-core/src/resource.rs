//! Resource kinds and the capacity-bounded `Store` shared by agents and
//! structures.
//!
//! Every storing entity — an agent's carried load, a structure's reservoir —
//! is a `Store`: a single capacity shared across all resource kinds, with a
//! per-kind used amount.  Free capacity is therefore a *total* quantity
//! (capacity minus everything stored), matching how fill/withdraw limits
//! work in the simulation.

use rustc_hash::FxHashMap;

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// A kind of transportable resource.
///
/// Only energy exists today; the enum is non-exhaustive so additional kinds
/// (minerals, compounds) can be added without breaking downstream matches.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ResourceKind {
    /// The universal energy currency.
    #[default]
    Energy,
}

impl ResourceKind {
    /// Human-readable label, useful for CSV column values and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Energy => "energy",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// A capacity-bounded container of resources.
///
/// `fill` and `drain` clamp to what actually fits / is present and report the
/// amount moved, so callers can express "transfer as much as possible" without
/// pre-computing limits.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Store {
    capacity: u32,
    contents: FxHashMap<ResourceKind, u32>,
}

impl Store {
    /// An empty store with the given total capacity.
    pub fn with_capacity(capacity: u32) -> Self {
        Self { capacity, contents: FxHashMap::default() }
    }

    /// A store pre-filled with `amount` of `kind` (clamped to capacity).
    pub fn stocked(capacity: u32, kind: ResourceKind, amount: u32) -> Self {
        let mut store = Self::with_capacity(capacity);
        store.fill(kind, amount);
        store
    }

    /// Total capacity across all resource kinds.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Amount of `kind` currently stored.
    #[inline]
    pub fn used(&self, kind: ResourceKind) -> u32 {
        self.contents.get(&kind).copied().unwrap_or(0)
    }

    /// Total stored amount across all kinds.
    pub fn used_total(&self) -> u32 {
        self.contents.values().sum()
    }

    /// Remaining room: `capacity - used_total()`.
    #[inline]
    pub fn free_capacity(&self) -> u32 {
        self.capacity - self.used_total()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.free_capacity() == 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used_total() == 0
    }

    /// Add up to `amount` of `kind`, clamped to free capacity.
    ///
    /// Returns the amount actually accepted.
    pub fn fill(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        let accepted = amount.min(self.free_capacity());
        if accepted > 0 {
            *self.contents.entry(kind).or_insert(0) += accepted;
        }
        accepted
    }

    /// Remove up to `amount` of `kind`, clamped to what is present.
    ///
    /// Returns the amount actually removed.
    pub fn drain(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        let Some(present) = self.contents.get_mut(&kind) else {
            return 0;
        };
        let removed = amount.min(*present);
        *present -= removed;
        if *present == 0 {
            self.contents.remove(&kind);
        }
        removed
    }
}
