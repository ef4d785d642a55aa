//! Structure kinds, the `Structure` record, and the `HasStore` capability.

use haul_core::{GridPos, ResourceKind, Store, StructureId};

// ── StructureKind ─────────────────────────────────────────────────────────────

/// The kind of a world structure.
///
/// Non-exhaustive: new kinds can appear without breaking downstream matches.
/// Which kinds count as energy sinks — and how urgent each is — is *policy*,
/// not a property of the kind itself (see `ControllerPolicy` in
/// haul-controller).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum StructureKind {
    /// The primary base: produces new agents, must never run dry.
    Base,
    /// Energy extension feeding the base's production.
    Extension,
    /// Defense tower; combat readiness scales with stored energy.
    Tower,
    /// Bulk storage; also usable as a designated withdrawal reserve.
    Storage,
    /// Roadway — owned but never a fill target.
    Road,
}

impl StructureKind {
    /// Human-readable label, useful for CSV column values and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            StructureKind::Base      => "base",
            StructureKind::Extension => "extension",
            StructureKind::Tower     => "tower",
            StructureKind::Storage   => "storage",
            StructureKind::Road      => "road",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].  Returns `None` for unknown labels.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "base"      => Some(StructureKind::Base),
            "extension" => Some(StructureKind::Extension),
            "tower"     => Some(StructureKind::Tower),
            "storage"   => Some(StructureKind::Storage),
            "road"      => Some(StructureKind::Road),
            _           => None,
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HasStore ──────────────────────────────────────────────────────────────────

/// Capability trait for anything with a position and a resource store.
///
/// Heterogeneous structure kinds are treated uniformly through this trait:
/// target selection only ever asks "where are you?" and "how much room do you
/// have?", never what concrete kind it is talking to.
pub trait HasStore {
    fn kind(&self) -> StructureKind;
    fn position(&self) -> GridPos;
    fn free_capacity(&self, kind: ResourceKind) -> u32;
    fn used_capacity(&self, kind: ResourceKind) -> u32;
}

// ── Structure ─────────────────────────────────────────────────────────────────

/// A faction-owned structure: kind, position, and resource store.
///
/// Environment-owned; controllers receive clones from fresh per-tick queries
/// and never hold one across ticks (capacities change under them).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Structure {
    pub id:    StructureId,
    pub kind:  StructureKind,
    pub pos:   GridPos,
    pub store: Store,
}

impl Structure {
    pub fn new(id: StructureId, kind: StructureKind, pos: GridPos, store: Store) -> Self {
        Self { id, kind, pos, store }
    }
}

impl HasStore for Structure {
    #[inline]
    fn kind(&self) -> StructureKind {
        self.kind
    }

    #[inline]
    fn position(&self) -> GridPos {
        self.pos
    }

    #[inline]
    fn free_capacity(&self, _kind: ResourceKind) -> u32 {
        // Capacity is shared across kinds; free room does not depend on which
        // kind is being deposited.
        self.store.free_capacity()
    }

    #[inline]
    fn used_capacity(&self, kind: ResourceKind) -> u32 {
        self.store.used(kind)
    }
}
