//! Injected routing and threshold configuration.
//!
//! All the constants the decision loop depends on — which structure kinds
//! accept energy, how urgent each kind is, when the degraded fallback kicks
//! in — live here rather than in the control flow, so policy can be tuned
//! and tested independently of it.

use rustc_hash::FxHashMap;

use haul_core::ResourceKind;
use haul_world::StructureKind;

/// Controller configuration.
///
/// [`ControllerPolicy::default`] reproduces the standard routing table:
///
/// | Kind              | Priority class |
/// |-------------------|----------------|
/// | Base, Extension   | 1 (most urgent)|
/// | Tower             | 2              |
/// | Storage           | 3              |
/// | anything else     | 4              |
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerPolicy {
    /// Structure kinds that count as energy sinks.
    pub fillable_kinds: Vec<StructureKind>,

    /// Priority class per kind; lower = more urgent.
    pub priorities: FxHashMap<StructureKind, u8>,

    /// Class assigned to fillable kinds absent from `priorities`.
    pub default_priority: u8,

    /// Degraded-fallback threshold: with no usable energy source anywhere,
    /// an agent already carrying *more than* this many units switches to
    /// delivery rather than idling.  A fixed policy constant, not derived
    /// from agent capacity.
    pub fallback_threshold: u32,

    /// The resource this controller moves.
    pub resource: ResourceKind,
}

impl Default for ControllerPolicy {
    fn default() -> Self {
        let fillable_kinds = vec![
            StructureKind::Base,
            StructureKind::Extension,
            StructureKind::Tower,
            StructureKind::Storage,
        ];
        let priorities = FxHashMap::from_iter([
            (StructureKind::Base,      1),
            (StructureKind::Extension, 1),
            (StructureKind::Tower,     2),
            (StructureKind::Storage,   3),
        ]);
        Self {
            fillable_kinds,
            priorities,
            default_priority:   4,
            fallback_threshold: 50,
            resource:           ResourceKind::Energy,
        }
    }
}

impl ControllerPolicy {
    /// Priority class for `kind`; lower = more urgent.
    #[inline]
    pub fn priority_of(&self, kind: StructureKind) -> u8 {
        self.priorities.get(&kind).copied().unwrap_or(self.default_priority)
    }

    /// `true` if `kind` counts as an energy sink.
    #[inline]
    pub fn is_fillable(&self, kind: StructureKind) -> bool {
        self.fillable_kinds.contains(&kind)
    }
}
