//! Fill-target selection: priority classes and kind-specific tie-breaks.
//!
//! Selection is a pure function of (structure list, agent position, policy).
//! Given the same inputs it always resolves the same target, which keeps the
//! delivery behavior idempotent within a tick and trivially testable.

use haul_core::GridPos;
use haul_world::{HasStore, Structure, StructureKind};

use crate::ControllerPolicy;

/// Pick the structure the agent should fill next, or `None` if no owned
/// structure currently needs energy.
///
/// 1. Keep structures whose kind is fillable under `policy` and whose store
///    has positive free capacity.
/// 2. Keep only the numerically lowest priority class present.
/// 3. Tie-break within the class:
///    - a class consisting of defense towers resolves to the tower with the
///      greatest free capacity — urgency scales with deficit, not distance,
///      because towers must stay combat-ready;
///    - any other class resolves to the nearest structure by Manhattan
///      distance, since same-priority sinks are interchangeable.
///
/// Equal candidates resolve to the first one in `structures` order, so a
/// stable input order gives a deterministic single choice.
pub fn select_fill_target<'a>(
    structures: &'a [Structure],
    agent_pos:  GridPos,
    policy:     &ControllerPolicy,
) -> Option<&'a Structure> {
    let candidates: Vec<&Structure> = structures
        .iter()
        .filter(|s| policy.is_fillable(s.kind) && s.free_capacity(policy.resource) > 0)
        .collect();

    let lowest_class = candidates
        .iter()
        .map(|s| policy.priority_of(s.kind))
        .min()?;

    let class: Vec<&Structure> = candidates
        .into_iter()
        .filter(|s| policy.priority_of(s.kind) == lowest_class)
        .collect();

    if class.iter().all(|s| s.kind == StructureKind::Tower) {
        most_depleted(&class, policy)
    } else {
        nearest(&class, agent_pos)
    }
}

/// Greatest free capacity wins; strict comparison keeps the first on ties.
fn most_depleted<'a>(class: &[&'a Structure], policy: &ControllerPolicy) -> Option<&'a Structure> {
    let mut best: Option<&Structure> = None;
    for &s in class {
        match best {
            Some(b) if s.free_capacity(policy.resource) <= b.free_capacity(policy.resource) => {}
            _ => best = Some(s),
        }
    }
    best
}

/// Smallest Manhattan distance wins; strict comparison keeps the first on ties.
fn nearest<'a>(class: &[&'a Structure], agent_pos: GridPos) -> Option<&'a Structure> {
    let mut best: Option<&Structure> = None;
    for &s in class {
        match best {
            Some(b) if agent_pos.manhattan(s.pos) >= agent_pos.manhattan(b.pos) => {}
            _ => best = Some(s),
        }
    }
    best
}
