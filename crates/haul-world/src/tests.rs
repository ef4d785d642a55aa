//! Unit tests for haul-world.

use haul_core::{AgentId, GridPos, ResourceKind, Store, StructureId};

use crate::{AgentBody, Deposit, HasStore, Structure, StructureKind, World, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn structure(id: u32, kind: StructureKind, x: i32, y: i32, cap: u32, stored: u32) -> Structure {
    Structure::new(
        StructureId(id),
        kind,
        GridPos::new(x, y),
        Store::stocked(cap, ResourceKind::Energy, stored),
    )
}

// ── StructureKind ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn as_str_parse_inverse() {
        for kind in [
            StructureKind::Base,
            StructureKind::Extension,
            StructureKind::Tower,
            StructureKind::Storage,
            StructureKind::Road,
        ] {
            assert_eq!(StructureKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(StructureKind::parse("factory"), None);
        assert_eq!(StructureKind::parse(""), None);
    }
}

// ── HasStore ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod has_store_tests {
    use super::*;

    #[test]
    fn structure_exposes_store() {
        let s = structure(1, StructureKind::Tower, 3, 4, 1000, 250);
        assert_eq!(s.kind(), StructureKind::Tower);
        assert_eq!(s.position(), GridPos::new(3, 4));
        assert_eq!(s.used_capacity(ResourceKind::Energy), 250);
        assert_eq!(s.free_capacity(ResourceKind::Energy), 750);
    }

    #[test]
    fn usable_as_trait_object() {
        let s = structure(2, StructureKind::Base, 0, 0, 300, 300);
        let obj: &dyn HasStore = &s;
        assert_eq!(obj.free_capacity(ResourceKind::Energy), 0);
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_tests {
    use super::*;

    #[test]
    fn structure_lookup_by_id() {
        let mut world = World::new();
        world.add_structure(structure(5, StructureKind::Base, 1, 1, 300, 0)).unwrap();
        world.add_structure(structure(9, StructureKind::Tower, 2, 2, 1000, 0)).unwrap();

        assert_eq!(world.structures().len(), 2);
        assert_eq!(world.structure(StructureId(9)).unwrap().kind, StructureKind::Tower);
        assert!(world.structure(StructureId(99)).is_none());
    }

    #[test]
    fn duplicate_structure_rejected() {
        let mut world = World::new();
        world.add_structure(structure(1, StructureKind::Base, 0, 0, 300, 0)).unwrap();
        let err = world
            .add_structure(structure(1, StructureKind::Tower, 5, 5, 100, 0))
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateStructure(StructureId(1))));
    }

    #[test]
    fn duplicate_agent_rejected() {
        let mut world = World::new();
        let body = AgentBody::new(AgentId(0), GridPos::new(0, 0), Store::with_capacity(50));
        world.add_agent(body.clone()).unwrap();
        assert!(matches!(
            world.add_agent(body),
            Err(WorldError::DuplicateAgent(AgentId(0)))
        ));
    }

    #[test]
    fn reserve_must_exist() {
        let mut world = World::new();
        assert!(matches!(
            world.designate_reserve(StructureId(3)),
            Err(WorldError::UnknownStructure(StructureId(3)))
        ));

        world.add_structure(structure(3, StructureKind::Storage, 4, 4, 5000, 500)).unwrap();
        world.designate_reserve(StructureId(3)).unwrap();
        assert_eq!(world.reserve().unwrap().id, StructureId(3));
    }

    #[test]
    fn no_reserve_by_default() {
        let world = World::new();
        assert!(world.reserve().is_none());
    }

    #[test]
    fn nearest_deposit_by_manhattan() {
        let mut world = World::new();
        world.add_deposit(Deposit::new(GridPos::new(10, 10), ResourceKind::Energy, 100));
        world.add_deposit(Deposit::new(GridPos::new(2, 1), ResourceKind::Energy, 50));
        world.add_deposit(Deposit::new(GridPos::new(-1, 0), ResourceKind::Energy, 20));

        let (idx, dep) = world.nearest_deposit(GridPos::new(0, 0)).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(dep.amount, 20);
    }

    #[test]
    fn nearest_deposit_tie_keeps_first() {
        let mut world = World::new();
        world.add_deposit(Deposit::new(GridPos::new(1, 0), ResourceKind::Energy, 10));
        world.add_deposit(Deposit::new(GridPos::new(0, 1), ResourceKind::Energy, 20));

        let (idx, _) = world.nearest_deposit(GridPos::new(0, 0)).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn nearest_deposit_empty_world() {
        let world = World::new();
        assert!(world.nearest_deposit(GridPos::new(0, 0)).is_none());
    }

    #[test]
    fn remove_deposit_shrinks_list() {
        let mut world = World::new();
        world.add_deposit(Deposit::new(GridPos::new(0, 0), ResourceKind::Energy, 10));
        world.remove_deposit(0);
        assert!(world.deposits().is_empty());
        // Out-of-bounds removal is a no-op.
        world.remove_deposit(5);
    }
}
