//! Unit tests for haul-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, StructureId};

    #[test]
    fn index() {
        assert_eq!(AgentId(42).index(), 42);
        assert_eq!(StructureId(7).index(), 7);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(StructureId(100) > StructureId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(StructureId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::GridPos;

    #[test]
    fn manhattan() {
        let a = GridPos::new(2, 3);
        let b = GridPos::new(5, 1);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn manhattan_negative_coords() {
        let a = GridPos::new(-2, -3);
        let b = GridPos::new(1, 1);
        assert_eq!(a.manhattan(b), 7);
    }

    #[test]
    fn chebyshev_adjacency() {
        let center = GridPos::new(0, 0);
        assert_eq!(center.chebyshev(GridPos::new(1, 1)), 1); // diagonal is adjacent
        assert_eq!(center.chebyshev(GridPos::new(0, 2)), 2);
        assert_eq!(center.chebyshev(center), 0);
    }

    #[test]
    fn step_toward_prefers_larger_axis() {
        let from = GridPos::new(0, 0);
        assert_eq!(from.step_toward(GridPos::new(5, 1)), GridPos::new(1, 0));
        assert_eq!(from.step_toward(GridPos::new(1, 5)), GridPos::new(0, 1));
        // Equal deltas: x axis wins.
        assert_eq!(from.step_toward(GridPos::new(3, 3)), GridPos::new(1, 0));
    }

    #[test]
    fn step_toward_at_destination_is_noop() {
        let p = GridPos::new(4, 4);
        assert_eq!(p.step_toward(p), p);
    }

    #[test]
    fn stepping_converges() {
        let mut pos = GridPos::new(0, 0);
        let dest = GridPos::new(3, -2);
        for _ in 0..5 {
            pos = pos.step_toward(dest);
        }
        assert_eq!(pos, dest);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(99).to_string(), "T99");
    }
}

#[cfg(test)]
mod store {
    use crate::{ResourceKind, Store};

    #[test]
    fn empty_store() {
        let store = Store::with_capacity(100);
        assert_eq!(store.capacity(), 100);
        assert_eq!(store.used(ResourceKind::Energy), 0);
        assert_eq!(store.free_capacity(), 100);
        assert!(store.is_empty());
        assert!(!store.is_full());
    }

    #[test]
    fn fill_clamps_to_capacity() {
        let mut store = Store::with_capacity(50);
        assert_eq!(store.fill(ResourceKind::Energy, 30), 30);
        assert_eq!(store.fill(ResourceKind::Energy, 30), 20);
        assert!(store.is_full());
        assert_eq!(store.free_capacity(), 0);
    }

    #[test]
    fn drain_clamps_to_contents() {
        let mut store = Store::stocked(100, ResourceKind::Energy, 40);
        assert_eq!(store.drain(ResourceKind::Energy, 25), 25);
        assert_eq!(store.drain(ResourceKind::Energy, 25), 15);
        assert_eq!(store.drain(ResourceKind::Energy, 25), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn stocked_clamps_to_capacity() {
        let store = Store::stocked(50, ResourceKind::Energy, 200);
        assert_eq!(store.used(ResourceKind::Energy), 50);
        assert!(store.is_full());
    }

    #[test]
    fn zero_capacity_store() {
        let mut store = Store::with_capacity(0);
        assert_eq!(store.fill(ResourceKind::Energy, 10), 0);
        assert!(store.is_full());
        assert!(store.is_empty());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.gen_range(0..1000u32), b.gen_range(0..1000u32));
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: &[u32] = &[];
        assert!(rng.choose(empty).is_none());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(0.0));
        // Out-of-range probabilities are clamped, not panicking.
        assert!(rng.gen_bool(2.0));
    }
}
