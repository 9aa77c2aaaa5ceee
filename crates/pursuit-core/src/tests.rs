//! Unit tests for pursuit-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TileId};

    #[test]
    fn index_roundtrip() {
        let id = TileId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TileId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TileId(0) < TileId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(TileId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TileId::default(), TileId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec2::new(10.0, 0.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalized_zero_is_zero() {
        // An agent standing exactly on its target must not produce NaN velocity.
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick, TickClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = TickClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-6);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            tick_duration_secs: 1.0,
            total_ticks: 600,
            seed: 42,
        };
        assert_eq!(cfg.end_tick(), Tick(600));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn sim_rng_children_diverge() {
        let mut root = SimRng::new(7);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }
}
