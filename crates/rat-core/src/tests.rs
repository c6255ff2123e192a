//! Unit tests for rat-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ItemId};

    #[test]
    fn next_is_monotonic() {
        assert_eq!(AgentId(0).next(), AgentId(1));
        assert!(AgentId(0) < AgentId(0).next());
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ItemId(3).to_string(), "ItemId(3)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Point, Rect};

    #[test]
    fn strict_excludes_edges() {
        let r = Rect::new(40, 40, 20, 20);
        assert!(!r.contains_point(Point::new(40, 50), false));
        assert!(!r.contains_point(Point::new(60, 60), false));
        assert!(r.contains_point(Point::new(41, 59), false));
    }

    #[test]
    fn inclusive_includes_edges() {
        let r = Rect::new(40, 40, 20, 20);
        assert!(r.contains_point(Point::new(40, 50), true));
        assert!(r.contains_point(Point::new(60, 60), true));
        assert!(!r.contains_point(Point::new(61, 60), true));
    }

    #[test]
    fn corners_of_box() {
        let c = Rect::new(1, 2, 10, 20).corners();
        assert_eq!(c.nw, Point::new(1, 2));
        assert_eq!(c.ne, Point::new(11, 2));
        assert_eq!(c.sw, Point::new(1, 22));
        assert_eq!(c.se, Point::new(11, 22));
    }

    #[test]
    fn box_overlaps_by_any_corner() {
        let wall = Rect::new(40, 40, 20, 20);
        // Only the south-east corner pokes into the wall.
        let rat = Rect::square(35, 35, 10);
        assert!(wall.box_overlaps(&rat.corners(), false));
        // Flush against the west face: corners sit on the edge.
        let flush = Rect::square(30, 40, 10);
        assert!(!wall.box_overlaps(&flush.corners(), false));
        assert!(wall.box_overlaps(&flush.corners(), true));
    }

    #[test]
    fn intersects_catches_axis_aligned_overlap() {
        let a = Rect::square(0, 0, 16);
        let b = Rect::square(0, 8, 16);
        // Every corner of b lies on an edge of a, so the corner test misses it.
        assert!(!a.box_overlaps(&b.corners(), false));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&a));
        assert!(!a.intersects(&Rect::square(16, 0, 16)));
    }

    #[test]
    fn encounter_tests_differ_on_single_axis_offsets() {
        use crate::EncounterTest;
        let a = Rect::square(0, 0, 10);
        let beside = Rect::square(5, 0, 10);
        let diagonal = Rect::square(5, 5, 10);
        assert!(!EncounterTest::Corners.overlaps(&a, &beside));
        assert!(EncounterTest::Area.overlaps(&a, &beside));
        assert!(EncounterTest::Corners.overlaps(&a, &diagonal));
        assert!(EncounterTest::Corners.overlaps(&diagonal, &a));
        assert!(!EncounterTest::Corners.overlaps(&a, &a));
        assert_eq!(EncounterTest::default(), EncounterTest::Corners);
    }

    #[test]
    fn within_bounds_is_closed() {
        let arena = Rect::new(0, 0, 50, 50);
        assert!(Rect::square(40, 40, 10).within(&arena));
        assert!(!Rect::square(41, 40, 10).within(&arena));
        assert!(!Rect::square(-1, 0, 10).within(&arena));
    }

    #[test]
    fn translated_and_center() {
        let r = Rect::square(10, 10, 10).translated(5, -5);
        assert_eq!(r, Rect::square(15, 5, 10));
        assert_eq!(r.center(), Point::new(20, 10));
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, DirectionSet};

    #[test]
    fn velocity_signs() {
        assert_eq!(Direction::North.velocity(3), (0, -3));
        assert_eq!(Direction::East.velocity(3), (3, 0));
        assert_eq!(Direction::South.velocity(3), (0, 3));
        assert_eq!(Direction::West.velocity(3), (-3, 0));
    }

    #[test]
    fn reverse_and_perpendicular() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            for p in d.perpendicular() {
                assert_ne!(p.is_horizontal(), d.is_horizontal());
            }
        }
        assert_eq!(Direction::North.perpendicular(), [Direction::East, Direction::West]);
    }

    #[test]
    fn set_iterates_in_canonical_order() {
        let set = DirectionSet::from([Direction::West, Direction::North, Direction::South]);
        let v: Vec<Direction> = set.iter().collect();
        assert_eq!(v, vec![Direction::North, Direction::South, Direction::West]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.nth(1), Some(Direction::South));
        assert_eq!(set.nth(3), None);
        assert_eq!(set.to_string(), "[n,s,w]");
    }

    #[test]
    fn set_operations() {
        let mut set = DirectionSet::empty();
        assert!(set.is_empty());
        set.insert(Direction::East);
        assert!(set.is_only(Direction::East));
        set.insert(Direction::North);
        assert!(!set.is_only(Direction::East));
        let perp = DirectionSet::from(Direction::South.perpendicular());
        assert_eq!(set.intersection(perp), DirectionSet::from([Direction::East]));
        set.remove(Direction::East);
        assert!(set.is_only(Direction::North));
        assert_eq!(DirectionSet::ALL.len(), 4);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick::ZERO.to_string(), "T0");
        assert!(Tick(3) < Tick(10));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(60);
        for _ in 0..90 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(90));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-9);
        assert_eq!(clock.to_string(), "T90 (1.5 s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(1);
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, DecisionCadence, SimConfig, SpeedMode, WallLayout};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_size, 16);
        assert_eq!(cfg.columns(), 50);
        assert_eq!(cfg.rows(), 37);
    }

    #[test]
    fn rejects_bad_probability() {
        let cfg = SimConfig { sleep_probability: 1.5, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        let cfg = SimConfig { reroute_probability: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_geometry() {
        let cfg = SimConfig { cell_size: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { base_speed: 32, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { arena_width: 8, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_policies() {
        let cfg = SimConfig { sleep_ticks_min: 10, sleep_ticks_max: 10, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { decision_cadence: DecisionCadence::EveryTicks(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { speed_mode: SpeedMode::RandomWalk { min: 3, max: 2 }, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig {
            wall_layout: WallLayout::Grid { block_width: 7, block_height: 7, gap: 0 },
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
