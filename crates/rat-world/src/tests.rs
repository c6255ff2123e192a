//! Unit tests for rat-world.

#[cfg(test)]
mod helpers {
    use rat_core::Rect;

    use crate::{World, WorldBuilder};

    /// 100×100 arena with a single 20×20 wall in the middle.
    pub fn centre_wall() -> World {
        WorldBuilder::new(100, 100)
            .wall(Rect::new(40, 40, 20, 20))
            .build()
            .unwrap()
    }
}

// ── Legality ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod legality {
    use rat_core::{Point, Rect};

    use super::helpers::centre_wall;
    use crate::World;

    #[test]
    fn inside_bounds_no_walls_is_legal() {
        let world = World::empty(50, 50);
        assert!(world.is_legal_box(&Rect::square(0, 0, 10)));
        assert!(world.is_legal_box(&Rect::square(40, 40, 10)));
    }

    #[test]
    fn out_of_bounds_is_illegal() {
        let world = World::empty(50, 50);
        assert!(!world.is_legal_box(&Rect::square(-5, 0, 10)));
        assert!(!world.is_legal_box(&Rect::square(0, -5, 10)));
        assert!(!world.is_legal_box(&Rect::square(45, 0, 10)));
        assert!(!world.is_legal_box(&Rect::square(0, 45, 10)));
    }

    #[test]
    fn touching_a_wall_is_legal() {
        let world = centre_wall();
        assert!(world.is_legal_box(&Rect::square(30, 40, 10)));
        assert!(world.is_legal_box(&Rect::square(60, 50, 10)));
        assert!(world.is_legal_box(&Rect::square(40, 30, 10)));
    }

    #[test]
    fn corner_inside_a_wall_is_illegal() {
        let world = centre_wall();
        assert!(!world.is_legal_box(&Rect::square(31, 40, 10)));
        assert!(!world.is_legal_box(&Rect::square(45, 45, 10)));
    }

    #[test]
    fn legal_iff_in_bounds_and_no_corner_strictly_inside() {
        let world = centre_wall();
        let wall = world.walls()[0];
        for x in -10..=100 {
            for y in (-10..=100).step_by(5) {
                let b = Rect::square(x, y, 10);
                let expected = b.within(&world.bounds())
                    && !b.corners().to_array().iter().any(|&p| wall.contains_point(p, false));
                assert_eq!(world.is_legal_box(&b), expected, "box {b}");
            }
        }
    }

    #[test]
    fn inside_any_wall_is_closed() {
        let world = centre_wall();
        assert!(world.is_inside_any_wall(Point::new(40, 40)));
        assert!(world.is_inside_any_wall(Point::new(50, 50)));
        assert!(world.is_inside_any_wall(Point::new(60, 60)));
        assert!(!world.is_inside_any_wall(Point::new(39, 50)));
    }
}

// ── Builder & layout ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rat_core::{Rect, SimConfig, WallLayout};

    use crate::{WorldBuilder, WorldError, grid_walls};

    #[test]
    fn rejects_wall_outside_arena() {
        let err = WorldBuilder::new(100, 100)
            .wall(Rect::new(90, 90, 20, 20))
            .build()
            .unwrap_err();
        assert_eq!(err, WorldError::WallOutOfBounds(Rect::new(90, 90, 20, 20)));
    }

    #[test]
    fn rejects_empty_wall() {
        let err = WorldBuilder::new(100, 100)
            .wall(Rect::new(10, 10, 0, 20))
            .build()
            .unwrap_err();
        assert!(matches!(err, WorldError::EmptyWall(_)));
    }

    #[test]
    fn grid_layout_matches_pitch() {
        // cell 16, 7×7 blocks, gap 1 → pitch 128 px.
        let walls = grid_walls(800, 600, 16, 7, 7, 1);
        // 800/128 = 6 columns, 600/128 = 4 rows.
        assert_eq!(walls.len(), 24);
        assert_eq!(walls[0], Rect::new(16, 16, 112, 112));
        assert_eq!(walls[1], Rect::new(144, 16, 112, 112));
        assert_eq!(walls[6], Rect::new(16, 144, 112, 112));
    }

    #[test]
    fn grid_walls_never_overlap_and_stay_inside() {
        let walls = grid_walls(800, 600, 16, 7, 7, 1);
        let arena = Rect::new(0, 0, 800, 600);
        for (i, a) in walls.iter().enumerate() {
            assert!(a.within(&arena));
            for b in &walls[i + 1..] {
                assert!(!a.intersects(b), "{a} overlaps {b}");
                // Corridor of at least one cell between neighbours.
                let dx = (b.x - a.right()).max(a.x - b.right());
                let dy = (b.y - a.bottom()).max(a.y - b.bottom());
                assert!(dx >= 16 || dy >= 16);
            }
        }
    }

    #[test]
    fn arena_too_small_for_a_block_has_no_walls() {
        assert!(grid_walls(100, 100, 16, 7, 7, 1).is_empty());
    }

    #[test]
    fn from_config_uses_layout() {
        let world = WorldBuilder::from_config(&SimConfig::default()).build().unwrap();
        assert_eq!(world.walls().len(), 24);

        let cfg = SimConfig { wall_layout: WallLayout::Empty, ..SimConfig::default() };
        let world = WorldBuilder::from_config(&cfg)
            .wall(Rect::new(0, 0, 16, 16))
            .build()
            .unwrap();
        assert_eq!(world.walls(), &[Rect::new(0, 0, 16, 16)]);
    }
}

// ── Items ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod items {
    use rat_core::{ItemId, Rect};

    use crate::{ItemKind, World, WorldError};

    #[test]
    fn place_find_remove() {
        let mut world = World::empty(100, 100);
        let a = world.place_item(Rect::square(20, 20, 4), ItemKind::Food).unwrap();
        let b = world.place_item(Rect::square(60, 60, 4), ItemKind::Poison).unwrap();
        assert_eq!((a, b), (ItemId(0), ItemId(1)));
        assert_eq!(world.item(b).map(|it| it.kind), Some(ItemKind::Poison));

        let removed = world.remove_item(a).unwrap();
        assert_eq!(removed.kind, ItemKind::Food);
        assert!(world.item(a).is_none());
        assert_eq!(world.remove_item(a).unwrap_err(), WorldError::ItemNotFound(a));
        assert_eq!(world.items().len(), 1);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut world = World::empty(100, 100);
        let a = world.place_item(Rect::square(0, 0, 4), ItemKind::Food).unwrap();
        world.remove_item(a).unwrap();
        let b = world.place_item(Rect::square(0, 0, 4), ItemKind::Food).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_item_outside_arena() {
        let mut world = World::empty(100, 100);
        assert!(matches!(
            world.place_item(Rect::square(98, 0, 4), ItemKind::Food),
            Err(WorldError::BadItem(_))
        ));
    }

    #[test]
    fn pickup_is_inclusive_both_ways() {
        let mut world = World::empty(100, 100);
        world.place_item(Rect::square(20, 20, 4), ItemKind::Food).unwrap();
        // Item entirely under a larger rat.
        assert!(world.item_under(&Rect::square(16, 16, 16)).is_some());
        // Rat edge touching item edge counts.
        assert!(world.item_under(&Rect::square(4, 20, 16)).is_some());
        // One pixel short.
        assert!(world.item_under(&Rect::square(3, 20, 16)).is_none());
    }

    #[test]
    fn items_do_not_affect_legality() {
        let mut world = World::empty(100, 100);
        world.place_item(Rect::square(0, 0, 50), ItemKind::Poison).unwrap();
        assert!(world.is_legal_box(&Rect::square(10, 10, 10)));
    }
}
