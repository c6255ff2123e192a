//! The arena: bounds, static walls, and placeable items.
//!
//! Walls are fixed once the [`World`] is built.  Items may be placed and
//! removed at any time (by the input layer, or when a rat eats one) and
//! never block movement.

use tracing::{debug, info};

use rat_core::{ItemId, Point, Rect, SimConfig, WallLayout};

use crate::{Item, ItemKind, WorldError, WorldResult, grid_walls};

// ── World ─────────────────────────────────────────────────────────────────────

/// Arena geometry consumed by rats and exposed read-only to renderers.
///
/// Do not construct directly; use [`WorldBuilder`].
#[derive(Clone, Debug)]
pub struct World {
    width:     i32,
    height:    i32,
    walls:     Vec<Rect>,
    /// Kept in ascending `ItemId` order.
    items:     Vec<Item>,
    next_item: ItemId,
}

impl World {
    /// An arena with no walls and no items.
    pub fn empty(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            items: Vec::new(),
            next_item: ItemId(0),
        }
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The arena as a rectangle anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Walls in construction order.
    #[inline]
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Items in placement order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, |it| it.id)
            .ok()
            .map(|i| &self.items[i])
    }

    // ── Legality queries ──────────────────────────────────────────────────

    /// `true` iff `b` lies within the arena (edges may touch the border) and
    /// no corner of `b` lies strictly inside any wall.
    pub fn is_legal_box(&self, b: &Rect) -> bool {
        if !b.within(&self.bounds()) {
            return false;
        }
        let corners = b.corners();
        !self.walls.iter().any(|w| w.box_overlaps(&corners, false))
    }

    /// `true` if `p` lies inside or on the edge of any wall.  Used to reject
    /// spawn points.
    pub fn is_inside_any_wall(&self, p: Point) -> bool {
        self.walls.iter().any(|w| w.contains_point(p, true))
    }

    /// The first item (lowest id) under box `b`, using the closed pickup test.
    pub fn item_under(&self, b: &Rect) -> Option<&Item> {
        self.items.iter().find(|it| it.is_under(b))
    }

    // ── Item mutation ─────────────────────────────────────────────────────

    /// Drop an item into the arena.
    pub fn place_item(&mut self, rect: Rect, kind: ItemKind) -> WorldResult<ItemId> {
        if rect.is_empty() || !rect.within(&self.bounds()) {
            return Err(WorldError::BadItem(rect));
        }
        let id = self.next_item;
        self.next_item = id.next();
        self.items.push(Item { id, rect, kind });
        debug!(item = %id, ?kind, at = %rect, "item placed");
        Ok(id)
    }

    /// Take an item out of the arena, returning it.
    pub fn remove_item(&mut self, id: ItemId) -> WorldResult<Item> {
        let idx = self
            .items
            .binary_search_by_key(&id, |it| it.id)
            .map_err(|_| WorldError::ItemNotFound(id))?;
        let item = self.items.remove(idx);
        debug!(item = %id, kind = ?item.kind, "item removed");
        Ok(item)
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`World`].
///
/// # Example
///
/// ```rust
/// use rat_core::Rect;
/// use rat_world::WorldBuilder;
///
/// let world = WorldBuilder::new(100, 100)
///     .wall(Rect::new(40, 40, 20, 20))
///     .build()
///     .unwrap();
/// assert_eq!(world.walls().len(), 1);
/// ```
pub struct WorldBuilder {
    width:  i32,
    height: i32,
    cell:   i32,
    layout: WallLayout,
    walls:  Vec<Rect>,
}

impl WorldBuilder {
    /// A builder for an empty `width × height` arena.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cell: 1,
            layout: WallLayout::Empty,
            walls: Vec::new(),
        }
    }

    /// A builder with the arena size, cell size and wall layout of `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.arena_width, config.arena_height).layout(config.wall_layout, config.cell_size)
    }

    /// Generate walls from `layout`, measured in cells of `cell` pixels.
    pub fn layout(mut self, layout: WallLayout, cell: i32) -> Self {
        self.layout = layout;
        self.cell = cell;
        self
    }

    /// Add one explicit wall (after any generated ones).
    pub fn wall(mut self, wall: Rect) -> Self {
        self.walls.push(wall);
        self
    }

    /// Validate every wall and return the finished world.
    pub fn build(self) -> WorldResult<World> {
        let mut walls = match self.layout {
            WallLayout::Empty => Vec::new(),
            WallLayout::Grid { block_width, block_height, gap } => {
                grid_walls(self.width, self.height, self.cell, block_width, block_height, gap)
            }
        };
        walls.extend(self.walls);

        let mut world = World::empty(self.width, self.height);
        let bounds = world.bounds();
        for wall in &walls {
            if wall.is_empty() {
                return Err(WorldError::EmptyWall(*wall));
            }
            if !wall.within(&bounds) {
                return Err(WorldError::WallOutOfBounds(*wall));
            }
        }

        info!(width = self.width, height = self.height, walls = walls.len(), "world built");
        world.walls = walls;
        Ok(world)
    }
}
