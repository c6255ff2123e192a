//! Placeable, destructible items.

use rat_core::{ItemId, Rect};

/// What happens to a rat that steps on an item.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Eaten and counted; no other effect.
    Food,
    /// Eaten; the rat dies and starts fading.
    Poison,
}

/// An item lying in the arena.  Items never block movement.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id:   ItemId,
    pub rect: Rect,
    pub kind: ItemKind,
}

impl Item {
    /// Pickup test: closed bounds, checked in both directions so an item
    /// smaller than the rat is found when it lies entirely under it.
    pub fn is_under(&self, rat: &Rect) -> bool {
        self.rect.box_overlaps(&rat.corners(), true) || rat.box_overlaps(&self.rect.corners(), true)
    }
}
