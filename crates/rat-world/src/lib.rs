//! `rat-world` — the static geometry rats move through.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`world`]  | `World` (bounds, walls, items), `WorldBuilder`               |
//! | [`layout`] | `grid_walls` — the evenly spaced wall-block generator        |
//! | [`item`]   | `Item`, `ItemKind`                                           |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod item;
pub mod layout;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use item::{Item, ItemKind};
pub use layout::grid_walls;
pub use world::{World, WorldBuilder};
