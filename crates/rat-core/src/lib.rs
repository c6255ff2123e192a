//! `rat-core` — foundational types for the `rat_arena` simulation.
//!
//! This crate is a dependency of every other `rat-*` crate.  It has no
//! `rat-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ItemId`                                   |
//! | [`geom`]        | `Point`, `Rect`, `Corners`, containment predicates    |
//! | [`direction`]   | `Direction`, `DirectionSet`                           |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`config`]      | `SimConfig`, `DecisionCadence`, `EncounterTest`, `SpeedMode`, `WallLayout` |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod direction;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DecisionCadence, EncounterTest, SimConfig, SpeedMode, WallLayout};
pub use direction::{Direction, DirectionSet};
pub use error::{CoreError, CoreResult};
pub use geom::{Corners, Point, Rect};
pub use ids::{AgentId, ItemId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
