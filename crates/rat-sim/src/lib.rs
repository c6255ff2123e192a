//! `rat-sim` — tick loop orchestrator for the rat_arena simulation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Snapshot — record the box of every living rat.
//!   ② Perceive — each rat computes its legal directions and the rats it
//!                overlaps, against the snapshot (parallel with `parallel`).
//!   ③ Update   — in registration order, each rat meets, chooses, moves,
//!                eats, sleeps or fades.
//!   ④ Remove   — rats that finished fading leave the arena.
//! ```
//!
//! Because ② only reads, no rat's decision depends on another rat's
//! post-tick position.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the perception phase on Rayon's thread pool.      |
//! | `fx-hash`  | FxHash for the per-rat meeting map.                    |
//! | `serde`    | Serde derives on `TickReport` and its value types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rat_core::SimConfig;
//! use rat_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_config(SimConfig::default())?.build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult, SpawnError};
pub use observer::{NoopObserver, SimObserver};
pub use report::TickReport;
pub use sim::Sim;
