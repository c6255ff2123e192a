//! `rat-behavior` — the decisions a rat makes each tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`steering`] | `Steering` trait, `BiasedWalk`                                 |
//! | [`speed`]    | `SpeedPolicy` trait, `ConstantSpeed`, `ToggleSpeed`, `RandomWalkSpeed`, `ConfiguredSpeed` |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! Policies are stateless: everything that varies per rat (heading, speed,
//! RNG stream) is passed in.  That keeps them `Send + Sync` and lets one
//! instance serve the whole population.

pub mod error;
pub mod speed;
pub mod steering;


pub use error::{BehaviorError, BehaviorResult};
pub use speed::{ConfiguredSpeed, ConstantSpeed, RandomWalkSpeed, SpeedPolicy, ToggleSpeed};
pub use steering::{BiasedWalk, Steering};
