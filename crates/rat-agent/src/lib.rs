//! `rat-agent` — the rat and its per-tick state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`agent`]   | `Agent`: look, meet, choose direction, move, sleep, die    |
//! | [`state`]   | `AgentState` (`Awake` / `Asleep` / `Dead`), `AgentEvent`   |
//! | [`context`] | `StepContext`, `Perception`, `Presence`                    |
//! | [`tag`]     | `DisplayTag`, `Sex` — name and colour for renderers        |
//! | [`error`]   | `AgentError`                                               |
//!
//! # Two-phase update
//!
//! A tick is split so that no rat sees another rat's post-tick position:
//!
//! 1. **Perceive** (read-only): [`Agent::perceive`] computes legal directions
//!    against the `World` and which other rats overlap, from a snapshot of
//!    every rat's box taken before anyone moved.
//! 2. **Update** (mutating, registration order): [`Agent::update`] consumes
//!    that `Perception`, records encounters, chooses a heading, and moves or
//!    sleeps.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the meeting map.           |
//! | `serde`   | Derives `Serialize`/`Deserialize` on value types.        |

pub mod agent;
pub mod context;
pub mod error;
pub mod state;
pub mod tag;


pub use agent::Agent;
pub use context::{Perception, Presence, StepContext};
pub use error::AgentError;
pub use state::{AgentEvent, AgentState};
pub use tag::{DisplayTag, Sex};
