//! Inputs to the two phases of a rat's update.

use rat_core::{AgentId, DirectionSet, Rect, SimConfig, Tick};

/// One living rat's box as it was at the start of the tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Presence {
    pub id:   AgentId,
    pub rect: Rect,
}

/// Result of the read-only phase for one rat.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Perception {
    /// Legal directions at the current speed, canonical order.
    pub possible:    DirectionSet,
    /// Other rats whose boxes overlap this one, in snapshot order.
    pub overlapping: Vec<AgentId>,
}

/// Shared, read-only inputs to the write phase.
///
/// Built once per tick by the simulation and handed to every rat.
pub struct StepContext<'a, S, V> {
    /// Current simulation tick.
    pub tick:     Tick,
    /// Probabilities, timers, grid size, decision cadence.
    pub config:   &'a SimConfig,
    /// Direction-choice policy.
    pub steering: &'a S,
    /// Speed-fluctuation policy.
    pub speed:    &'a V,
}

impl<'a, S, V> StepContext<'a, S, V> {
    #[inline]
    pub fn new(tick: Tick, config: &'a SimConfig, steering: &'a S, speed: &'a V) -> Self {
        Self { tick, config, steering, speed }
    }
}
