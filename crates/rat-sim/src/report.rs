//! Per-tick summary handed to observers.

use rat_core::{AgentId, ItemId, Tick};
use rat_world::ItemKind;

/// What happened during one tick.
///
/// Lists are in registration order of the rat the event belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick:        Tick,
    /// `(rat, other)`: `rat` started overlapping `other`.  A mutual meeting
    /// appears once from each side.
    pub encounters:  Vec<(AgentId, AgentId)>,
    /// Rats with no legal direction this tick.
    pub stuck:       Vec<AgentId>,
    pub fell_asleep: Vec<AgentId>,
    pub woke:        Vec<AgentId>,
    pub meals:       Vec<(AgentId, ItemId, ItemKind)>,
    pub deaths:      Vec<AgentId>,
    /// Rats that finished fading and were removed at the end of the tick.
    pub removed:     Vec<AgentId>,
    /// Number of rats whose position changed.
    pub moved:       usize,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }
}
