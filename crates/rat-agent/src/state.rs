//! Rat life-cycle states and the events emitted on transitions.

use rat_core::{AgentId, ItemId};
use rat_world::ItemKind;

/// Where a rat is in its life cycle.
///
/// `Awake ⇄ Asleep` for as long as it lives; `Dead` is absorbing and ends in
/// removal once `fading` reaches zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Awake,
    /// Ticks left before waking.  Always `> 0` while in this state.
    Asleep { remaining: u32 },
    /// Ticks left before the corpse is removed.
    Dead { fading: u32 },
}

impl AgentState {
    #[inline]
    pub fn is_awake(self) -> bool {
        matches!(self, AgentState::Awake)
    }

    #[inline]
    pub fn is_asleep(self) -> bool {
        matches!(self, AgentState::Asleep { .. })
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, AgentState::Dead { .. })
    }
}

/// Something noteworthy that happened to a rat during one update.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentEvent {
    /// Started overlapping `other` this tick.
    Met(AgentId),
    /// No legal direction; did not move.
    Stuck,
    FellAsleep { ticks: u32 },
    Woke,
    Ate { item: ItemId, kind: ItemKind },
    Died,
    /// Finished fading; the simulation removes the rat.
    Faded,
}
