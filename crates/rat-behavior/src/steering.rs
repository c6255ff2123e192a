//! The `Steering` trait — how a rat picks its next heading.

use rat_core::{AgentRng, Direction, DirectionSet, SimConfig};

use crate::BehaviorResult;
use crate::error::check_probability;

/// Pluggable direction choice.
///
/// Called by the agent only at decision points (see `DecisionCadence`) and
/// whenever its current heading has become illegal.
///
/// # Contract
///
/// - `possible` empty → return `None` (the rat is boxed in this tick).
/// - Otherwise the returned direction must be a member of `possible`.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirst;
///
/// impl Steering for AlwaysFirst {
///     fn choose(&self, _current: Option<Direction>, possible: DirectionSet, _rng: &mut AgentRng)
///         -> Option<Direction>
///     {
///         possible.nth(0)
///     }
/// }
/// ```
pub trait Steering: Send + Sync + 'static {
    fn choose(
        &self,
        current:  Option<Direction>,
        possible: DirectionSet,
        rng:      &mut AgentRng,
    ) -> Option<Direction>;
}

/// Uniform pick among the members of `possible`.
fn pick_uniform(possible: DirectionSet, rng: &mut AgentRng) -> Option<Direction> {
    if possible.is_empty() {
        return None;
    }
    possible.nth(rng.gen_range(0..possible.len()))
}

// ── BiasedWalk ────────────────────────────────────────────────────────────────

/// Biased random walk: prefers straight ahead, then a turn onto the other
/// axis, and only rarely doubles back.
///
/// Decision order when a re-decision is due (no heading, heading blocked, or
/// a reroute roll succeeded):
///
/// 1. perpendicular ∩ possible non-empty and the turn roll succeeds →
///    uniform pick among the perpendicular options;
/// 2. reverse legal and the reverse roll succeeds → reverse;
/// 3. straight ahead legal → keep heading;
/// 4. uniform pick among everything legal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BiasedWalk {
    reroute: f64,
    turn:    f64,
    reverse: f64,
}

impl BiasedWalk {
    pub fn new(reroute: f64, turn: f64, reverse: f64) -> BehaviorResult<Self> {
        Ok(Self {
            reroute: check_probability("reroute", reroute)?,
            turn:    check_probability("turn", turn)?,
            reverse: check_probability("reverse", reverse)?,
        })
    }

    /// Build from the probabilities in `config`.
    pub fn from_config(config: &SimConfig) -> BehaviorResult<Self> {
        Self::new(
            config.reroute_probability,
            config.turn_probability,
            config.reverse_probability,
        )
    }
}

impl Default for BiasedWalk {
    fn default() -> Self {
        Self { reroute: 0.02, turn: 0.5, reverse: 0.02 }
    }
}

impl Steering for BiasedWalk {
    fn choose(
        &self,
        current:  Option<Direction>,
        possible: DirectionSet,
        rng:      &mut AgentRng,
    ) -> Option<Direction> {
        if possible.is_empty() {
            return None;
        }
        let Some(heading) = current else {
            return pick_uniform(possible, rng);
        };

        let straight_ok = possible.contains(heading);
        if straight_ok && !rng.gen_bool(self.reroute) {
            return Some(heading);
        }

        let turns = possible.intersection(DirectionSet::from(heading.perpendicular()));
        if !turns.is_empty() && rng.gen_bool(self.turn) {
            return pick_uniform(turns, rng);
        }

        let back = heading.reverse();
        if possible.contains(back) && rng.gen_bool(self.reverse) {
            return Some(back);
        }
        if straight_ok {
            return Some(heading);
        }
        pick_uniform(possible, rng)
    }
}
