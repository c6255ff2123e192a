//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one pass
//! of the update loop, which a renderer normally drives once per animation
//! frame.  `SimClock` maps ticks to seconds for the nominal frame rate so
//! that log output can say "12.5 s" instead of "tick 750".

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the nominal frame rate it is driven at.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Nominal ticks per second of the driving frame loop.  Default: 60.
    pub ticks_per_second: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal seconds elapsed since tick 0.
    pub fn elapsed_secs(&self) -> f64 {
        if self.ticks_per_second == 0 {
            return 0.0;
        }
        self.current_tick.0 as f64 / self.ticks_per_second as f64
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}
