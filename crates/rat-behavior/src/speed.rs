//! Speed fluctuation strategies.

use rat_core::{AgentRng, SimConfig, SpeedMode};

use crate::error::check_probability;
use crate::{BehaviorError, BehaviorResult};

/// Pluggable speed update, consulted on grid-aligned ticks while awake.
///
/// Implementations must always return a speed of at least 1.
pub trait SpeedPolicy: Send + Sync + 'static {
    fn next_speed(&self, current: i32, base: i32, rng: &mut AgentRng) -> i32;
}

/// Speed never changes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ConstantSpeed;

impl SpeedPolicy for ConstantSpeed {
    fn next_speed(&self, current: i32, _base: i32, _rng: &mut AgentRng) -> i32 {
        current
    }
}

/// With probability `p`: at base speed, jump to half or double (50/50);
/// off base speed, return to it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToggleSpeed {
    p: f64,
}

impl ToggleSpeed {
    pub fn new(p: f64) -> BehaviorResult<Self> {
        Ok(Self { p: check_probability("speed change", p)? })
    }
}

impl SpeedPolicy for ToggleSpeed {
    fn next_speed(&self, current: i32, base: i32, rng: &mut AgentRng) -> i32 {
        if !rng.gen_bool(self.p) {
            return current;
        }
        if current != base {
            return base;
        }
        if rng.gen_bool(0.5) { (base / 2).max(1) } else { base * 2 }
    }
}

/// With probability `p`: `speed += {-1, 0, +1}`, clamped to `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomWalkSpeed {
    p:   f64,
    min: i32,
    max: i32,
}

impl RandomWalkSpeed {
    pub fn new(p: f64, min: i32, max: i32) -> BehaviorResult<Self> {
        if min < 1 || min > max {
            return Err(BehaviorError::SpeedRange { min, max });
        }
        Ok(Self { p: check_probability("speed change", p)?, min, max })
    }
}

impl SpeedPolicy for RandomWalkSpeed {
    fn next_speed(&self, current: i32, _base: i32, rng: &mut AgentRng) -> i32 {
        if !rng.gen_bool(self.p) {
            return current;
        }
        (current + rng.gen_range(-1..=1)).clamp(self.min, self.max)
    }
}

// ── ConfiguredSpeed ───────────────────────────────────────────────────────────

/// Whichever policy `SimConfig::speed_mode` names, chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfiguredSpeed {
    Constant(ConstantSpeed),
    Toggle(ToggleSpeed),
    RandomWalk(RandomWalkSpeed),
}

impl ConfiguredSpeed {
    pub fn from_config(config: &SimConfig) -> BehaviorResult<Self> {
        let p = config.speed_change_probability;
        Ok(match config.speed_mode {
            SpeedMode::Constant => ConfiguredSpeed::Constant(ConstantSpeed),
            SpeedMode::Toggle => ConfiguredSpeed::Toggle(ToggleSpeed::new(p)?),
            SpeedMode::RandomWalk { min, max } => {
                ConfiguredSpeed::RandomWalk(RandomWalkSpeed::new(p, min, max)?)
            }
        })
    }
}

impl SpeedPolicy for ConfiguredSpeed {
    fn next_speed(&self, current: i32, base: i32, rng: &mut AgentRng) -> i32 {
        match self {
            ConfiguredSpeed::Constant(s)   => s.next_speed(current, base, rng),
            ConfiguredSpeed::Toggle(s)     => s.next_speed(current, base, rng),
            ConfiguredSpeed::RandomWalk(s) => s.next_speed(current, base, rng),
        }
    }
}
