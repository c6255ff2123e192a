//! Simulation configuration.
//!
//! Every tunable of the arena lives in [`SimConfig`]: geometry, population,
//! probabilities, timers.  Applications build one in code or load it from a
//! JSON/TOML file (with the `serde` feature) and pass it to the simulation
//! builder, which calls [`SimConfig::validate`] before doing anything else.

use crate::{CoreError, CoreResult, Rect};

// ── Policy enums ──────────────────────────────────────────────────────────────

/// When a rat is allowed to reconsider its heading.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionCadence {
    /// Only when the rat's top-left corner sits exactly on the movement grid
    /// (`x % cell_size == 0 && y % cell_size == 0`).  Keeps rats in lanes.
    #[default]
    GridAligned,
    /// Every `n` ticks regardless of position.
    EveryTicks(u32),
}

/// Which speed-fluctuation strategy rats use.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedMode {
    /// Speed never changes.
    Constant,
    /// Toggle between `base_speed` and `base_speed / 2` or `base_speed * 2`.
    #[default]
    Toggle,
    /// Random walk `speed += {-1, 0, +1}` clamped to `[min, max]`.
    RandomWalk { min: i32, max: i32 },
}

/// When two rats count as overlapping for encounter bookkeeping.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterTest {
    /// A corner of the other box lies strictly inside this one.  Equal boxes
    /// offset along a single axis, or stacked exactly, do not meet.
    #[default]
    Corners,
    /// The open interiors share any area.
    Area,
}

impl EncounterTest {
    /// Does `other` overlap `this` under this test?
    pub fn overlaps(self, this: &Rect, other: &Rect) -> bool {
        match self {
            EncounterTest::Corners => this.box_overlaps(&other.corners(), false),
            EncounterTest::Area => this.intersects(other),
        }
    }
}

/// How the static walls are generated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallLayout {
    /// No generated walls (explicit walls may still be added by the builder).
    Empty,
    /// Evenly spaced `block_width × block_height` blocks (in cells) separated
    /// by `gap` cells, tiled row-major from the top-left.
    Grid {
        block_width:  i32,
        block_height: i32,
        gap:          i32,
    },
}

impl Default for WallLayout {
    fn default() -> Self {
        WallLayout::Grid { block_width: 7, block_height: 7, gap: 1 }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Arena width in pixels.
    pub arena_width: i32,
    /// Arena height in pixels.
    pub arena_height: i32,
    /// Side of a rat's square box and the unit of the movement grid.
    pub cell_size: i32,
    /// Initial speed of every rat, in pixels per tick.
    pub base_speed: i32,

    /// Rats spawned by the builder.
    pub agent_count: usize,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Ticks simulated by `Sim::run`.
    pub total_ticks: u64,
    /// Call `SimObserver::on_snapshot` every N ticks (0 disables).
    pub snapshot_interval_ticks: u64,
    /// Nominal frame rate, used only to report elapsed time.
    pub ticks_per_second: u32,

    /// Chance per decision of reconsidering a still-legal heading.
    pub reroute_probability: f64,
    /// Chance of turning onto the perpendicular axis when rerouting.
    pub turn_probability: f64,
    /// Chance of reversing when rerouting and the turn roll failed.
    pub reverse_probability: f64,
    /// Chance per awake tick of falling asleep.
    pub sleep_probability: f64,
    /// Chance per grid-aligned tick of a speed change.
    pub speed_change_probability: f64,

    /// Sleep duration is drawn uniformly from `[sleep_ticks_min, sleep_ticks_max)`.
    pub sleep_ticks_min: u32,
    pub sleep_ticks_max: u32,
    /// Ticks a dead rat stays in the arena before removal.
    pub fade_ticks: u32,
    /// Placement attempts before spawning gives up.
    pub spawn_attempts: u32,

    pub decision_cadence: DecisionCadence,
    pub encounter_test:   EncounterTest,
    pub speed_mode:       SpeedMode,
    pub wall_layout:      WallLayout,
}

impl Default for SimConfig {
    fn default() -> Self {
        let base_speed = 2;
        Self {
            arena_width:              800,
            arena_height:             600,
            cell_size:                base_speed * 8,
            base_speed,
            agent_count:              10,
            seed:                     0,
            total_ticks:              3_600,
            snapshot_interval_ticks:  0,
            ticks_per_second:         60,
            reroute_probability:      0.02,
            turn_probability:         0.5,
            reverse_probability:      0.02,
            sleep_probability:        0.005,
            speed_change_probability: 0.0,
            sleep_ticks_min:          10,
            sleep_ticks_max:          110,
            fade_ticks:               60,
            spawn_attempts:           1_000,
            decision_cadence:         DecisionCadence::default(),
            encounter_test:           EncounterTest::default(),
            speed_mode:               SpeedMode::default(),
            wall_layout:              WallLayout::default(),
        }
    }
}

impl SimConfig {
    /// Number of whole grid columns in the arena.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.arena_width / self.cell_size
    }

    /// Number of whole grid rows in the arena.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.arena_height / self.cell_size
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cell_size <= 0 {
            return Err(config_err(format!("cell_size must be positive, got {}", self.cell_size)));
        }
        if self.base_speed <= 0 {
            return Err(config_err(format!("base_speed must be positive, got {}", self.base_speed)));
        }
        if self.base_speed > self.cell_size {
            return Err(config_err(format!(
                "base_speed {} exceeds cell_size {}",
                self.base_speed, self.cell_size
            )));
        }
        if self.arena_width < self.cell_size || self.arena_height < self.cell_size {
            return Err(config_err(format!(
                "arena {}x{} cannot hold a single {}px cell",
                self.arena_width, self.arena_height, self.cell_size
            )));
        }

        let probabilities = [
            ("reroute_probability", self.reroute_probability),
            ("turn_probability", self.turn_probability),
            ("reverse_probability", self.reverse_probability),
            ("sleep_probability", self.sleep_probability),
            ("speed_change_probability", self.speed_change_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(config_err(format!("{name} must lie in [0, 1], got {p}")));
            }
        }

        if self.sleep_ticks_min == 0 || self.sleep_ticks_min >= self.sleep_ticks_max {
            return Err(config_err(format!(
                "sleep range [{}, {}) must be non-empty and start above zero",
                self.sleep_ticks_min, self.sleep_ticks_max
            )));
        }
        if self.spawn_attempts == 0 {
            return Err(config_err("spawn_attempts must be at least 1".into()));
        }
        if self.decision_cadence == DecisionCadence::EveryTicks(0) {
            return Err(config_err("decision cadence EveryTicks(0) never decides".into()));
        }
        if let SpeedMode::RandomWalk { min, max } = self.speed_mode {
            if min < 1 || min > max {
                return Err(config_err(format!("random-walk speed range [{min}, {max}] is invalid")));
            }
        }
        if let WallLayout::Grid { block_width, block_height, gap } = self.wall_layout {
            if block_width <= 0 || block_height <= 0 || gap <= 0 {
                return Err(config_err(format!(
                    "grid layout needs positive block size and gap, got {block_width}x{block_height} gap {gap}"
                )));
            }
        }
        Ok(())
    }
}

fn config_err(msg: String) -> CoreError {
    CoreError::Config(msg)
}
