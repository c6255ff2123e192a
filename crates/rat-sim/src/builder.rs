//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use rat_behavior::{BiasedWalk, ConfiguredSpeed, SpeedPolicy, Steering};
use rat_core::{AgentId, Rect, SimClock, SimConfig, SimRng};
use rat_world::WorldBuilder;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S, V>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — arena, population, probabilities, seed, …
/// - `S: Steering` — the direction-choice policy
/// - `V: SpeedPolicy` — the speed-fluctuation policy
///
/// [`SimBuilder::from_config`] picks both policies from the config.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                 |
/// |-------------------|-----------------------------------------|
/// | `.wall(r)`        | Only the walls of `config.wall_layout`  |
/// | `.population(n)`  | `config.agent_count`                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, BiasedWalk::default(), ConstantSpeed)
///     .wall(Rect::new(40, 40, 20, 20))
///     .population(3)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<S: Steering, V: SpeedPolicy> {
    config:     SimConfig,
    steering:   S,
    speed:      V,
    walls:      Vec<Rect>,
    population: Option<usize>,
}

impl SimBuilder<BiasedWalk, ConfiguredSpeed> {
    /// Builder using [`BiasedWalk`] with the config's probabilities and the
    /// speed policy named by `config.speed_mode`.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        let steering = BiasedWalk::from_config(&config)?;
        let speed = ConfiguredSpeed::from_config(&config)?;
        Ok(Self::new(config, steering, speed))
    }
}

impl<S: Steering, V: SpeedPolicy> SimBuilder<S, V> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, steering: S, speed: V) -> Self {
        Self {
            config,
            steering,
            speed,
            walls: Vec::new(),
            population: None,
        }
    }

    /// Add an explicit wall on top of the configured layout.
    pub fn wall(mut self, wall: Rect) -> Self {
        self.walls.push(wall);
        self
    }

    /// Spawn `n` rats instead of `config.agent_count`.
    pub fn population(mut self, n: usize) -> Self {
        self.population = Some(n);
        self
    }

    /// Validate the config, build the world, place the initial population,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S, V>> {
        self.config.validate()?;

        let world = self
            .walls
            .into_iter()
            .fold(WorldBuilder::from_config(&self.config), WorldBuilder::wall)
            .build()?;

        let population = self.population.unwrap_or(self.config.agent_count);
        let mut sim = Sim {
            clock:    SimClock::new(self.config.ticks_per_second),
            rng:      SimRng::new(self.config.seed),
            config:   self.config,
            world,
            agents:   Vec::with_capacity(population),
            next_id:  AgentId(0),
            steering: self.steering,
            speed:    self.speed,
        };
        for _ in 0..population {
            sim.spawn_agent(None)?;
        }

        info!(rats = population, seed = sim.config.seed, "population placed");
        Ok(sim)
    }
}
