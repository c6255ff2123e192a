//! The `Sim` struct and its tick loop.

use tracing::{debug, trace};

use rat_agent::{Agent, AgentEvent, DisplayTag, Perception, Presence, StepContext};
use rat_behavior::{SpeedPolicy, Steering};
use rat_core::{AgentId, Point, Rect, SimClock, SimConfig, SimRng, Tick};
use rat_world::World;

use crate::{SimError, SimObserver, SimResult, SpawnError, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S, V>` owns the arena, every rat, and the two policies, and drives
/// the tick loop:
///
/// 1. **Snapshot**: the box of every living rat, taken before anyone moves.
/// 2. **Perceive** (optionally parallel with the `parallel` feature): each
///    rat's legal directions and overlapping neighbours.
/// 3. **Update** (sequential, registration order): meet, choose, move,
///    eat, sleep, fade.
/// 4. **Remove**: faded rats leave; the others forget them.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: Steering, V: SpeedPolicy> {
    pub(crate) config:   SimConfig,
    pub(crate) clock:    SimClock,
    pub(crate) world:    World,
    /// Registration order; ids ascend along the vector.
    pub(crate) agents:   Vec<Agent>,
    /// Placement and naming stream.  Behaviour rolls use each rat's own RNG.
    pub(crate) rng:      SimRng,
    pub(crate) next_id:  AgentId,
    pub(crate) steering: S,
    pub(crate) speed:    V,
}

impl<S: Steering, V: SpeedPolicy> Sim<S, V> {
    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable arena access, for placing or removing items between ticks.
    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Every rat in the arena, in registration order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.index_of(id).map(|i| &self.agents[i])
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.index_of(id).map(|i| &mut self.agents[i])
    }

    fn index_of(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, Agent::id).ok()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Place a new rat on a random free cell.
    ///
    /// Candidates are cell-aligned positions whose box fits inside
    /// `preferred_region` (default: the whole arena) clipped to the arena.
    /// A candidate is accepted if its box is legal and its centre is not on
    /// or inside any wall.  Gives up after `config.spawn_attempts` tries.
    pub fn spawn_agent(&mut self, preferred_region: Option<Rect>) -> Result<AgentId, SpawnError> {
        let attempts = self.config.spawn_attempts;
        let cell = self.config.cell_size;
        let area = clip(preferred_region.unwrap_or(self.world.bounds()), &self.world.bounds());

        let (col_lo, col_hi) = cell_span(area.x, area.right(), cell);
        let (row_lo, row_hi) = cell_span(area.y, area.bottom(), cell);
        if col_lo > col_hi || row_lo > row_hi {
            return Err(SpawnError::NoRoomFound { attempts: 0 });
        }

        for _ in 0..attempts {
            let origin = Point::new(
                self.rng.gen_range(col_lo..=col_hi) * cell,
                self.rng.gen_range(row_lo..=row_hi) * cell,
            );
            if self.can_place(origin) {
                return Ok(self.insert(origin));
            }
        }
        Err(SpawnError::NoRoomFound { attempts })
    }

    /// Place a new rat with its top-left corner at `(x, y)`.
    pub fn spawn_agent_at(&mut self, x: i32, y: i32) -> Result<AgentId, SpawnError> {
        let origin = Point::new(x, y);
        if !self.can_place(origin) {
            return Err(SpawnError::Blocked { x, y });
        }
        Ok(self.insert(origin))
    }

    /// Take a rat out of the arena immediately.
    pub fn remove_agent(&mut self, id: AgentId) -> SimResult<Agent> {
        let idx = self.index_of(id).ok_or(SimError::AgentNotFound(id))?;
        let agent = self.agents.remove(idx);
        for other in &mut self.agents {
            other.forget(id);
        }
        debug!(rat = %agent.tag().name, id = %id, "removed");
        Ok(agent)
    }

    fn can_place(&self, origin: Point) -> bool {
        let b = Rect::square(origin.x, origin.y, self.config.cell_size);
        self.world.is_legal_box(&b) && !self.world.is_inside_any_wall(b.center())
    }

    fn insert(&mut self, origin: Point) -> AgentId {
        let id = self.next_id;
        self.next_id = id.next();
        let tag = DisplayTag::random(&mut self.rng);
        debug!(rat = %tag.name, id = %id, at = %origin, "spawned");
        self.agents.push(Agent::new(id, origin, &self.config, tag));
        id
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run from the current tick up to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.config.total_ticks);
        while self.clock.current_tick < end {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and for a renderer driving one tick per frame.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.tick();
        observer.on_tick_end(now, &report);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.world, &self.agents);
        }
    }

    /// Advance every rat by one tick and move the clock forward.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let mut report = TickReport::new(now);

        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let snapshot: Vec<Presence> = self
            .agents
            .iter()
            .filter(|a| !a.is_dead())
            .map(Agent::presence)
            .collect();

        // ── Phase 2: perceive (read-only) ─────────────────────────────────
        let perceptions = self.perceive_all(&snapshot);

        // ── Phase 3: update (registration order) ─────────────────────────
        //
        // Field borrows are explicit so the context can hold shared
        // references while rats and the world are borrowed mutably.
        let ctx = StepContext::new(now, &self.config, &self.steering, &self.speed);
        let world = &mut self.world;
        for (agent, perception) in self.agents.iter_mut().zip(perceptions) {
            let before = agent.position();
            let events = agent.update(perception, world, &ctx);
            if agent.position() != before {
                report.moved += 1;
            }
            record(&mut report, agent.id(), events);
        }

        // ── Phase 4: remove faded rats ────────────────────────────────────
        if !report.removed.is_empty() {
            let gone = &report.removed;
            self.agents.retain(|a| !gone.contains(&a.id()));
            for agent in &mut self.agents {
                for &id in gone {
                    agent.forget(id);
                }
            }
            debug!(tick = %now, count = gone.len(), "faded rats removed");
        }

        trace!(tick = %now, moved = report.moved, rats = self.agents.len(), "tick done");
        self.clock.advance();
        report
    }

    fn perceive_all(&self, snapshot: &[Presence]) -> Vec<Perception> {
        let world = &self.world;

        #[cfg(not(feature = "parallel"))]
        {
            self.agents.iter().map(|a| a.perceive(world, snapshot)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps registration order.
            self.agents.par_iter().map(|a| a.perceive(world, snapshot)).collect()
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn record(report: &mut TickReport, id: AgentId, events: Vec<AgentEvent>) {
    for event in events {
        match event {
            AgentEvent::Met(other)          => report.encounters.push((id, other)),
            AgentEvent::Stuck               => report.stuck.push(id),
            AgentEvent::FellAsleep { .. }   => report.fell_asleep.push(id),
            AgentEvent::Woke                => report.woke.push(id),
            AgentEvent::Ate { item, kind }  => report.meals.push((id, item, kind)),
            AgentEvent::Died                => report.deaths.push(id),
            AgentEvent::Faded               => report.removed.push(id),
        }
    }
}

/// `r` clipped to `bounds`; empty if they do not overlap.
fn clip(r: Rect, bounds: &Rect) -> Rect {
    let x = r.x.max(bounds.x);
    let y = r.y.max(bounds.y);
    let right = r.right().min(bounds.right());
    let bottom = r.bottom().min(bounds.bottom());
    Rect::new(x, y, (right - x).max(0), (bottom - y).max(0))
}

/// Inclusive range of cell indices `k` with `[k*cell, (k+1)*cell]` inside
/// `[lo, hi]`.  Empty when `first > last`.
fn cell_span(lo: i32, hi: i32, cell: i32) -> (i32, i32) {
    let first = (lo + cell - 1).div_euclid(cell);
    let last = (hi - cell).div_euclid(cell);
    (first, last)
}
