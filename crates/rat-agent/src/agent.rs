//! The `Agent` struct and its per-tick transition.

use tracing::{debug, warn};

use rat_behavior::{SpeedPolicy, Steering};
use rat_core::{
    AgentId, AgentRng, DecisionCadence, Direction, DirectionSet, EncounterTest, Point, Rect, SimConfig,
};
use rat_world::{ItemKind, World};

use crate::{AgentError, AgentEvent, AgentState, DisplayTag, Perception, Presence, StepContext};

#[cfg(feature = "fx-hash")]
type MeetingMap = rustc_hash::FxHashMap<AgentId, bool>;
#[cfg(not(feature = "fx-hash"))]
type MeetingMap = std::collections::HashMap<AgentId, bool>;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A rat: a square box of side `cell_size` moving through the [`World`].
///
/// Each rat owns its RNG stream, so its rolls do not depend on how many other
/// rats were updated before it.
#[derive(Clone, Debug)]
pub struct Agent {
    id:         AgentId,
    x:          i32,
    y:          i32,
    size:       i32,
    direction:  Direction,
    speed:      i32,
    base_speed: i32,
    encounter:  EncounterTest,
    state:      AgentState,
    /// Written by every update before anything reads it.
    possible:   DirectionSet,
    meeting:    MeetingMap,
    meals:      u32,
    tag:        DisplayTag,
    rng:        AgentRng,
}

impl Agent {
    /// A fresh, awake rat heading North at `config.base_speed`.
    pub fn new(id: AgentId, origin: Point, config: &SimConfig, tag: DisplayTag) -> Self {
        Self {
            id,
            x: origin.x,
            y: origin.y,
            size: config.cell_size,
            direction: Direction::North,
            speed: config.base_speed,
            base_speed: config.base_speed,
            encounter: config.encounter_test,
            state: AgentState::Awake,
            possible: DirectionSet::EMPTY,
            meeting: MeetingMap::default(),
            meals: 0,
            tag,
            rng: AgentRng::new(config.seed, id),
        }
    }

    /// Override the initial heading.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current bounding box.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::square(self.x, self.y, self.size)
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.state.is_asleep()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Directions found legal by the most recent look.
    #[inline]
    pub fn possible_directions(&self) -> DirectionSet {
        self.possible
    }

    /// `true` while this rat overlaps `other` (as of its last update).
    pub fn is_meeting(&self, other: AgentId) -> bool {
        self.meeting.get(&other).copied().unwrap_or(false)
    }

    /// Food items eaten so far.
    #[inline]
    pub fn meals(&self) -> u32 {
        self.meals
    }

    #[inline]
    pub fn tag(&self) -> &DisplayTag {
        &self.tag
    }

    /// Snapshot entry for the read phase.
    #[inline]
    pub fn presence(&self) -> Presence {
        Presence { id: self.id, rect: self.rect() }
    }

    /// `true` if the top-left corner sits on the movement grid.
    pub fn is_cell_aligned(&self) -> bool {
        self.x.rem_euclid(self.size) == 0 && self.y.rem_euclid(self.size) == 0
    }

    // ── Phase 1: perceive (read-only) ─────────────────────────────────────

    /// Directions whose one-step translation at the current speed yields a
    /// legal box.
    pub fn legal_directions(&self, world: &World) -> DirectionSet {
        let here = self.rect();
        Direction::ALL
            .into_iter()
            .filter(|d| {
                let (dx, dy) = d.velocity(self.speed);
                world.is_legal_box(&here.translated(dx, dy))
            })
            .collect()
    }

    /// Look around and note which other living rats overlap this one, under
    /// the configured [`EncounterTest`].
    ///
    /// `others` is the pre-tick snapshot; this rat's own entry is skipped.
    /// Dead rats perceive nothing.
    pub fn perceive(&self, world: &World, others: &[Presence]) -> Perception {
        if self.is_dead() {
            return Perception::default();
        }
        let here = self.rect();
        Perception {
            possible:    self.legal_directions(world),
            overlapping: others
                .iter()
                .filter(|p| p.id != self.id && self.encounter.overlaps(&here, &p.rect))
                .map(|p| p.id)
                .collect(),
        }
    }

    /// Recompute and store the legal directions.
    pub fn look(&mut self, world: &World) -> DirectionSet {
        self.possible = self.legal_directions(world);
        self.possible
    }

    // ── Phase 2: update (mutating) ────────────────────────────────────────

    /// Record who this rat is overlapping.  Returns the rats met for the
    /// first time since they last separated.
    pub fn meet(&mut self, overlapping: &[AgentId]) -> Vec<AgentId> {
        let mut met = Vec::new();
        for &other in overlapping {
            if other == self.id {
                continue;
            }
            let was_meeting = self.meeting.get(&other).copied().unwrap_or(false);
            if !was_meeting {
                met.push(other);
            }
            self.meeting.insert(other, true);
        }
        for (other, flag) in self.meeting.iter_mut() {
            if !overlapping.contains(other) {
                *flag = false;
            }
        }
        met
    }

    /// Drop any bookkeeping about `other` (it left the arena).
    pub fn forget(&mut self, other: AgentId) {
        self.meeting.remove(&other);
    }

    /// Ask `steering` for a heading among the stored legal directions.
    pub fn choose_direction<S: Steering>(&mut self, steering: &S) -> Result<Direction, AgentError> {
        let chosen = steering
            .choose(Some(self.direction), self.possible, &mut self.rng)
            .filter(|d| self.possible.contains(*d))
            .ok_or(AgentError::NoLegalDirection(self.id))?;
        self.direction = chosen;
        Ok(chosen)
    }

    /// Point the rat along `direction`.  It is re-validated on the next update.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Fall asleep for `ticks` ticks (at least one).  No effect on the dead.
    pub fn sleep(&mut self, ticks: u32) {
        if self.is_dead() {
            return;
        }
        self.state = AgentState::Asleep { remaining: ticks.max(1) };
        debug!(rat = %self.tag.name, id = %self.id, ticks, "falls asleep");
    }

    /// Wake immediately.  No effect unless asleep.
    pub fn wake(&mut self) {
        if self.is_sleeping() {
            self.state = AgentState::Awake;
            debug!(rat = %self.tag.name, id = %self.id, "wakes up");
        }
    }

    /// Die and start fading for `fade_ticks` ticks.
    pub fn die(&mut self, fade_ticks: u32) {
        if !self.is_dead() {
            self.state = AgentState::Dead { fading: fade_ticks };
            debug!(rat = %self.tag.name, id = %self.id, "dies");
        }
    }

    /// Run one tick of the state machine.
    ///
    /// Order: store legal directions, meet, then by state:
    ///
    /// - **Awake**: on the grid, maybe change speed (re-checking walls at the
    ///   new speed); choose a heading when a decision is due (or the heading
    ///   is blocked), move, maybe eat the item underneath, maybe fall asleep.
    /// - **Asleep**: count down; reaching zero wakes the rat this same tick.
    /// - **Dead**: count down the fade; reaching zero emits `Faded`.
    ///
    /// Items eaten are removed from `world`.
    pub fn update<S: Steering, V: SpeedPolicy>(
        &mut self,
        perception: Perception,
        world:      &mut World,
        ctx:        &StepContext<'_, S, V>,
    ) -> Vec<AgentEvent> {
        let mut events = Vec::new();

        if let AgentState::Dead { fading } = self.state {
            let fading = fading.saturating_sub(1);
            self.state = AgentState::Dead { fading };
            if fading == 0 {
                events.push(AgentEvent::Faded);
            }
            return events;
        }

        self.possible = perception.possible;
        for other in self.meet(&perception.overlapping) {
            debug!(rat = %self.tag.name, id = %self.id, other = %other, "meets");
            events.push(AgentEvent::Met(other));
        }

        if let AgentState::Asleep { remaining } = self.state {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.state = AgentState::Awake;
                debug!(rat = %self.tag.name, id = %self.id, "wakes up");
                events.push(AgentEvent::Woke);
            } else {
                self.state = AgentState::Asleep { remaining };
            }
            return events;
        }

        let aligned = self.is_cell_aligned();
        if aligned {
            let next = ctx.speed.next_speed(self.speed, self.base_speed, &mut self.rng).max(1);
            if next != self.speed {
                self.speed = next;
                // Legality depends on walls only, never on other rats.
                self.possible = self.legal_directions(world);
            }
        }

        let due = match ctx.config.decision_cadence {
            DecisionCadence::GridAligned => aligned,
            DecisionCadence::EveryTicks(n) => n > 0 && ctx.tick.0 % u64::from(n) == 0,
        };
        if due || !self.possible.contains(self.direction) {
            if let Err(err) = self.choose_direction(ctx.steering) {
                warn!(rat = %self.tag.name, tick = %ctx.tick, "{err}");
                events.push(AgentEvent::Stuck);
                return events;
            }
        }

        let (dx, dy) = self.direction.velocity(self.speed);
        self.x += dx;
        self.y += dy;

        if let Some(item) = world.item_under(&self.rect()).copied() {
            if world.remove_item(item.id).is_ok() {
                events.push(AgentEvent::Ate { item: item.id, kind: item.kind });
                match item.kind {
                    ItemKind::Food => self.meals += 1,
                    ItemKind::Poison => {
                        self.die(ctx.config.fade_ticks);
                        events.push(AgentEvent::Died);
                        return events;
                    }
                }
            }
        }

        if self.rng.gen_bool(ctx.config.sleep_probability) {
            let lo = ctx.config.sleep_ticks_min;
            let hi = ctx.config.sleep_ticks_max.max(lo + 1);
            let ticks = self.rng.gen_range(lo..hi);
            self.sleep(ticks);
            events.push(AgentEvent::FellAsleep { ticks });
        }

        events
    }
}
