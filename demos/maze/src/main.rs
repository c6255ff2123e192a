//! maze — headless run of the rat arena.
//!
//! Spawns a population of rats into the default block maze, scatters food
//! and a little poison, runs for `total_ticks`, and prints the final arena as
//! text.  Pass a JSON `SimConfig` path as the first argument to override the
//! defaults; any field left out keeps its default value.
//!
//! Set `RUST_LOG=debug` to follow every encounter, nap and death.

mod render;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use rat_agent::Agent;
use rat_core::{Point, Rect, SimConfig, Tick};
use rat_sim::{SimBuilder, SimObserver, TickReport};
use rat_world::{ItemKind, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const FOOD_COUNT:              usize = 12;
const POISON_COUNT:            usize = 2;
const SNAPSHOT_INTERVAL_TICKS: u64   = 600; // every 10 s at 60 fps

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies the tick reports and logs a one-line census at every snapshot.
#[derive(Default)]
struct Diary {
    encounters: usize,
    naps:       usize,
    meals:      usize,
    deaths:     usize,
    stuck:      usize,
}

impl SimObserver for Diary {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        for (rat, other) in &report.encounters {
            debug!(%tick, %rat, %other, "hello");
        }
        for (rat, item, kind) in &report.meals {
            debug!(%tick, %rat, %item, ?kind, "eats");
        }
        self.encounters += report.encounters.len();
        self.naps += report.fell_asleep.len();
        self.meals += report.meals.len();
        self.deaths += report.deaths.len();
        self.stuck += report.stuck.len();
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, agents: &[Agent]) {
        let asleep = agents.iter().filter(|a| a.is_sleeping()).count();
        let dead = agents.iter().filter(|a| a.is_dead()).count();
        info!(
            %tick,
            rats = agents.len(),
            awake = agents.len() - asleep - dead,
            asleep,
            dead,
            items = world.items().len(),
            "census"
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, "simulation finished");
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Put `food` food items then `poison` poison items on the centres of free
/// cells, spread evenly through the arena in row-major order.
fn scatter_items(world: &mut World, cell: i32, food: usize, poison: usize) -> Result<()> {
    let side = (cell / 2).max(1);
    let free: Vec<Point> = (0..world.height() / cell)
        .flat_map(|r| (0..world.width() / cell).map(move |c| Point::new(c * cell, r * cell)))
        .filter(|p| {
            let b = Rect::square(p.x, p.y, cell);
            world.is_legal_box(&b) && !world.is_inside_any_wall(b.center())
        })
        .collect();

    let wanted = food + poison;
    if free.len() < wanted {
        warn!(free = free.len(), wanted, "not enough free cells for every item");
    }
    let stride = (free.len() / wanted.max(1)).max(1);
    for (n, p) in free.iter().step_by(stride).take(wanted).enumerate() {
        let kind = if n < food { ItemKind::Food } else { ItemKind::Poison };
        let offset = (cell - side) / 2;
        world.place_item(Rect::square(p.x + offset, p.y + offset, side), kind)?;
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig {
            snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
            ..SimConfig::default()
        },
    };
    println!("=== maze — rat arena ===");
    println!(
        "Arena: {}x{} px ({}x{} cells)  |  Rats: {}  |  Ticks: {}  |  Seed: {}",
        config.arena_width,
        config.arena_height,
        config.columns(),
        config.rows(),
        config.agent_count,
        config.total_ticks,
        config.seed,
    );
    println!();

    // 1. Build the sim: world, policies, initial population.
    let mut sim = SimBuilder::from_config(config.clone())?.build()?;
    scatter_items(sim.world_mut(), config.cell_size, FOOD_COUNT, POISON_COUNT)?;
    println!(
        "World: {} walls, {} items",
        sim.world().walls().len(),
        sim.world().items().len()
    );

    // 2. Run.
    let mut diary = Diary::default();
    let t0 = Instant::now();
    sim.run(&mut diary);
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!("Simulated {} in {:.3} s", sim.clock(), elapsed.as_secs_f64());
    println!(
        "  encounters: {}  naps: {}  meals: {}  deaths: {}  stuck ticks: {}",
        diary.encounters, diary.naps, diary.meals, diary.deaths, diary.stuck
    );
    println!();

    // 4. Final arena.
    print!("{}", render::frame(sim.world(), sim.agents(), config.cell_size));
    println!();

    // 5. Final rat table.
    println!("{:<12} {:<12} {:<7} {:<12} {:<14} {:<5}", "Rat", "Name", "Colour", "Box", "State", "Meals");
    println!("{}", "-".repeat(66));
    for a in sim.agents() {
        println!(
            "{:<12} {:<12} {:<7} {:<12} {:<14} {:<5}",
            a.id().to_string(),
            a.tag().name,
            a.tag().color(),
            a.rect().to_string(),
            render::state_label(a.state()),
            a.meals(),
        );
    }

    Ok(())
}
