//! Simulation observer trait for progress reporting and rendering.

use rat_agent::Agent;
use rat_core::Tick;
use rat_world::World;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — encounter printer
///
/// ```rust,ignore
/// struct Gossip;
///
/// impl SimObserver for Gossip {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         for (a, b) in &report.encounters {
///             println!("{tick}: {a} met {b}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after faded rats were removed.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called every `config.snapshot_interval_ticks` ticks.
    ///
    /// Read-only access to the arena and every rat, so a renderer can draw a
    /// frame without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World, _agents: &[Agent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
