//! Simulation observer trait for progress reporting and data collection.

use pursuit_agent::Agent;
use pursuit_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, agents: &[Agent]) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: agent 0 at {}", agents[0].position);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the guards run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with read-only access to all agents.
    ///
    /// Also called on guarded ticks (map destroyed, target won/dead), in
    /// which case the agents are unchanged from the previous tick.
    fn on_tick_end(&mut self, _tick: Tick, _agents: &[Agent]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
