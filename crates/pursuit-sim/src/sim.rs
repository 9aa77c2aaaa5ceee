//! The `Sim` struct and its tick loop.

use pursuit_agent::{machine, Agent, AgentRngs, TargetView};
use pursuit_core::{AgentId, SimConfig, TickClock};
use pursuit_grid::{MapPhase, TileGrid};
use pursuit_plan::Planner;

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<P>` owns all agent state and drives the guarded tick loop:
///
/// 1. **Guards**: the map-lifecycle phase is checked first — a destroyed
///    map means no agent code touches the grid at all.  Then the target's
///    goal/death flags: once the round is decided, agents freeze in place.
/// 2. **Step phase**: [`machine::step`] once per agent in ascending
///    `AgentId` order.  Strictly sequential; each agent's state and RNG are
///    private to it, so order is the only thing determinism depends on.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Planner> {
    /// Global configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: TickClock,

    /// The tile grid agents walk on.  Replaced wholesale by
    /// [`regenerate`](Sim::regenerate), never mutated in place.
    pub grid: TileGrid,

    /// Map lifecycle signal, normally driven by the external map generator
    /// via [`set_phase`](Sim::set_phase).
    pub phase: MapPhase,

    /// All agents, indexed by `AgentId`.
    pub agents: Vec<Agent>,

    /// Per-agent deterministic RNGs, parallel to `agents`.
    pub rngs: AgentRngs,

    /// The path planner shared by every agent.
    pub planner: P,

    /// Latest tracked-target snapshot, refreshed by the driver via
    /// [`set_target`](Sim::set_target).
    pub target: TargetView,
}

impl<P: Planner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.tick_once(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_once(observer);
        }
        Ok(())
    }

    /// Refresh the tracked-target snapshot for subsequent ticks.
    pub fn set_target(&mut self, target: TargetView) {
        self.target = target;
    }

    /// Update the map lifecycle signal.
    pub fn set_phase(&mut self, phase: MapPhase) {
        self.phase = phase;
    }

    /// Shared access to one agent.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Swap in a freshly generated grid and reset every agent onto it.
    ///
    /// This is the only sanctioned way to change the map: stale `TileId`s
    /// from the old grid are flushed by the resets, and the phase returns
    /// to `Ready`.  Fails if the new grid has no walkable tiles, leaving
    /// the phase at `Building` so the guard keeps agents suspended.
    pub fn regenerate(&mut self, grid: TileGrid) -> SimResult<()> {
        self.phase = MapPhase::Building;
        self.grid = grid;
        self.reset_agents()?;
        self.phase = MapPhase::Ready;
        Ok(())
    }

    /// Reset every agent (random walkable spawn, default mode, empty path).
    pub fn reset_agents(&mut self) -> SimResult<()> {
        for (i, agent) in self.agents.iter_mut().enumerate() {
            let rng = self.rngs.get_mut(AgentId(i as u32));
            agent.reset(&self.grid, rng)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick();
        observer.on_tick_end(now, &self.agents);
        self.clock.advance();
    }

    /// Step all agents, unless a guard suppresses the tick.
    fn process_tick(&mut self) {
        // Guard order matters: a destroyed map means even reading tile data
        // is unsafe territory, so it is checked before anything else.
        if !self.phase.is_ready() {
            return;
        }
        if !self.target.is_active() {
            return;
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid = &self.grid;
        let planner = &self.planner;
        let target = &self.target;
        let dt = self.clock.tick_duration_secs;
        let rngs = &mut self.rngs;

        for (i, agent) in self.agents.iter_mut().enumerate() {
            let rng = rngs.get_mut(AgentId(i as u32));
            machine::step(agent, grid, planner, target, dt, rng);
        }
    }
}
