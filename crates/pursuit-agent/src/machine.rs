//! The shared agent state machine — one transition per simulation tick.
//!
//! # Transition map
//!
//! ```text
//! Uninitialized/Rest/Static ─────────────────────────▶ Default
//! Default ── policy gates on vision ─────────────────▶ Chase
//! Default ── path available, front tile dequeued ────▶ Moving
//! Moving  ── arrived, not pursuing ──────────────────▶ Default
//! Moving  ── arrived, pursuing, replan non-empty ────▶ Moving   (new target)
//! Moving  ── arrived, pursuing, replan empty/blind ──▶ Default
//! Chase   ── pursuit plan yields ≥ 1 tile ───────────▶ Moving
//! Chase   ── out of vision / no plan / no dest ──────▶ Default
//! ```
//!
//! The machine is identical for every behavior variant; all per-variant
//! logic is behind [`BehaviorPolicy`][crate::BehaviorPolicy].
//!
//! Planning failure is handled locally: an empty path keeps or returns the
//! agent to `Default`, where it retries next tick.  Nothing in here errors.

use pursuit_core::AgentRng;
use pursuit_grid::TileGrid;
use pursuit_plan::Planner;

use crate::{Agent, AgentMode, TargetView, ARRIVAL_EPSILON};

/// Advance `agent` by one tick.
///
/// `dt_secs` is the tick duration; movement covers `speed * dt_secs` world
/// units.  The caller (the driver) is responsible for the global guards —
/// map lifecycle and target goal/death — before invoking this.
pub fn step<P: Planner>(
    agent: &mut Agent,
    grid: &TileGrid,
    planner: &P,
    target: &TargetView,
    dt_secs: f32,
    rng: &mut AgentRng,
) {
    match agent.mode {
        AgentMode::Default => step_default(agent, grid, planner, target, rng),
        AgentMode::Moving => step_moving(agent, grid, planner, target, dt_secs, rng),
        AgentMode::Chase => step_chase(agent, grid, planner, target, rng),
        // Entry and dormant states route back to Default next tick.
        AgentMode::Uninitialized | AgentMode::Rest | AgentMode::Static => {
            agent.mode = AgentMode::Default;
        }
    }
}

// ── Default ───────────────────────────────────────────────────────────────────

fn step_default<P: Planner>(
    agent: &mut Agent,
    grid: &TileGrid,
    planner: &P,
    target: &TargetView,
    rng: &mut AgentRng,
) {
    let policy = agent.config.behavior.policy();

    if policy.wants_chase(agent, target) {
        agent.mode = AgentMode::Chase;
        return;
    }

    if agent.path.is_empty() {
        let request = policy.default_transition(agent, target, grid, rng);
        agent.path = planner.plan(grid, agent.current_tile, &request, rng);
    }

    // Commit the front tile, if any; otherwise stay idle and retry next tick.
    if let Some(next) = agent.path.pop_front() {
        debug_assert!(grid.is_walkable(next));
        agent.target_tile = Some(next);
        agent.mode = AgentMode::Moving;
    }
}

// ── Moving ────────────────────────────────────────────────────────────────────

fn step_moving<P: Planner>(
    agent: &mut Agent,
    grid: &TileGrid,
    planner: &P,
    target: &TargetView,
    dt_secs: f32,
    rng: &mut AgentRng,
) {
    // A null target must never be dereferenced for movement.
    let Some(dest_tile) = agent.target_tile else {
        agent.to_default();
        return;
    };

    // Euler step toward the target tile.  Overshoot is possible and is
    // tolerated by the epsilon arrival test, not corrected.
    let dest = grid.pos(dest_tile);
    agent.velocity = (dest - agent.position).normalized() * agent.config.speed;
    agent.position += agent.velocity * dt_secs;

    if agent.position.distance(dest) > ARRIVAL_EPSILON {
        return;
    }

    // Arrived: snap onto the tile center and commit it as current before
    // anything is dequeued.
    agent.position = dest;
    agent.current_tile = dest_tile;
    agent.velocity = pursuit_core::Vec2::ZERO;

    if !agent.pursuing {
        // Plain traversal: idle out; any remaining queue is consumed from
        // Default next tick.
        agent.to_default();
        return;
    }

    let policy = agent.config.behavior.policy();
    if !policy.wants_chase(agent, target) {
        // Quarry slipped out of sight mid-leg.
        agent.to_default();
        return;
    }

    // Still in sight: replan immediately and keep moving without passing
    // through Default.
    agent.path.clear();
    let request = policy.chase_transition(agent, target, grid, rng);
    if !request.is_idle() {
        agent.path = planner.plan(grid, agent.current_tile, &request, rng);
    }
    match agent.path.pop_front() {
        Some(next) => {
            debug_assert!(grid.is_walkable(next));
            agent.target_tile = Some(next);
        }
        None => agent.to_default(),
    }
}

// ── Chase ─────────────────────────────────────────────────────────────────────

fn step_chase<P: Planner>(
    agent: &mut Agent,
    grid: &TileGrid,
    planner: &P,
    target: &TargetView,
    rng: &mut AgentRng,
) {
    let policy = agent.config.behavior.policy();

    if !policy.wants_chase(agent, target) {
        agent.to_default();
        return;
    }

    let request = policy.chase_transition(agent, target, grid, rng);
    if request.is_idle() {
        // No valid interception destination anywhere near the quarry.
        agent.to_default();
        return;
    }

    agent.path.clear();
    agent.path = planner.plan(grid, agent.current_tile, &request, rng);
    match agent.path.pop_front() {
        Some(next) => {
            debug_assert!(grid.is_walkable(next));
            agent.target_tile = Some(next);
            agent.pursuing = true;
            agent.mode = AgentMode::Moving;
        }
        None => agent.to_default(),
    }
}
