//! Planner trait and the two stock implementations.
//!
//! # Pluggability
//!
//! The agent state machine calls planning via the [`Planner`] trait, so the
//! driver can swap implementations without touching the FSM.  Two are
//! provided:
//!
//! - [`RandomWalkPlanner`] treats every request, including `Toward`, as a
//!   bounded local random walk.  The "pursuit" it produces is therefore an
//!   approximation: the agent re-rolls near its own position rather than
//!   pathing at the quarry.
//! - [`ShortestPathPlanner`] is the substitutable true-pursuit planner: a
//!   `Toward` request runs a breadth-first search (all steps cost one tile,
//!   so BFS is Dijkstra with a trivial priority queue) and truncates the
//!   result to the cap.
//!
//! # Failure model
//!
//! Both planners return an **empty** [`TilePath`] when no path can be
//! produced; see the crate docs.

use std::collections::VecDeque;

use pursuit_core::{AgentRng, TileId};
use pursuit_grid::TileGrid;

use crate::{PlanError, PlanRequest, PlanResult, TilePath};

/// Rejection-sampling attempts before falling back to an exact uniform
/// draw over the walkable set.  On any map that is ≥ 2 % walkable the
/// fallback is effectively never taken.
const SAMPLE_ATTEMPTS: usize = 64;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable path planner.
///
/// Implementations must be pure over `(grid, from, request)` apart from
/// consuming randomness from the supplied `rng` — no side effects, so the
/// same seed replays the same plans.
pub trait Planner: Send + Sync {
    /// Produce a path satisfying `request`, starting from (but excluding)
    /// `from`.  An empty path means "no plan possible right now" and is not
    /// an error.
    fn plan(
        &self,
        grid: &TileGrid,
        from: TileId,
        request: &PlanRequest,
        rng: &mut AgentRng,
    ) -> TilePath;
}

// ── RandomWalkPlanner ─────────────────────────────────────────────────────────

/// The stock roaming planner: all non-idle requests produce a bounded
/// random walk.
///
/// For `Toward` requests the destination is ignored — pursuit degrades to
/// a local re-roll near the agent's own tile.  Swap in
/// [`ShortestPathPlanner`] for real interception.
pub struct RandomWalkPlanner;

impl Planner for RandomWalkPlanner {
    fn plan(
        &self,
        grid: &TileGrid,
        from: TileId,
        request: &PlanRequest,
        rng: &mut AgentRng,
    ) -> TilePath {
        match *request {
            PlanRequest::Idle => TilePath::empty(),
            PlanRequest::RandomWalk { max_len } | PlanRequest::Toward { max_len, .. } => {
                random_walk(grid, from, max_len, rng)
            }
        }
    }
}

// ── ShortestPathPlanner ───────────────────────────────────────────────────────

/// Breadth-first shortest-path planner over the uniform-cost tile grid.
///
/// `RandomWalk` requests still roam (there is nothing to search for);
/// `Toward` requests path directly at the destination, truncated to the
/// cap.  Tie-breaking is deterministic: neighbors expand in the grid's
/// fixed (-x, +x, -y, +y) order.
pub struct ShortestPathPlanner;

impl Planner for ShortestPathPlanner {
    fn plan(
        &self,
        grid: &TileGrid,
        from: TileId,
        request: &PlanRequest,
        rng: &mut AgentRng,
    ) -> TilePath {
        match *request {
            PlanRequest::Idle => TilePath::empty(),
            PlanRequest::RandomWalk { max_len } => random_walk(grid, from, max_len, rng),
            PlanRequest::Toward { dest, max_len } => bfs(grid, from, dest, max_len),
        }
    }
}

// ── Random walk ───────────────────────────────────────────────────────────────

/// A uniformly random walk of at most `max_len` steps over walkable tiles,
/// starting (but not including) `start`.
///
/// Each step picks uniformly among the current tile's walkable neighbors;
/// revisits are allowed.  Terminates early at a tile with no walkable
/// neighbor, and returns an empty path when `start` itself has none —
/// filtering neighbors *before* drawing means a fully enclosed tile costs
/// one scan of four cells, never an unbounded retry loop.
pub fn random_walk(grid: &TileGrid, start: TileId, max_len: usize, rng: &mut AgentRng) -> TilePath {
    let mut path = TilePath::empty();
    let mut current = start;
    for _ in 0..max_len {
        let neighbors: Vec<TileId> = grid.walkable_neighbors(current).collect();
        match rng.choose(&neighbors) {
            Some(&next) => {
                path.push_back(next);
                current = next;
            }
            None => break,
        }
    }
    path
}

// ── Random walkable tile ──────────────────────────────────────────────────────

/// Draw a uniformly random **walkable** tile.
///
/// Rejection-samples tile indices a bounded number of times, then falls
/// back to an exact uniform draw over the walkable set.  Fails with
/// [`PlanError::NoWalkableTiles`] on a degenerate map instead of spinning.
pub fn random_walkable_tile(grid: &TileGrid, rng: &mut AgentRng) -> PlanResult<TileId> {
    if grid.walkable_count() == 0 {
        return Err(PlanError::NoWalkableTiles);
    }

    for _ in 0..SAMPLE_ATTEMPTS {
        let candidate = TileId(rng.gen_range(0..grid.tile_count() as u32));
        if grid.is_walkable(candidate) {
            return Ok(candidate);
        }
    }

    // Sparse map: draw an index into the walkable set directly.
    let k = rng.gen_range(0..grid.walkable_count());
    grid.walkable_tiles()
        .nth(k)
        .ok_or(PlanError::NoWalkableTiles)
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Shortest path from `from` to `to` over walkable tiles, excluding `from`,
/// truncated to `max_len` tiles.  Empty when unreachable, when either
/// endpoint is unwalkable, or when `from == to`.
fn bfs(grid: &TileGrid, from: TileId, to: TileId, max_len: usize) -> TilePath {
    if from == to || !grid.is_walkable(to) || max_len == 0 {
        return TilePath::empty();
    }

    // prev[v] = tile we reached v from; INVALID for unreached tiles.
    let mut prev = vec![TileId::INVALID; grid.tile_count()];
    let mut frontier = VecDeque::new();
    prev[from.index()] = from;
    frontier.push_back(from);

    while let Some(tile) = frontier.pop_front() {
        if tile == to {
            break;
        }
        for next in grid.walkable_neighbors(tile) {
            if prev[next.index()] == TileId::INVALID {
                prev[next.index()] = tile;
                frontier.push_back(next);
            }
        }
    }

    if prev[to.index()] == TileId::INVALID {
        return TilePath::empty(); // unreachable
    }

    // Trace back to the start, then reverse into traversal order.
    let mut tiles = Vec::new();
    let mut cur = to;
    while cur != from {
        tiles.push(cur);
        cur = prev[cur.index()];
    }
    tiles.reverse();
    tiles.truncate(max_len);
    TilePath::from_tiles(tiles)
}
