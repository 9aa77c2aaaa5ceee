//! The mutable per-agent record.

use pursuit_core::{AgentRng, TileId, Vec2};
use pursuit_grid::TileGrid;
use pursuit_plan::{random_walkable_tile, TilePath};

use crate::{AgentConfig, AgentError, AgentMode, AgentResult};

/// One pursuit agent: configuration plus all mutable state the FSM drives.
///
/// Created once at scene setup and re-initialized by [`reset`](Agent::reset);
/// never destroyed mid-run.  Tiles are held as `TileId` indices into the
/// grid's arena, so a regenerated map cannot leave dangling references —
/// only stale ids, which the mandatory post-regeneration reset replaces.
///
/// # Invariants (after the first reset)
///
/// - `current_tile` is always walkable.
/// - While `mode == Moving`, `target_tile` is `Some` and walkable.
/// - `path` never exceeds `config.path_cap` tiles.
#[derive(Debug)]
pub struct Agent {
    /// Static configuration, fixed at setup.
    pub config: AgentConfig,

    /// Current FSM state.
    pub mode: AgentMode,

    /// The walkable tile the agent last arrived at (or spawned on).
    pub current_tile: TileId,

    /// The committed movement destination while `Moving`.
    pub target_tile: Option<TileId>,

    /// Pending tiles to traverse after `target_tile`.
    pub path: TilePath,

    /// World-space position, integrated every `Moving` tick.
    pub position: Vec2,

    /// World-space velocity from the last `Moving` tick.
    pub velocity: Vec2,

    /// `true` while the current `Moving` leg was entered from `Chase`.
    /// Distinguishes "walk the queue then idle" from "replan on every
    /// arrival while the quarry is in sight".
    pub pursuing: bool,
}

impl Agent {
    /// Build an agent in the `Uninitialized` entry state.
    ///
    /// The agent is not on the grid until the first [`reset`](Agent::reset).
    pub fn new(config: AgentConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            mode: AgentMode::Uninitialized,
            current_tile: TileId::INVALID,
            target_tile: None,
            path: TilePath::empty(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            pursuing: false,
        })
    }

    /// Re-initialize: clear the pending path, return to `Default`, resample
    /// the current tile uniformly from the walkable set, and snap the
    /// position onto it.
    ///
    /// Callable any number of times; each call leaves the agent in the same
    /// shape (mode `Default`, empty path, position equal to the freshly
    /// sampled tile's center).  Fails with [`AgentError::Plan`] on a map
    /// with zero walkable tiles.
    pub fn reset(&mut self, grid: &TileGrid, rng: &mut AgentRng) -> AgentResult<()> {
        let spawn = random_walkable_tile(grid, rng).map_err(AgentError::Plan)?;
        self.path.clear();
        self.mode = AgentMode::Default;
        self.current_tile = spawn;
        self.target_tile = None;
        self.position = grid.pos(spawn);
        self.velocity = Vec2::ZERO;
        self.pursuing = false;
        Ok(())
    }

    /// Drop any committed target and pursuit flag and go idle.  The pending
    /// path is *kept* — `Default` consumes it next tick if one remains.
    pub(crate) fn to_default(&mut self) {
        self.mode = AgentMode::Default;
        self.target_tile = None;
        self.pursuing = false;
    }

    /// Distance from the agent to the tracked target's position.
    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.position.distance(point)
    }
}
