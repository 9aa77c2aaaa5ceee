//! Plan requests — what a behavior policy asks the planner for.

use pursuit_core::TileId;

/// A planning request produced by a behavior policy and consumed by a
/// [`Planner`][crate::Planner].
///
/// The policy decides *where* the agent should head; the planner decides
/// *how* to get there.  Keeping the two behind this enum is what lets the
/// same state machine drive all behavior variants, and lets the local
/// random-walk pursuit approximation be swapped for true shortest-path
/// pursuit by changing only the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanRequest {
    /// No plan wanted this tick; the agent falls back to its default state.
    Idle,

    /// Roam: a bounded random walk over walkable tiles from the agent's
    /// current tile.
    RandomWalk {
        /// Maximum number of tiles in the resulting path.
        max_len: usize,
    },

    /// Head toward `dest` (already snapped to a walkable tile by the
    /// policy), with the path capped at `max_len` tiles.
    Toward { dest: TileId, max_len: usize },
}

impl PlanRequest {
    /// `true` for [`PlanRequest::Idle`].
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, PlanRequest::Idle)
    }
}
