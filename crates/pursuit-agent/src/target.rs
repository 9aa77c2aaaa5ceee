//! Snapshot of the tracked target (the player).

use pursuit_core::{TileId, Vec2};

/// Read-only view of the tracked target, refreshed by the driver each tick.
///
/// The target's own movement, win state, and death handling live outside
/// this core; agents only ever read this snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetView {
    /// Current world position.
    pub position: Vec2,

    /// Tile the target currently occupies, or `TileId::INVALID` if it is
    /// off-grid.
    pub tile: TileId,

    /// `true` once the target has reached its goal; suspends agent ticking.
    pub goal_reached: bool,

    /// `true` once the target is dead; suspends agent ticking.
    pub is_dead: bool,
}

impl TargetView {
    /// A live target at `position` on `tile`.
    pub fn at(position: Vec2, tile: TileId) -> Self {
        Self {
            position,
            tile,
            goal_reached: false,
            is_dead: false,
        }
    }

    /// `true` while agents should still react to the target.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.goal_reached && !self.is_dead
    }
}
