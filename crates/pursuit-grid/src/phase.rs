//! Map lifecycle signal.

use std::fmt;

/// The lifecycle state of the tile map, as reported by whatever external
/// system generates it.
///
/// The simulation driver checks this **first** every tick: while the map is
/// not [`Ready`], no agent is stepped, so no agent can observe a half-built
/// or torn-down grid.  This is the only guard needed — the core is
/// single-threaded, so regeneration can never overlap an agent step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapPhase {
    /// The map is being (re)generated; tile data is not yet valid.
    Building,
    /// The map is live and agents may walk it.
    #[default]
    Ready,
    /// The map has been torn down; all agent ticking is suspended and every
    /// held `TileId` is stale until the next regeneration + reset.
    Destroyed,
}

impl MapPhase {
    /// `true` when agents may be stepped against the grid.
    #[inline]
    pub fn is_ready(self) -> bool {
        self == MapPhase::Ready
    }
}

impl fmt::Display for MapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MapPhase::Building => "building",
            MapPhase::Ready => "ready",
            MapPhase::Destroyed => "destroyed",
        };
        f.write_str(s)
    }
}
