//! `TilePath` — the ordered queue of tiles an agent intends to traverse.

use std::collections::VecDeque;

use pursuit_core::TileId;

/// An ordered, finite sequence of tile ids, consumed front-to-back.
///
/// Empty is a valid state meaning "no plan — re-plan at the next
/// opportunity".  Length is bounded at construction time by the requesting
/// policy's `max_len`, so planning cost per tick stays capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePath {
    tiles: VecDeque<TileId>,
}

impl TilePath {
    /// An empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path from tiles in traversal order.
    pub fn from_tiles<I: IntoIterator<Item = TileId>>(tiles: I) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Append a tile to the back of the queue.
    pub fn push_back(&mut self, tile: TileId) {
        self.tiles.push_back(tile);
    }

    /// Dequeue the next tile to walk to.
    pub fn pop_front(&mut self) -> Option<TileId> {
        self.tiles.pop_front()
    }

    /// Peek at the next tile without dequeuing it.
    pub fn front(&self) -> Option<TileId> {
        self.tiles.front().copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Drop all queued tiles.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Iterate the queued tiles front-to-back without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().copied()
    }
}

impl FromIterator<TileId> for TilePath {
    fn from_iter<I: IntoIterator<Item = TileId>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}
