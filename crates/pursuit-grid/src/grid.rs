//! Tile grid representation and builder.
//!
//! # Data layout
//!
//! Tiles live in parallel `Vec`s indexed by `TileId`, with
//! `TileId = y * width + x`.  Adjacency is implied by the grid layout, so
//! no edge list is stored: a tile's neighbors are the four orthogonally
//! adjacent cells that exist.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps world positions to the nearest **walkable**
//! tile.  Only walkable tiles are loaded into the tree, so a nearest-
//! neighbor query answers "closest walkable tile to this point" directly —
//! the query the interception policy needs to turn a desired world point
//! into a valid discrete destination.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pursuit_core::{TileId, Vec2};

use crate::{GridError, GridResult};

// ── R-tree tile entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a tile center with its id.
#[derive(Clone)]
struct TileEntry {
    point: [f32; 2],
    id: TileId,
}

impl RTreeObject for TileEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TileEntry {
    /// Squared Euclidean distance in world space.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A rectangular grid of tiles plus a spatial index over its walkable cells.
///
/// Immutable after construction.  Do not construct directly; use
/// [`TileGridBuilder`].
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: f32,
    origin: Vec2,

    /// World-space center of each tile.  Indexed by `TileId`.
    positions: Vec<Vec2>,

    /// Walkability flag of each tile — set by map generation, read-only here.
    walkable: Vec<bool>,

    /// Cached count of `true` entries in `walkable`.
    walkable_count: usize,

    /// R-tree over walkable tile centers only.
    spatial_idx: RTree<TileEntry>,
}

impl TileGrid {
    // ── Grid dimensions ───────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn tile_count(&self) -> usize {
        self.positions.len()
    }

    pub fn walkable_count(&self) -> usize {
        self.walkable_count
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // ── Per-tile queries ──────────────────────────────────────────────────

    /// World-space center of `tile`.
    ///
    /// # Panics
    /// Panics if `tile` is out of range (including `TileId::INVALID`) —
    /// holding an id for a different grid is a programming error.
    #[inline]
    pub fn pos(&self, tile: TileId) -> Vec2 {
        self.positions[tile.index()]
    }

    /// Walkability flag of `tile`.
    #[inline]
    pub fn is_walkable(&self, tile: TileId) -> bool {
        self.walkable[tile.index()]
    }

    /// `TileId` at grid coordinate `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn id_at(&self, x: u32, y: u32) -> Option<TileId> {
        if x < self.width && y < self.height {
            Some(TileId(y * self.width + x))
        } else {
            None
        }
    }

    /// Grid coordinate of `tile`.
    #[inline]
    pub fn coords(&self, tile: TileId) -> (u32, u32) {
        let i = tile.0;
        (i % self.width, i / self.width)
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// The up-to-four orthogonal neighbors of `tile`, in fixed
    /// (-x, +x, -y, +y) order so traversals are deterministic.
    pub fn neighbors(&self, tile: TileId) -> impl Iterator<Item = TileId> + '_ {
        let (x, y) = self.coords(tile);
        [
            x.checked_sub(1).and_then(|nx| self.id_at(nx, y)),
            self.id_at(x + 1, y),
            y.checked_sub(1).and_then(|ny| self.id_at(x, ny)),
            self.id_at(x, y + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Orthogonal neighbors of `tile` that are walkable.
    pub fn walkable_neighbors(&self, tile: TileId) -> impl Iterator<Item = TileId> + '_ {
        self.neighbors(tile).filter(|&n| self.is_walkable(n))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The tile whose cell contains the world position `pos`, or `None` if
    /// `pos` lies outside the grid.
    pub fn tile_at(&self, pos: Vec2) -> Option<TileId> {
        let fx = (pos.x - self.origin.x) / self.tile_size;
        let fy = (pos.y - self.origin.y) / self.tile_size;
        let x = fx.round();
        let y = fy.round();
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.id_at(x as u32, y as u32)
    }

    /// The **walkable** tile whose center minimizes Euclidean distance to
    /// `pos`.  Returns `None` only if the grid has no walkable tile at all.
    pub fn nearest_walkable(&self, pos: Vec2) -> Option<TileId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Iterator over all `TileId`s in ascending index order.
    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.positions.len() as u32).map(TileId)
    }

    /// Iterator over all walkable `TileId`s in ascending index order.
    pub fn walkable_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tile_ids().filter(|&t| self.is_walkable(t))
    }
}

// ── TileGridBuilder ───────────────────────────────────────────────────────────

/// Construct a [`TileGrid`] incrementally, then call [`build`](Self::build).
///
/// All tiles start walkable; map generation blocks cells via
/// [`set_walkable`](Self::set_walkable).  `build()` computes world positions
/// and bulk-loads the R-tree over the walkable set.
///
/// # Example
///
/// ```
/// use pursuit_grid::TileGridBuilder;
///
/// let grid = TileGridBuilder::new(3, 2)
///     .set_walkable(1, 0, false)
///     .unwrap()
///     .build();
/// assert_eq!(grid.tile_count(), 6);
/// assert_eq!(grid.walkable_count(), 5);
/// ```
pub struct TileGridBuilder {
    width: u32,
    height: u32,
    tile_size: f32,
    origin: Vec2,
    walkable: Vec<bool>,
}

impl TileGridBuilder {
    /// Start a `width × height` grid with every tile walkable.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tile_size: 1.0,
            origin: Vec2::ZERO,
            walkable: vec![true; (width * height) as usize],
        }
    }

    /// Parse an ASCII map: `.` walkable, any other character blocked.
    /// Row 0 is `y = 0`.  All rows must have equal width.
    ///
    /// Intended for tests and demos; real maps come from the external map
    /// generator via [`set_walkable`](Self::set_walkable).
    pub fn from_ascii(rows: &[&str]) -> GridResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut builder = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() as u32 != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    got: row.len(),
                    expected: width as usize,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let idx = y * width as usize + x;
                builder.walkable[idx] = ch == '.';
            }
        }
        Ok(builder)
    }

    /// World-units per tile (default 1.0).
    pub fn tile_size(mut self, size: f32) -> Self {
        self.tile_size = size;
        self
    }

    /// World position of tile (0, 0)'s center (default the origin).
    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Set the walkability flag of the tile at `(x, y)`.
    pub fn set_walkable(mut self, x: u32, y: u32, walkable: bool) -> GridResult<Self> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.walkable[(y * self.width + x) as usize] = walkable;
        Ok(self)
    }

    /// Consume the builder and produce a [`TileGrid`].
    ///
    /// Time complexity: O(N) for positions + O(W log W) for the R-tree bulk
    /// load, where N = tiles and W = walkable tiles.
    pub fn build(self) -> TileGrid {
        let count = self.walkable.len();
        let mut positions = Vec::with_capacity(count);
        for i in 0..count as u32 {
            let (x, y) = (i % self.width.max(1), i / self.width.max(1));
            positions.push(Vec2::new(
                self.origin.x + x as f32 * self.tile_size,
                self.origin.y + y as f32 * self.tile_size,
            ));
        }

        // Bulk-load the R-tree over the walkable set only.
        let entries: Vec<TileEntry> = self
            .walkable
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w)
            .map(|(i, _)| TileEntry {
                point: [positions[i].x, positions[i].y],
                id: TileId(i as u32),
            })
            .collect();
        let walkable_count = entries.len();
        let spatial_idx = RTree::bulk_load(entries);

        TileGrid {
            width: self.width,
            height: self.height,
            tile_size: self.tile_size,
            origin: self.origin,
            positions,
            walkable: self.walkable,
            walkable_count,
            spatial_idx,
        }
    }
}
