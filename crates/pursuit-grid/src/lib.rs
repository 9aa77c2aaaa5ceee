//! `pursuit-grid` — the tile graph the pursuit agents move over.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`grid`]  | `TileGrid`, `TileGridBuilder` — arena of tiles + R-tree    |
//! | [`phase`] | `MapPhase` — map lifecycle signal (`Ready` / `Destroyed`)  |
//! | [`error`] | `GridError`, `GridResult<T>`                               |
//!
//! # Design notes
//!
//! The grid owns all tile data; everything else in the framework refers to
//! tiles through stable `TileId` indices.  Walkability is set once at build
//! time and is read-only afterwards — map regeneration means building a
//! *new* `TileGrid` and resetting the agents, never mutating a live one.

pub mod error;
pub mod grid;
pub mod phase;


pub use error::{GridError, GridResult};
pub use grid::{TileGrid, TileGridBuilder};
pub use phase::MapPhase;
