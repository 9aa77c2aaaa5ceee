//! `pursuit-plan` — path planning over the tile grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`path`]    | `TilePath` — FIFO queue of tiles an agent will traverse      |
//! | [`request`] | `PlanRequest` — what kind of plan a behavior policy wants    |
//! | [`planner`] | `Planner` trait, `RandomWalkPlanner`, `ShortestPathPlanner`  |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                                 |
//!
//! # Failure model
//!
//! A planner that cannot produce a path returns an **empty** `TilePath`,
//! never an error — the agent simply stays in (or reverts to) its default
//! state and retries next tick.  The only hard error in this crate is
//! [`PlanError::NoWalkableTiles`]: sampling a random walkable spawn tile on
//! a fully blocked map cannot be recovered locally and must fail loudly
//! rather than loop forever.

pub mod error;
pub mod path;
pub mod planner;
pub mod request;


pub use error::{PlanError, PlanResult};
pub use path::TilePath;
pub use planner::{random_walk, random_walkable_tile, Planner, RandomWalkPlanner, ShortestPathPlanner};
pub use request::PlanRequest;
