//! Planning-subsystem error type.

use thiserror::Error;

/// Errors produced by `pursuit-plan`.
///
/// Note the deliberate asymmetry with empty paths: "no path found" is a
/// normal result (an empty [`TilePath`][crate::TilePath]), while a map with
/// zero walkable tiles is unrecoverable and surfaces here.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("map has no walkable tiles")]
    NoWalkableTiles,
}

pub type PlanResult<T> = Result<T, PlanError>;
