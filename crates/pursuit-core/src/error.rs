//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `PursuitError` via `From` impls, or keep them separate and wrap
//! `PursuitError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, TileId};

/// The top-level error type for `pursuit-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum PursuitError {
    #[error("tile {0} not found")]
    TileNotFound(TileId),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("map has no walkable tiles")]
    NoWalkableTiles,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pursuit-*` crates.
pub type PursuitResult<T> = Result<T, PursuitError>;
