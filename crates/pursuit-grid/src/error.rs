//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `pursuit-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("tile coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("grid has no walkable tiles")]
    NoWalkableTiles,

    #[error("ascii map rows have uneven widths (row {row} is {got}, expected {expected})")]
    RaggedRows { row: usize, got: usize, expected: usize },
}

pub type GridResult<T> = Result<T, GridError>;
