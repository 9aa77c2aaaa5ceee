//! `pursuit-core` — foundational types for the `rust_pursuit` agent framework.
//!
//! This crate is a dependency of every other `pursuit-*` crate.  It
//! intentionally has no `pursuit-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `TileId`, `AgentId`                               |
//! | [`vec2`]    | `Vec2`, Euclidean distance, normalization         |
//! | [`time`]    | `Tick`, `TickClock`, `SimConfig`                  |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)         |
//! | [`error`]   | `PursuitError`, `PursuitResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PursuitError, PursuitResult};
pub use ids::{AgentId, TileId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick, TickClock};
pub use vec2::Vec2;
