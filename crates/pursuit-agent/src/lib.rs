//! `pursuit-agent` — the per-agent finite-state controller.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`mode`]    | `AgentMode` — the FSM's discrete states                       |
//! | [`config`]  | `AgentConfig` (speed, vision, path cap, behavior variant)     |
//! | [`target`]  | `TargetView` — snapshot of the tracked target                 |
//! | [`agent`]   | `Agent` — mutable per-agent record + reset                    |
//! | [`policy`]  | `BehaviorPolicy` trait, `Behavior` variant enum, 3 policies   |
//! | [`machine`] | `step` — one FSM transition per tick                          |
//! | [`rngs`]    | `AgentRngs` — per-agent RNG table                             |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                |
//!
//! # Design notes
//!
//! A naive rendition of three behavior variants would be three
//! near-identical switch blocks.  Here a single state machine
//! ([`machine::step`]) is parameterized by a small [`BehaviorPolicy`]
//! interface: the policy decides whether to chase and what to ask the
//! planner for; the machine owns every transition.  Per-variant logic
//! shrinks to a handful of lines each.

pub mod agent;
pub mod config;
pub mod error;
pub mod machine;
pub mod mode;
pub mod policy;
pub mod rngs;
pub mod target;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use config::{AgentConfig, ARRIVAL_EPSILON};
pub use error::{AgentError, AgentResult};
pub use machine::step;
pub use mode::AgentMode;
pub use policy::{Behavior, BehaviorPolicy, InterceptChase, RandomChase, Wander};
pub use rngs::AgentRngs;
pub use target::TargetView;
