//! `pursuit-sim` — the tick-loop driver for the pursuit agents.
//!
//! # Tick anatomy
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Guard  — map not Ready, or target has won or died → skip agents.
//!   ② Step   — machine::step once per agent, in AgentId order,
//!              synchronous and single-threaded.
//!   ③ Hooks  — observer callbacks at tick boundaries.
//! ```
//!
//! Each agent owns its mutable state exclusively and the grid is immutable
//! while agents run, so no locking exists anywhere.  Map regeneration goes
//! through [`Sim::regenerate`], which swaps the grid and resets every agent
//! before ticking resumes — the `MapPhase` guard covers the external window
//! in between.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pursuit_agent::{AgentConfig, Behavior, TargetView};
//! use pursuit_core::SimConfig;
//! use pursuit_grid::TileGridBuilder;
//! use pursuit_plan::RandomWalkPlanner;
//! use pursuit_sim::{NoopObserver, SimBuilder};
//!
//! let grid = TileGridBuilder::new(16, 16).build();
//! let mut sim = SimBuilder::new(SimConfig::default(), grid, RandomWalkPlanner)
//!     .agent(AgentConfig::with_behavior(Behavior::Wander))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
