//! Behavior policies — the per-variant logic the shared FSM is
//! parameterized by.
//!
//! A policy answers exactly three questions:
//!
//! 1. Should `Default` hand over to `Chase` this tick? ([`wants_chase`])
//! 2. What should be planned when idling with an empty path?
//!    ([`default_transition`])
//! 3. What should be planned while pursuing? ([`chase_transition`])
//!
//! Everything else — dequeuing, movement, arrival, fallbacks — lives in
//! [`machine::step`][crate::machine::step] and is identical for all
//! variants.
//!
//! [`wants_chase`]: BehaviorPolicy::wants_chase
//! [`default_transition`]: BehaviorPolicy::default_transition
//! [`chase_transition`]: BehaviorPolicy::chase_transition

use std::fmt;

use pursuit_core::{AgentRng, Vec2};
use pursuit_grid::TileGrid;
use pursuit_plan::PlanRequest;

use crate::{Agent, TargetView};

/// Lateral interception offset, in tiles per axis ([-2, 2] inclusive) —
/// "a couple of tiles away" from the quarry rather than directly on it.
const INTERCEPT_OFFSET_TILES: std::ops::Range<i32> = -2..3;

// ── BehaviorPolicy trait ──────────────────────────────────────────────────────

/// Pluggable per-variant behavior.
///
/// Implementations must be stateless (`Send + Sync`, typically unit
/// structs): everything that varies per agent lives in [`Agent`], and all
/// randomness flows through the supplied `rng`.
pub trait BehaviorPolicy: Send + Sync {
    /// Plan request issued from `Default` when the path queue is empty.
    fn default_transition(
        &self,
        agent: &Agent,
        target: &TargetView,
        grid: &TileGrid,
        rng: &mut AgentRng,
    ) -> PlanRequest;

    /// `true` when `Default` should hand control to `Chase` this tick.
    ///
    /// Default: never (non-chasing variants).
    fn wants_chase(&self, agent: &Agent, target: &TargetView) -> bool {
        let _ = (agent, target);
        false
    }

    /// Plan request issued while pursuing, both on entering `Chase` and on
    /// every arrival of a pursuit leg.  `Idle` means "no valid pursuit
    /// destination" and sends the agent back to `Default`.
    ///
    /// Default: `Idle` (non-chasing variants are never asked, but the
    /// fallback is safe if they are).
    fn chase_transition(
        &self,
        agent: &Agent,
        target: &TargetView,
        grid: &TileGrid,
        rng: &mut AgentRng,
    ) -> PlanRequest {
        let _ = (agent, target, grid, rng);
        PlanRequest::Idle
    }
}

/// Shared vision gate: target within `vision_radius` of the agent.
#[inline]
fn within_vision(agent: &Agent, target: &TargetView) -> bool {
    agent.distance_to(target.position) <= agent.config.vision_radius
}

// ── Wander ────────────────────────────────────────────────────────────────────

/// Keeps walking in random directions; ignores the tracked target entirely.
pub struct Wander;

impl BehaviorPolicy for Wander {
    fn default_transition(
        &self,
        agent: &Agent,
        _target: &TargetView,
        _grid: &TileGrid,
        _rng: &mut AgentRng,
    ) -> PlanRequest {
        PlanRequest::RandomWalk {
            max_len: agent.config.path_cap,
        }
    }
}

// ── RandomChase ───────────────────────────────────────────────────────────────

/// Vision-gated chase that heads for the target's current tile.
///
/// Under the stock [`RandomWalkPlanner`][pursuit_plan::RandomWalkPlanner]
/// the `Toward` request degrades to a local random re-roll, which only
/// approximates pursuit.  Pair this policy with
/// [`ShortestPathPlanner`][pursuit_plan::ShortestPathPlanner] to get true
/// pursuit without touching the policy.
pub struct RandomChase;

impl BehaviorPolicy for RandomChase {
    fn default_transition(
        &self,
        agent: &Agent,
        _target: &TargetView,
        _grid: &TileGrid,
        _rng: &mut AgentRng,
    ) -> PlanRequest {
        PlanRequest::RandomWalk {
            max_len: agent.config.path_cap,
        }
    }

    fn wants_chase(&self, agent: &Agent, target: &TargetView) -> bool {
        within_vision(agent, target)
    }

    fn chase_transition(
        &self,
        agent: &Agent,
        target: &TargetView,
        grid: &TileGrid,
        _rng: &mut AgentRng,
    ) -> PlanRequest {
        // The quarry's tile may be stale by the time the agent gets there;
        // the per-arrival replan while in vision compensates.
        let dest = if target.tile.index() < grid.tile_count() {
            target.tile
        } else {
            match grid.nearest_walkable(target.position) {
                Some(t) => t,
                None => return PlanRequest::Idle,
            }
        };
        PlanRequest::Toward {
            dest,
            max_len: agent.config.path_cap,
        }
    }
}

// ── InterceptChase ────────────────────────────────────────────────────────────

/// Vision-gated chase that aims a couple of tiles *around* the target: a
/// bounded random lateral offset is added to the quarry's position and
/// snapped to the nearest walkable tile.
pub struct InterceptChase;

impl BehaviorPolicy for InterceptChase {
    fn default_transition(
        &self,
        agent: &Agent,
        _target: &TargetView,
        _grid: &TileGrid,
        _rng: &mut AgentRng,
    ) -> PlanRequest {
        PlanRequest::RandomWalk {
            max_len: agent.config.path_cap,
        }
    }

    fn wants_chase(&self, agent: &Agent, target: &TargetView) -> bool {
        within_vision(agent, target)
    }

    fn chase_transition(
        &self,
        agent: &Agent,
        target: &TargetView,
        grid: &TileGrid,
        rng: &mut AgentRng,
    ) -> PlanRequest {
        let ox = rng.gen_range(INTERCEPT_OFFSET_TILES) as f32 * grid.tile_size();
        let oy = rng.gen_range(INTERCEPT_OFFSET_TILES) as f32 * grid.tile_size();
        let desired = target.position + Vec2::new(ox, oy);

        match grid.nearest_walkable(desired) {
            Some(dest) => PlanRequest::Toward {
                dest,
                max_len: agent.config.path_cap,
            },
            // No walkable tile anywhere: fall back to Default.
            None => PlanRequest::Idle,
        }
    }
}

// ── Behavior variant enum ─────────────────────────────────────────────────────

/// The behavior variant an agent is configured with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Pure random roaming; never chases.
    #[default]
    Wander,
    /// Vision-gated chase toward the target's tile.
    RandomChase,
    /// Vision-gated chase toward a lateral offset near the target.
    InterceptChase,
}

impl Behavior {
    /// The policy implementing this variant.  Policies are stateless unit
    /// structs, so a `'static` reference suffices — no boxing per agent.
    pub fn policy(self) -> &'static dyn BehaviorPolicy {
        match self {
            Behavior::Wander => &Wander,
            Behavior::RandomChase => &RandomChase,
            Behavior::InterceptChase => &InterceptChase,
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Behavior::Wander => "wander",
            Behavior::RandomChase => "random-chase",
            Behavior::InterceptChase => "intercept-chase",
        };
        f.write_str(s)
    }
}
