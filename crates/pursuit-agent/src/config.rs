//! Per-agent configuration.

use crate::{AgentError, Behavior};

/// Distance below which a target tile counts as reached, in world units.
///
/// Movement is Euler-integrated with no overshoot correction, so the
/// epsilon — not exact equality — is the arrival test.  Drivers should keep
/// `speed * tick_duration_secs` below this value or agents may orbit a
/// target they can never land on.
pub const ARRIVAL_EPSILON: f32 = 0.05;

/// Static configuration for one agent, fixed at scene setup.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Movement speed in world units per second.  Must be > 0.
    pub speed: f32,

    /// Maximum distance at which the tracked target is detected.
    /// Must be ≥ 0; zero means effectively blind.
    pub vision_radius: f32,

    /// Maximum tiles per planned path.  Must be > 0.
    pub path_cap: usize,

    /// Which behavior variant drives this agent's transitions.
    pub behavior: Behavior,
}

impl AgentConfig {
    /// Convenience constructor using the stock defaults for everything but
    /// the behavior variant.
    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    /// Check the numeric constraints; called once when the agent is built.
    pub fn validate(&self) -> Result<(), AgentError> {
        if !(self.speed > 0.0) {
            return Err(AgentError::Config(format!(
                "speed must be > 0, got {}",
                self.speed
            )));
        }
        if !(self.vision_radius >= 0.0) {
            return Err(AgentError::Config(format!(
                "vision radius must be >= 0, got {}",
                self.vision_radius
            )));
        }
        if self.path_cap == 0 {
            return Err(AgentError::Config("path cap must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            vision_radius: 5.0,
            path_cap: 20,
            behavior: Behavior::Wander,
        }
    }
}
