//! The agent FSM's discrete states.

use std::fmt;

/// The discrete behavior phase of an agent.
///
/// `Rest` and `Static` are representable but dormant: no current transition
/// enters them.  They are kept as forward-compatibility slots (a future
/// stamina or ambush mechanic would use them); the machine routes them back
/// to `Default` if one is ever observed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentMode {
    /// Entry state before the first reset; no tile has been sampled yet.
    #[default]
    Uninitialized,
    /// Idle / replanning: no committed movement target.
    Default,
    /// Interpolating toward a committed target tile.
    Moving,
    /// Pursuit mode (chase-capable behavior variants only).
    Chase,
    /// Dormant, reserved.
    Rest,
    /// Dormant, reserved.
    Static,
}

impl AgentMode {
    /// `true` for the states no transition currently enters.
    #[inline]
    pub fn is_dormant(self) -> bool {
        matches!(self, AgentMode::Rest | AgentMode::Static)
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentMode::Uninitialized => "uninitialized",
            AgentMode::Default => "default",
            AgentMode::Moving => "moving",
            AgentMode::Chase => "chase",
            AgentMode::Rest => "rest",
            AgentMode::Static => "static",
        };
        f.write_str(s)
    }
}
