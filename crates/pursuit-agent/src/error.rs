//! Agent-subsystem error type.

use thiserror::Error;

use pursuit_plan::PlanError;

/// Errors produced by `pursuit-agent`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent configuration error: {0}")]
    Config(String),

    #[error("planning error: {0}")]
    Plan(#[from] PlanError),
}

pub type AgentResult<T> = Result<T, AgentError>;
