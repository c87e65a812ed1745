//! # Gate Error Types
//!
//! Structured error handling for the gate using thiserror instead of
//! `Box<dyn Error>` patterns. Collaborator failures carry which collaborator
//! failed and why; the orchestrator folds them into the run's terminal
//! verdict rather than retrying them.

use thiserror::Error;

use crate::state_machine::TransitionError;

/// Failure of a black-box collaborator invocation.
///
/// The orchestrator treats all three variants identically: the step failed
/// and the run routes to its error terminal. Retries, if any, are the
/// collaborator's own responsibility.
#[derive(Error, Debug, Clone)]
pub enum CollaboratorError {
    #[error("Transport failure invoking {collaborator}: {message}")]
    Transport {
        collaborator: String,
        message: String,
    },

    #[error("{collaborator} reported a failed invocation: {message}")]
    Invocation {
        collaborator: String,
        message: String,
    },

    #[error("Malformed response from {collaborator}: {message}")]
    MalformedResponse {
        collaborator: String,
        message: String,
    },
}

impl CollaboratorError {
    /// Create a transport failure for the named collaborator
    pub fn transport(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Create an invocation failure for the named collaborator
    pub fn invocation(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-response failure for the named collaborator
    pub fn malformed(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }
}

/// Top-level gate error type
#[derive(Error, Debug)]
pub enum GateError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

pub type Result<T> = std::result::Result<T, GateError>;
