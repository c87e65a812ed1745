use serde::{Deserialize, Serialize};

use super::states::TestStatus;

/// Events that drive run state transitions.
///
/// Invocation states emit `StepSucceeded`/`StepFailed`, the wait state emits
/// `WaitElapsed`, and branch states emit `StatusExamined` carrying the run's
/// recorded status. Each branch decision examines the status exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RunEvent {
    /// The active step's collaborator call returned successfully
    StepSucceeded,
    /// The active step's collaborator call failed with a cause
    StepFailed(String),
    /// The timed suspension elapsed
    WaitElapsed,
    /// A branch state examined the recorded processing status
    StatusExamined(TestStatus),
}

impl RunEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::StepSucceeded => "step_succeeded",
            Self::StepFailed(_) => "step_failed",
            Self::WaitElapsed => "wait_elapsed",
            Self::StatusExamined(_) => "status_examined",
        }
    }

    /// Extract the failure cause if this is a step failure
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::StepFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// Extract the examined status if this is a branch event
    pub fn status(&self) -> Option<TestStatus> {
        match self {
            Self::StatusExamined(status) => Some(*status),
            _ => None,
        }
    }

    /// Create a step failure event from any displayable cause
    pub fn fail_with_cause(cause: impl Into<String>) -> Self {
        Self::StepFailed(cause.into())
    }
}
