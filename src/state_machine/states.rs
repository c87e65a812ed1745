use serde::{Deserialize, Serialize};
use std::fmt;

/// States of the integration-test run workflow.
///
/// A run walks this machine strictly sequentially: compensating cleanup
/// before and after the test body, a timed poll loop in the middle, and
/// exactly one terminal state per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Initial state: purge leftover artifacts from the destination
    CleanBefore,
    /// Publish synthetic test events into the ingestion channel
    Generate,
    /// Timed suspension before (re-)polling the destination
    Wait,
    /// Ask the status checker whether processing has completed
    Validate,
    /// Branch on the reported status (no side effect)
    Decide,
    /// Purge test artifacts regardless of the carried outcome
    CleanAfter,
    /// Re-examine the carried outcome after cleanup succeeded
    FinalBranch,
    /// Terminal: a collaborator invocation or cleanup failed
    ErrorTerminal,
    /// Terminal: output data did not match the expected result
    FailedTerminal,
    /// Terminal: output data matched the expected result
    SuccessTerminal,
}

impl RunState {
    /// Check if this is a terminal state (no outgoing transitions)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ErrorTerminal | Self::FailedTerminal | Self::SuccessTerminal
        )
    }

    /// Check if this state suspends the run on a timer
    pub fn is_suspension(&self) -> bool {
        matches!(self, Self::Wait)
    }

    /// Check if this state invokes a collaborator
    pub fn is_invocation(&self) -> bool {
        matches!(
            self,
            Self::CleanBefore | Self::Generate | Self::Validate | Self::CleanAfter
        )
    }

    /// Check if this state is a pure branch decision
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Decide | Self::FinalBranch)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CleanBefore => write!(f, "clean_before"),
            Self::Generate => write!(f, "generate"),
            Self::Wait => write!(f, "wait"),
            Self::Validate => write!(f, "validate"),
            Self::Decide => write!(f, "decide"),
            Self::CleanAfter => write!(f, "clean_after"),
            Self::FinalBranch => write!(f, "final_branch"),
            Self::ErrorTerminal => write!(f, "error_terminal"),
            Self::FailedTerminal => write!(f, "failed_terminal"),
            Self::SuccessTerminal => write!(f, "success_terminal"),
        }
    }
}

impl std::str::FromStr for RunState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clean_before" => Ok(Self::CleanBefore),
            "generate" => Ok(Self::Generate),
            "wait" => Ok(Self::Wait),
            "validate" => Ok(Self::Validate),
            "decide" => Ok(Self::Decide),
            "clean_after" => Ok(Self::CleanAfter),
            "final_branch" => Ok(Self::FinalBranch),
            "error_terminal" => Ok(Self::ErrorTerminal),
            "failed_terminal" => Ok(Self::FailedTerminal),
            "success_terminal" => Ok(Self::SuccessTerminal),
            _ => Err(format!("Invalid run state: {s}")),
        }
    }
}

/// Every run starts by cleaning the destination
impl Default for RunState {
    fn default() -> Self {
        Self::CleanBefore
    }
}

/// Processing status reported by the status checker.
///
/// Serialized in SCREAMING_SNAKE_CASE because that is how the status field
/// travels on the wire between collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    /// Downstream processing has not caught up yet; poll again
    Pending,
    /// Output record count and content matched expectations
    Succeeded,
    /// Output record count or content did not match expectations
    Failed,
}

impl TestStatus {
    /// Check if this status ends the poll loop
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Succeeded => write!(f, "SUCCEEDED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl std::str::FromStr for TestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SUCCEEDED" => Ok(Self::Succeeded),
            "FAILED" => Ok(Self::Failed),
            _ => Err(format!("Invalid test status: {s}")),
        }
    }
}

/// A fresh run has no checker verdict yet
impl Default for TestStatus {
    fn default() -> Self {
        Self::Pending
    }
}
