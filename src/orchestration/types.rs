//! # Orchestration Types
//!
//! Run context, invocation contract, and terminal verdict types shared by the
//! orchestrator and its callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::state_machine::TestStatus;

/// Invocation contract consumed from the deployment pipeline: one synchronous
/// call per environment promotion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateRequest {
    /// Output destination to validate and clean
    pub destination: String,
    /// Number of synthetic records to publish and expect back
    pub target_record_count: u64,
}

/// One execution instance of the workflow.
///
/// `destination` and `target_record_count` are immutable inputs.
/// `wait_seconds` starts from the configured default and is superseded by the
/// event generator's response; `status` is mutated only by the status
/// checker's output and consumed by the branch decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRun {
    pub run_id: Uuid,
    pub destination: String,
    pub target_record_count: u64,
    pub wait_seconds: u64,
    pub status: TestStatus,
}

impl TestRun {
    /// Create a fresh run context for an invocation
    pub fn new(request: GateRequest, initial_wait_seconds: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            destination: request.destination,
            target_record_count: request.target_record_count,
            wait_seconds: initial_wait_seconds,
            status: TestStatus::default(),
        }
    }
}

/// Terminal classification of one run, produced exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "cause")]
pub enum Verdict {
    /// Output data matched the expected result
    Success,
    /// The status checker reported a count or content mismatch
    DataMismatch { cause: String },
    /// A collaborator invocation, cleanup, or the run deadline failed the run
    ExecutionError { cause: String },
}

impl Verdict {
    /// Check if the gate should let the pipeline proceed
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Extract the terminal cause string, if any
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::DataMismatch { cause } | Self::ExecutionError { cause } => Some(cause),
        }
    }

    /// Process exit code for the gate binary
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::DataMismatch { .. } => 1,
            Self::ExecutionError { .. } => 2,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::DataMismatch { cause } => write!(f, "DATA_MISMATCH: {cause}"),
            Self::ExecutionError { cause } => write!(f, "EXECUTION_ERROR: {cause}"),
        }
    }
}

/// Final report surfaced back to the invoking pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub verdict: Verdict,
    /// Number of status-checker polls the run performed
    pub polls: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
