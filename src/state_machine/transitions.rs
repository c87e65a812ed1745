//! # Run Transition Table
//!
//! The pure transition function for the integration-test workflow. All
//! control flow of a run lives here: the cleanup-before/generate prologue,
//! the wait/validate/decide poll loop, and the mandatory cleanup-after
//! epilogue with its final outcome branch.
//!
//! The function has no side effects and no knowledge of collaborators; the
//! orchestrator performs the step's work and feeds the resulting [`RunEvent`]
//! back through [`RunState::next`].

use thiserror::Error;

use super::events::RunEvent;
use super::states::{RunState, TestStatus};

/// A (state, event) pair with no defined transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No transition from state '{from}' on event '{event}'")]
    InvalidTransition { from: RunState, event: &'static str },
}

impl RunState {
    /// Compute the successor state for an event observed in this state.
    ///
    /// Every invocation state routes `StepFailed` to [`RunState::ErrorTerminal`];
    /// this is the single catch-all error transition the whole workflow shares.
    /// The `Decide` branch loops back to `Wait` while the status is still
    /// `PENDING` with no internal iteration cap; bounding the loop is the
    /// caller's responsibility via a run deadline.
    pub fn next(self, event: &RunEvent) -> Result<RunState, TransitionError> {
        let target = match (self, event) {
            // Prologue: cleanup, then event generation
            (Self::CleanBefore, RunEvent::StepSucceeded) => Self::Generate,
            (Self::Generate, RunEvent::StepSucceeded) => Self::Wait,

            // Poll loop
            (Self::Wait, RunEvent::WaitElapsed) => Self::Validate,
            (Self::Validate, RunEvent::StepSucceeded) => Self::Decide,
            (Self::Decide, RunEvent::StatusExamined(TestStatus::Pending)) => Self::Wait,
            (Self::Decide, RunEvent::StatusExamined(_)) => Self::CleanAfter,

            // Epilogue: mandatory cleanup, then outcome branch
            (Self::CleanAfter, RunEvent::StepSucceeded) => Self::FinalBranch,
            (Self::FinalBranch, RunEvent::StatusExamined(TestStatus::Succeeded)) => {
                Self::SuccessTerminal
            }
            (Self::FinalBranch, RunEvent::StatusExamined(TestStatus::Failed)) => {
                Self::FailedTerminal
            }

            // Uniform catch-all: any failed invocation ends the run.
            // A CleanAfter failure lands here too, overriding the carried
            // outcome: a dirty destination is reported, never swallowed.
            (state, RunEvent::StepFailed(_)) if state.is_invocation() => Self::ErrorTerminal,

            (from, event) => {
                return Err(TransitionError::InvalidTransition {
                    from,
                    event: event.event_type(),
                })
            }
        };

        Ok(target)
    }
}
