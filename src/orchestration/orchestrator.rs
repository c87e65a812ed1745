//! # Test Orchestrator
//!
//! Drives one integration-test run through the workflow state machine:
//! cleanup before, event generation, a timed poll loop against the status
//! checker, mandatory cleanup after, and a single terminal verdict.
//!
//! Each run is a strictly sequential walk of the transition table; the sole
//! suspension point is the `Wait` state, a fixed-interval sleep with no
//! backoff and no early wake. Collaborator failures are never retried here:
//! one uniform combinator turns any invocation error into the step-failure
//! event and the table routes it to the error terminal. The poll loop itself
//! is unbounded; [`TestOrchestrator::run_with_deadline`] bounds it with an
//! externally supplied deadline.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, warn};

use crate::collaborators::{
    CleanupAction, CleanupRequest, EventGenerator, GenerateRequest, StatusChecker, StatusRequest,
};
use crate::config::GateConfig;
use crate::error::CollaboratorError;
use crate::state_machine::{RunEvent, RunState};

use super::types::{GateRequest, RunReport, TestRun, Verdict};

/// Sequences the three collaborators for one run at a time.
///
/// Multiple runs may execute concurrently on separate invocations; they share
/// no mutable state here. Concurrent runs against the same destination are
/// the invoker's responsibility to prevent.
pub struct TestOrchestrator {
    generator: Arc<dyn EventGenerator>,
    checker: Arc<dyn StatusChecker>,
    cleaner: Arc<dyn CleanupAction>,
    config: GateConfig,
}

impl TestOrchestrator {
    /// Create an orchestrator over the three collaborator endpoints
    pub fn new(
        generator: Arc<dyn EventGenerator>,
        checker: Arc<dyn StatusChecker>,
        cleaner: Arc<dyn CleanupAction>,
        config: GateConfig,
    ) -> Self {
        Self {
            generator,
            checker,
            cleaner,
            config,
        }
    }

    /// Run one gate using the configured destination, record count, and
    /// deadline. This is the entry point the pipeline promotion calls.
    pub async fn gate(&self) -> RunReport {
        let request = GateRequest {
            destination: self.config.destination.clone(),
            target_record_count: self.config.target_record_count,
        };
        self.run_with_deadline(request, self.config.run_timeout())
            .await
    }

    /// Execute one run bounded by an externally supplied deadline.
    ///
    /// The deadline is the only thing capping the poll loop. When it fires
    /// the run is abandoned mid-flight (its context is discarded, including
    /// the poll count) and reported as an execution error.
    pub async fn run_with_deadline(&self, request: GateRequest, deadline: Duration) -> RunReport {
        let run = TestRun::new(request, self.config.wait_seconds);
        let run_id = run.run_id;
        let started_at = Utc::now();

        match timeout(deadline, self.run_to_verdict(run)).await {
            Ok(report) => report,
            Err(_) => {
                warn!(
                    run_id = %run_id,
                    deadline_seconds = deadline.as_secs(),
                    "Run abandoned at deadline"
                );
                RunReport {
                    run_id,
                    verdict: Verdict::ExecutionError {
                        cause: format!(
                            "run exceeded its deadline of {}s",
                            deadline.as_secs()
                        ),
                    },
                    polls: 0,
                    started_at,
                    finished_at: Utc::now(),
                }
            }
        }
    }

    /// Execute one run with no deadline. Only safe when the caller bounds the
    /// run some other way; the poll loop alone never terminates a PENDING
    /// destination.
    pub async fn run(&self, request: GateRequest) -> RunReport {
        let run = TestRun::new(request, self.config.wait_seconds);
        self.run_to_verdict(run).await
    }

    /// Walk the state machine from its initial state to a terminal state
    async fn run_to_verdict(&self, mut run: TestRun) -> RunReport {
        let started_at = Utc::now();
        let mut state = RunState::default();
        let mut polls = 0u32;
        let mut last_cause: Option<String> = None;

        info!(
            run_id = %run.run_id,
            destination = %run.destination,
            target_record_count = run.target_record_count,
            "🚦 GATE_RUN: starting"
        );

        while !state.is_terminal() {
            let event = self.drive(&mut run, state, &mut polls).await;
            if let Some(cause) = event.cause() {
                last_cause = Some(cause.to_string());
            }

            state = match state.next(&event) {
                Ok(next) => {
                    debug!(
                        run_id = %run.run_id,
                        from = %state,
                        to = %next,
                        event = event.event_type(),
                        "Run transition"
                    );
                    next
                }
                Err(transition_error) => {
                    // Undefined pairs cannot occur while drive() and the
                    // table agree; treat a disagreement as an execution error
                    error!(run_id = %run.run_id, error = %transition_error, "Undefined transition");
                    last_cause = Some(transition_error.to_string());
                    RunState::ErrorTerminal
                }
            };
        }

        let verdict = match state {
            RunState::SuccessTerminal => Verdict::Success,
            RunState::FailedTerminal => Verdict::DataMismatch {
                cause: "output data does not match expected result".to_string(),
            },
            _ => Verdict::ExecutionError {
                cause: last_cause.unwrap_or_else(|| "unknown execution error".to_string()),
            },
        };

        if verdict.is_success() {
            info!(run_id = %run.run_id, polls, verdict = %verdict, "🚦 GATE_RUN: finished");
        } else {
            warn!(run_id = %run.run_id, polls, verdict = %verdict, "🚦 GATE_RUN: finished");
        }

        RunReport {
            run_id: run.run_id,
            verdict,
            polls,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Perform the side effect of a non-terminal state and report what
    /// happened as the event feeding the transition table
    async fn drive(&self, run: &mut TestRun, state: RunState, polls: &mut u32) -> RunEvent {
        match state {
            RunState::CleanBefore | RunState::CleanAfter => {
                let request = CleanupRequest {
                    destination: run.destination.clone(),
                };
                let (event, _response) = self.invoke_step(state, self.cleaner.clean(request)).await;
                event
            }
            RunState::Generate => {
                let request = GenerateRequest {
                    destination: run.destination.clone(),
                    target_record_count: run.target_record_count,
                };
                let (event, response) = self
                    .invoke_step(state, self.generator.generate(request))
                    .await;
                if let Some(response) = response {
                    // The generator's response supplies the poll interval
                    run.wait_seconds = response.wait_seconds;
                }
                event
            }
            RunState::Wait => {
                debug!(run_id = %run.run_id, wait_seconds = run.wait_seconds, "Suspending");
                sleep(Duration::from_secs(run.wait_seconds)).await;
                RunEvent::WaitElapsed
            }
            RunState::Validate => {
                *polls += 1;
                let request = StatusRequest {
                    destination: run.destination.clone(),
                    target_record_count: run.target_record_count,
                };
                let (event, response) = self.invoke_step(state, self.checker.check(request)).await;
                if let Some(response) = response {
                    run.status = response.status;
                    run.wait_seconds = response.wait_seconds;
                }
                event
            }
            RunState::Decide | RunState::FinalBranch => RunEvent::StatusExamined(run.status),
            RunState::ErrorTerminal | RunState::FailedTerminal | RunState::SuccessTerminal => {
                unreachable!("terminal states are never driven")
            }
        }
    }

    /// The one error combinator every step shares: a collaborator `Err`
    /// becomes the step-failure event, nothing is retried locally
    async fn invoke_step<T, F>(&self, state: RunState, invocation: F) -> (RunEvent, Option<T>)
    where
        F: Future<Output = Result<T, CollaboratorError>>,
    {
        match invocation.await {
            Ok(response) => (RunEvent::StepSucceeded, Some(response)),
            Err(error) => {
                warn!(state = %state, error = %error, "Collaborator invocation failed");
                (RunEvent::fail_with_cause(error.to_string()), None)
            }
        }
    }
}
