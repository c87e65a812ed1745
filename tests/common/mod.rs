//! Scripted mock collaborators for orchestrator tests.
//!
//! One `MockCollaborators` instance implements all three collaborator traits
//! over shared state, so a test can script responses per step and assert on
//! the exact invocation counts afterwards.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use integ_gate::collaborators::{
    CleanupAction, CleanupRequest, CleanupResponse, EventGenerator, GenerateRequest,
    GenerateResponse, StatusChecker, StatusRequest, StatusResponse,
};
use integ_gate::error::CollaboratorError;
use integ_gate::state_machine::TestStatus;

/// Shared mock state: call counters plus scripted responses
#[derive(Debug, Default)]
pub struct MockState {
    pub cleanup_calls: u32,
    pub generate_calls: u32,
    pub check_calls: u32,
    /// Scripted cleanup results; empty means success
    pub cleanup_script: VecDeque<Result<(), String>>,
    /// Scripted generate results carrying the echoed wait interval;
    /// empty means success with a 30 second interval
    pub generate_script: VecDeque<Result<u64, String>>,
    /// Scripted status responses; empty falls back to `default_status`
    pub status_script: VecDeque<Result<TestStatus, String>>,
    /// Status reported once the script runs out
    pub default_status: TestStatus,
}

/// Mock implementation of all three collaborators
#[derive(Clone, Default)]
pub struct MockCollaborators {
    state: Arc<Mutex<MockState>>,
}

#[allow(dead_code)] // not every test binary uses every helper
impl MockCollaborators {
    pub fn new() -> Self {
        let mock = Self::default();
        mock.state.lock().default_status = TestStatus::Succeeded;
        mock
    }

    /// Report this status whenever the status script is exhausted
    pub fn default_status(self, status: TestStatus) -> Self {
        self.state.lock().default_status = status;
        self
    }

    pub fn script_cleanup_ok(&self) -> &Self {
        self.state.lock().cleanup_script.push_back(Ok(()));
        self
    }

    pub fn script_cleanup_err(&self, message: &str) -> &Self {
        self.state
            .lock()
            .cleanup_script
            .push_back(Err(message.to_string()));
        self
    }

    pub fn script_generate_ok(&self, wait_seconds: u64) -> &Self {
        self.state.lock().generate_script.push_back(Ok(wait_seconds));
        self
    }

    pub fn script_generate_err(&self, message: &str) -> &Self {
        self.state
            .lock()
            .generate_script
            .push_back(Err(message.to_string()));
        self
    }

    pub fn script_statuses(&self, statuses: &[TestStatus]) -> &Self {
        let mut state = self.state.lock();
        for status in statuses {
            state.status_script.push_back(Ok(*status));
        }
        self
    }

    pub fn script_status_err(&self, message: &str) -> &Self {
        self.state
            .lock()
            .status_script
            .push_back(Err(message.to_string()));
        self
    }

    pub fn cleanup_calls(&self) -> u32 {
        self.state.lock().cleanup_calls
    }

    pub fn generate_calls(&self) -> u32 {
        self.state.lock().generate_calls
    }

    pub fn check_calls(&self) -> u32 {
        self.state.lock().check_calls
    }
}

#[async_trait]
impl EventGenerator for MockCollaborators {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, CollaboratorError> {
        let mut state = self.state.lock();
        state.generate_calls += 1;
        match state.generate_script.pop_front() {
            Some(Err(message)) => Err(CollaboratorError::transport("event_generator", message)),
            Some(Ok(wait_seconds)) => Ok(GenerateResponse {
                wait_seconds,
                destination: request.destination,
                target_record_count: request.target_record_count,
            }),
            None => Ok(GenerateResponse {
                wait_seconds: 30,
                destination: request.destination,
                target_record_count: request.target_record_count,
            }),
        }
    }
}

#[async_trait]
impl StatusChecker for MockCollaborators {
    async fn check(&self, request: StatusRequest) -> Result<StatusResponse, CollaboratorError> {
        let mut state = self.state.lock();
        state.check_calls += 1;
        let status = match state.status_script.pop_front() {
            Some(Err(message)) => {
                return Err(CollaboratorError::transport("status_checker", message))
            }
            Some(Ok(status)) => status,
            None => state.default_status,
        };
        Ok(StatusResponse {
            status,
            destination: request.destination,
            target_record_count: request.target_record_count,
            wait_seconds: 30,
        })
    }
}

#[async_trait]
impl CleanupAction for MockCollaborators {
    async fn clean(&self, request: CleanupRequest) -> Result<CleanupResponse, CollaboratorError> {
        let mut state = self.state.lock();
        state.cleanup_calls += 1;
        match state.cleanup_script.pop_front() {
            Some(Err(message)) => Err(CollaboratorError::transport("cleanup_action", message)),
            _ => Ok(CleanupResponse {
                destination: request.destination,
            }),
        }
    }
}
