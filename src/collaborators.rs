//! # Collaborator Contracts
//!
//! The three black-box operations the orchestrator sequences: an event
//! generator, a status checker, and a cleanup action. Each is an async trait
//! with a plain field-addressed request/response record; the orchestrator
//! never inspects a collaborator's internals, only its response or error.
//!
//! All three operations are expected to be idempotent from the orchestrator's
//! perspective: it may invoke cleanup on an already-clean destination and the
//! call must succeed as a no-op.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CollaboratorError;
use crate::state_machine::TestStatus;

/// Request to publish synthetic test events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Destination whose downstream output will be validated
    pub destination: String,
    /// How many records to publish
    pub target_record_count: u64,
}

/// Response from the event generator; echoes the request and supplies the
/// poll interval the run should use while waiting for delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub wait_seconds: u64,
    pub destination: String,
    pub target_record_count: u64,
}

/// Request to inspect accumulated output at the destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub destination: String,
    /// Expected number of delivered records
    pub target_record_count: u64,
}

/// Status checker verdict for one poll
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: TestStatus,
    pub destination: String,
    pub target_record_count: u64,
    pub wait_seconds: u64,
}

/// Request to remove all test artifacts from a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupRequest {
    pub destination: String,
}

/// Cleanup acknowledgement; echoes the destination it purged
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub destination: String,
}

/// Publishes synthetic records into the ingestion channel
#[async_trait]
pub trait EventGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest)
        -> Result<GenerateResponse, CollaboratorError>;
}

/// Reports whether downstream processing has completed for a destination
#[async_trait]
pub trait StatusChecker: Send + Sync {
    async fn check(&self, request: StatusRequest) -> Result<StatusResponse, CollaboratorError>;
}

/// Idempotently removes all test artifacts from a destination
#[async_trait]
pub trait CleanupAction: Send + Sync {
    async fn clean(&self, request: CleanupRequest) -> Result<CleanupResponse, CollaboratorError>;
}
