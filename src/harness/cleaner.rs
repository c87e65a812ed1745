use async_trait::async_trait;
use tracing::debug;

use crate::collaborators::{CleanupAction, CleanupRequest, CleanupResponse};
use crate::error::CollaboratorError;

use super::destination::InMemoryDestination;

/// Purges every delivered record from the destination.
///
/// Idempotent: cleaning an already-clean destination succeeds as a no-op,
/// which the workflow relies on since cleanup runs both before and after
/// every test body.
pub struct DestinationCleaner {
    destination: InMemoryDestination,
}

impl DestinationCleaner {
    pub fn new(destination: InMemoryDestination) -> Self {
        Self { destination }
    }
}

#[async_trait]
impl CleanupAction for DestinationCleaner {
    async fn clean(&self, request: CleanupRequest) -> Result<CleanupResponse, CollaboratorError> {
        let removed = self.destination.purge();
        debug!(destination = %request.destination, removed, "Purged destination");
        Ok(CleanupResponse {
            destination: request.destination,
        })
    }
}
