use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::collaborators::{StatusChecker, StatusRequest, StatusResponse};
use crate::error::CollaboratorError;
use crate::state_machine::TestStatus;

use super::destination::InMemoryDestination;
use super::transform;

/// Poll counting for one destination epoch
#[derive(Debug, Default)]
struct PollWindow {
    epoch: u64,
    polls: u32,
}

/// Inspects the destination and classifies one poll of the run.
///
/// Reports SUCCEEDED on an exact record-count match with every record
/// carrying the transform's enrichment. Undercounts and overcounts answer
/// PENDING while the pending budget lasts, then escalate to FAILED so a
/// stalled or lossy delivery cannot keep a run polling forever on its own.
/// Content-verification failures report FAILED immediately.
///
/// The budget is scoped to one run: the workflow purges the destination
/// before every test body, and each purge opens a new epoch that resets the
/// poll window, so one run's exhausted budget never bleeds into the next.
pub struct RecordCountChecker {
    destination: InMemoryDestination,
    wait_seconds: u64,
    pending_poll_budget: u32,
    window: Mutex<PollWindow>,
}

impl RecordCountChecker {
    pub fn new(
        destination: InMemoryDestination,
        wait_seconds: u64,
        pending_poll_budget: u32,
    ) -> Self {
        Self {
            destination,
            wait_seconds,
            pending_poll_budget,
            window: Mutex::new(PollWindow::default()),
        }
    }

    fn classify(&self, lines: &[String], expected: u64, epoch: u64) -> TestStatus {
        if let Some(bad) = lines.iter().find(|line| !transform::is_enriched(line)) {
            warn!(line = %bad, "Delivered record failed content verification");
            return TestStatus::Failed;
        }

        let count = lines.len() as u64;
        if count == expected {
            return TestStatus::Succeeded;
        }

        let mut window = self.window.lock();
        if window.epoch != epoch {
            *window = PollWindow { epoch, polls: 0 };
        }

        // 0-based index of this poll among the epoch's mismatching ones
        let poll_index = window.polls;
        window.polls += 1;
        if poll_index < self.pending_poll_budget {
            TestStatus::Pending
        } else {
            TestStatus::Failed
        }
    }
}

#[async_trait]
impl StatusChecker for RecordCountChecker {
    async fn check(&self, request: StatusRequest) -> Result<StatusResponse, CollaboratorError> {
        let epoch = self.destination.epoch();
        let lines = self.destination.lines();
        let status = self.classify(&lines, request.target_record_count, epoch);

        debug!(
            destination = %request.destination,
            delivered = lines.len(),
            expected = request.target_record_count,
            status = %status,
            "Validated destination"
        );

        Ok(StatusResponse {
            status,
            destination: request.destination,
            target_record_count: request.target_record_count,
            wait_seconds: self.wait_seconds,
        })
    }
}
