//! # Local Harness
//!
//! In-process reference implementations of the three collaborators, wired to
//! a shared in-memory destination. The gate binary and the integration tests
//! use these to run the full workflow without any external delivery
//! pipeline: the generator emits synthetic market ticks through the
//! per-record transform, the checker counts and content-verifies delivered
//! lines, and the cleaner purges the destination.

pub mod checker;
pub mod cleaner;
pub mod destination;
pub mod generator;
pub mod transform;

pub use checker::RecordCountChecker;
pub use cleaner::DestinationCleaner;
pub use destination::InMemoryDestination;
pub use generator::{SyntheticEventGenerator, TickRecord};

use std::sync::Arc;

use crate::collaborators::{CleanupAction, EventGenerator, StatusChecker};
use crate::config::GateConfig;
use crate::orchestration::TestOrchestrator;

/// The three local collaborators sharing one destination
pub struct LocalHarness {
    pub destination: InMemoryDestination,
    pub generator: Arc<dyn EventGenerator>,
    pub checker: Arc<dyn StatusChecker>,
    pub cleaner: Arc<dyn CleanupAction>,
}

impl LocalHarness {
    /// Build a harness from gate configuration
    pub fn new(config: &GateConfig) -> Self {
        let destination = InMemoryDestination::new();
        Self {
            generator: Arc::new(SyntheticEventGenerator::new(
                destination.clone(),
                config.wait_seconds,
            )),
            checker: Arc::new(RecordCountChecker::new(
                destination.clone(),
                config.wait_seconds,
                config.pending_poll_budget,
            )),
            cleaner: Arc::new(DestinationCleaner::new(destination.clone())),
            destination,
        }
    }

    /// Build an orchestrator over this harness
    pub fn orchestrator(&self, config: GateConfig) -> TestOrchestrator {
        TestOrchestrator::new(
            Arc::clone(&self.generator),
            Arc::clone(&self.checker),
            Arc::clone(&self.cleaner),
            config,
        )
    }
}
