// Orchestration module: run context types and the orchestrator that walks
// the workflow state machine against the collaborator endpoints.

pub mod orchestrator;
pub mod types;

pub use orchestrator::TestOrchestrator;
pub use types::{GateRequest, RunReport, TestRun, Verdict};
