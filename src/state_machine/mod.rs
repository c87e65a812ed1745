// State machine module for the integration-test workflow
//
// Expresses the run's control flow as an explicit tagged-union state enum
// plus a pure transition function, independent of any workflow-execution
// runtime. The orchestrator performs the effects; this module only decides
// where the run goes next.

pub mod events;
pub mod states;
pub mod transitions;

// Re-export main types for convenient access
pub use events::RunEvent;
pub use states::{RunState, TestStatus};
pub use transitions::TransitionError;
