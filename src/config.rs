use crate::error::{GateError, Result};

/// Runtime configuration for the gate.
///
/// Defaults mirror what the deployment pipeline passes on promotion: one
/// thousand records, a 30 second poll interval, and a five minute overall
/// run deadline. The deadline is deliberately an explicit per-environment
/// parameter because the workflow's poll loop has no internal iteration cap.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Environment name used for logging and reporting
    pub environment: String,
    /// Identifier of the output destination being validated and cleaned
    pub destination: String,
    /// How many synthetic records one run publishes
    pub target_record_count: u64,
    /// Poll interval in seconds, used until the event generator echoes one back
    pub wait_seconds: u64,
    /// Overall run deadline in seconds; the only bound on the poll loop
    pub run_timeout_seconds: u64,
    /// How many PENDING polls the bundled status checker tolerates before
    /// escalating to FAILED
    pub pending_poll_budget: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            destination: "integ-test-output".to_string(),
            target_record_count: 1000,
            wait_seconds: 30,
            run_timeout_seconds: 300,
            pending_poll_budget: 2,
        }
    }
}

impl GateConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(environment) = std::env::var("INTEG_GATE_ENV") {
            config.environment = environment;
        }

        if let Ok(destination) = std::env::var("INTEG_GATE_DESTINATION") {
            config.destination = destination;
        }

        if let Ok(count) = std::env::var("INTEG_GATE_RECORD_COUNT") {
            config.target_record_count = count.parse().map_err(|e| {
                GateError::Configuration(format!("Invalid target_record_count: {e}"))
            })?;
        }

        if let Ok(wait) = std::env::var("INTEG_GATE_WAIT_SECONDS") {
            config.wait_seconds = wait
                .parse()
                .map_err(|e| GateError::Configuration(format!("Invalid wait_seconds: {e}")))?;
        }

        if let Ok(timeout) = std::env::var("INTEG_GATE_RUN_TIMEOUT_SECONDS") {
            config.run_timeout_seconds = timeout.parse().map_err(|e| {
                GateError::Configuration(format!("Invalid run_timeout_seconds: {e}"))
            })?;
        }

        if let Ok(budget) = std::env::var("INTEG_GATE_PENDING_POLL_BUDGET") {
            config.pending_poll_budget = budget.parse().map_err(|e| {
                GateError::Configuration(format!("Invalid pending_poll_budget: {e}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make a run degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.target_record_count == 0 {
            return Err(GateError::Configuration(
                "target_record_count must be at least 1".to_string(),
            ));
        }
        if self.run_timeout_seconds == 0 {
            return Err(GateError::Configuration(
                "run_timeout_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overall run deadline as a duration
    pub fn run_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.run_timeout_seconds)
    }
}
