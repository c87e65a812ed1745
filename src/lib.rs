#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Integ Gate
//!
//! Integration-test orchestration for streaming delivery pipelines, used as a
//! pass/fail gate during environment promotion.
//!
//! ## Overview
//!
//! One gate run publishes a known number of synthetic events into an
//! ingestion channel, waits for the delivery pipeline to land them at an
//! output destination, validates the landed records, and cleans the
//! destination both before and after the test body. The run ends in exactly
//! one of three verdicts: success, data mismatch, or execution error.
//!
//! ## Architecture
//!
//! The workflow is an explicit state machine: a tagged-union state enum and a
//! pure transition function, executed strictly sequentially by the
//! orchestrator. The three operations the workflow sequences (event
//! generation, status checking, cleanup) are black-box async collaborators
//! behind traits; failures of any of them route uniformly to the error
//! terminal and are never retried inside the workflow. The poll loop has no
//! internal iteration cap and is bounded only by an externally supplied run
//! deadline.
//!
//! ## Module Organization
//!
//! - [`state_machine`] - Run states, events, and the transition table
//! - [`orchestration`] - The orchestrator, run context, and verdicts
//! - [`collaborators`] - Contracts for the three black-box operations
//! - [`harness`] - In-process reference collaborators for local runs and tests
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integ_gate::config::GateConfig;
//! use integ_gate::harness::LocalHarness;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = GateConfig::default();
//! let harness = LocalHarness::new(&config);
//! let orchestrator = harness.orchestrator(config);
//!
//! let report = orchestrator.gate().await;
//! println!("verdict: {}", report.verdict);
//! # }
//! ```

pub mod collaborators;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod orchestration;
pub mod state_machine;

pub use config::GateConfig;
pub use error::{CollaboratorError, GateError, Result};
pub use orchestration::{GateRequest, RunReport, TestOrchestrator, Verdict};
pub use state_machine::{RunEvent, RunState, TestStatus};
