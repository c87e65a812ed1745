//! # Integ Gate CLI
//!
//! Runs one integration-test gate against the in-process harness and exits
//! with the verdict's status code, so a pipeline stage can call it directly:
//! 0 on success, 1 on data mismatch, 2 on execution error.

use clap::Parser;
use std::process;
use tracing::{error, info};

use integ_gate::config::GateConfig;
use integ_gate::harness::LocalHarness;
use integ_gate::logging;

#[derive(Parser)]
#[command(name = "integ-gate")]
#[command(about = "Run the integration-test gate for a delivery pipeline promotion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Output destination to validate and clean
    #[arg(short, long)]
    destination: Option<String>,

    /// Number of synthetic records to publish and expect back
    #[arg(short = 'c', long)]
    record_count: Option<u64>,

    /// Poll interval in seconds between validations
    #[arg(short, long)]
    wait_seconds: Option<u64>,

    /// Overall run deadline in seconds
    #[arg(short = 't', long)]
    timeout_seconds: Option<u64>,

    /// Emit the final run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    logging::init_logging();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "Invalid gate configuration");
            process::exit(2);
        }
    };

    info!(
        environment = %config.environment,
        destination = %config.destination,
        target_record_count = config.target_record_count,
        run_timeout_seconds = config.run_timeout_seconds,
        "Starting integration-test gate"
    );

    let harness = LocalHarness::new(&config);
    let orchestrator = harness.orchestrator(config);
    let report = orchestrator.gate().await;

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => error!(%error, "Failed to serialize run report"),
        }
    }

    info!(
        run_id = %report.run_id,
        polls = report.polls,
        verdict = %report.verdict,
        "Gate finished"
    );

    process::exit(report.verdict.exit_code());
}

fn load_config(cli: &Cli) -> integ_gate::Result<GateConfig> {
    let mut config = GateConfig::from_env()?;

    if let Some(destination) = &cli.destination {
        config.destination = destination.clone();
    }
    if let Some(record_count) = cli.record_count {
        config.target_record_count = record_count;
    }
    if let Some(wait_seconds) = cli.wait_seconds {
        config.wait_seconds = wait_seconds;
    }
    if let Some(timeout_seconds) = cli.timeout_seconds {
        config.run_timeout_seconds = timeout_seconds;
    }

    config.validate()?;
    Ok(config)
}
