//! End-to-end gate runs over the in-process harness.

use std::sync::Arc;
use std::time::Duration;

use integ_gate::config::GateConfig;
use integ_gate::harness::{
    DestinationCleaner, InMemoryDestination, LocalHarness, RecordCountChecker,
    SyntheticEventGenerator,
};
use integ_gate::orchestration::{GateRequest, TestOrchestrator, Verdict};

fn config() -> GateConfig {
    GateConfig {
        target_record_count: 50,
        wait_seconds: 30,
        pending_poll_budget: 2,
        ..GateConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn local_gate_run_succeeds_and_leaves_a_clean_destination() {
    let config = config();
    let harness = LocalHarness::new(&config);
    let destination = harness.destination.clone();
    let orchestrator = harness.orchestrator(config);

    let report = orchestrator.gate().await;

    assert_eq!(report.verdict, Verdict::Success);
    assert_eq!(report.polls, 1);
    // The post-test cleanup purged everything the generator published
    assert!(destination.is_empty());
}

#[tokio::test(start_paused = true)]
async fn leftover_artifacts_are_purged_before_the_test_body() {
    let config = config();
    let harness = LocalHarness::new(&config);
    // Debris from an earlier aborted run
    harness.destination.append_line("stale line".to_string());
    harness.destination.append_line("more debris".to_string());

    let orchestrator = harness.orchestrator(config);
    let report = orchestrator.gate().await;

    // Without the pre-test purge the stale lines would fail content
    // verification; the run must not see them
    assert_eq!(report.verdict, Verdict::Success);
}

#[tokio::test(start_paused = true)]
async fn lossy_delivery_escalates_to_data_mismatch() {
    let config = config();
    // Generator writes into a store the checker never sees: the checker
    // observes a permanent undercount, answers PENDING twice, then FAILED
    let published = InMemoryDestination::new();
    let observed = InMemoryDestination::new();

    let orchestrator = TestOrchestrator::new(
        Arc::new(SyntheticEventGenerator::new(published, config.wait_seconds)),
        Arc::new(RecordCountChecker::new(
            observed.clone(),
            config.wait_seconds,
            config.pending_poll_budget,
        )),
        Arc::new(DestinationCleaner::new(observed)),
        config,
    );

    let started = tokio::time::Instant::now();
    let report = orchestrator
        .run_with_deadline(
            GateRequest {
                destination: "observed".to_string(),
                target_record_count: 50,
            },
            Duration::from_secs(300),
        )
        .await;

    assert!(matches!(report.verdict, Verdict::DataMismatch { .. }));
    assert_eq!(report.polls, 3);
    assert_eq!(started.elapsed(), Duration::from_secs(90));
}

#[tokio::test(start_paused = true)]
async fn consecutive_runs_each_get_the_full_pending_budget() {
    let config = config();
    // Same lossy wiring as above, promoted twice in a row over one harness
    let published = InMemoryDestination::new();
    let observed = InMemoryDestination::new();

    let orchestrator = TestOrchestrator::new(
        Arc::new(SyntheticEventGenerator::new(published, config.wait_seconds)),
        Arc::new(RecordCountChecker::new(
            observed.clone(),
            config.wait_seconds,
            config.pending_poll_budget,
        )),
        Arc::new(DestinationCleaner::new(observed)),
        config,
    );

    let request = GateRequest {
        destination: "observed".to_string(),
        target_record_count: 50,
    };

    let first = orchestrator
        .run_with_deadline(request.clone(), Duration::from_secs(300))
        .await;
    let second = orchestrator
        .run_with_deadline(request, Duration::from_secs(300))
        .await;

    assert!(matches!(first.verdict, Verdict::DataMismatch { .. }));
    assert!(matches!(second.verdict, Verdict::DataMismatch { .. }));
    // The second run polls PENDING twice before escalating, exactly like the
    // first; its first poll must not inherit the first run's spent budget
    assert_eq!(first.polls, 3);
    assert_eq!(second.polls, 3);
}
