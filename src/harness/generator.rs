use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collaborators::{EventGenerator, GenerateRequest, GenerateResponse};
use crate::error::CollaboratorError;

use super::destination::InMemoryDestination;
use super::transform;

const TICKERS: [&str; 5] = ["AAPL", "AMZN", "MSFT", "INTC", "TBV"];

/// One synthetic market-tick payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub event_time: String,
    pub ticker: String,
    pub price: f64,
}

impl TickRecord {
    /// Generate a random tick with the current time
    pub fn synthetic() -> Self {
        let mut rng = rand::thread_rng();
        let ticker = TICKERS
            .choose(&mut rng)
            .copied()
            .unwrap_or(TICKERS[0])
            .to_string();
        let price = (rng.gen::<f64>() * 100.0 * 100.0).round() / 100.0;
        Self {
            event_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            ticker,
            price,
        }
    }
}

/// Publishes synthetic tick records and delivers them straight through the
/// per-record transform into the in-memory destination.
///
/// Delivery is synchronous here, so the first validation poll already sees
/// the full record count; the checker still answers PENDING on genuine
/// undercounts, which tests exercise by seeding mismatches.
pub struct SyntheticEventGenerator {
    destination: InMemoryDestination,
    wait_seconds: u64,
}

impl SyntheticEventGenerator {
    pub fn new(destination: InMemoryDestination, wait_seconds: u64) -> Self {
        Self {
            destination,
            wait_seconds,
        }
    }
}

#[async_trait]
impl EventGenerator for SyntheticEventGenerator {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, CollaboratorError> {
        for _ in 0..request.target_record_count {
            let payload = serde_json::to_string(&TickRecord::synthetic())
                .map_err(|e| CollaboratorError::invocation("event_generator", e.to_string()))?;
            let line = transform::enrich_record(&payload, Utc::now())
                .map_err(|e| CollaboratorError::invocation("event_generator", e.to_string()))?;
            self.destination.append_line(line);
        }

        info!(
            destination = %request.destination,
            record_count = request.target_record_count,
            "Published synthetic events"
        );

        Ok(GenerateResponse {
            wait_seconds: self.wait_seconds,
            destination: request.destination,
            target_record_count: request.target_record_count,
        })
    }
}
