//! Per-record delivery transform: decode the payload, enrich it with the
//! record's arrival timestamp, re-encode it as one JSON line. The status
//! checker verifies the enrichment key on every delivered record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Key the transform injects into every delivered record
pub const ARRIVAL_TIMESTAMP_KEY: &str = "approximate_arrival_timestamp";

/// Enrich one JSON payload with its arrival timestamp.
///
/// Fails if the payload is not a JSON object.
pub fn enrich_record(payload: &str, arrival: DateTime<Utc>) -> Result<String, serde_json::Error> {
    let mut record: Map<String, Value> = serde_json::from_str(payload)?;
    record.insert(
        ARRIVAL_TIMESTAMP_KEY.to_string(),
        Value::String(arrival.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    serde_json::to_string(&Value::Object(record))
}

/// Check that a delivered line carries the enrichment the transform applies
pub fn is_enriched(line: &str) -> bool {
    serde_json::from_str::<Value>(line)
        .map(|value| value.get(ARRIVAL_TIMESTAMP_KEY).is_some())
        .unwrap_or(false)
}
