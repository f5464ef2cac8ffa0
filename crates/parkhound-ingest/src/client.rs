//! HTTP client for the open-data dataset endpoints, plus the top-level
//! load orchestration.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use parkhound_core::{AppConfig, FacilityLexicon, Park};

use crate::error::IngestError;
use crate::fusion::fuse_parks;
use crate::sample::sample_parks;

/// Thin wrapper over `reqwest::Client` with the configured timeout and
/// `User-Agent`. One instance serves all three datasets.
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    /// Creates a `DatasetClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one dataset and returns its raw records.
    ///
    /// The portal wraps record arrays inconsistently; the array is
    /// located by ordered fallback: `records`, `results`, `data`, or a
    /// bare top-level array. An unrecognized-but-valid JSON body yields
    /// an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// - [`IngestError::UnexpectedStatus`] for any non-2xx response.
    /// - [`IngestError::Http`] for network or TLS failure.
    /// - [`IngestError::Deserialize`] when the body is not valid JSON.
    pub async fn fetch_dataset(&self, url: &str) -> Result<Vec<Value>, IngestError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|source| IngestError::Deserialize {
                context: url.to_string(),
                source,
            })?;

        Ok(extract_record_array(value))
    }
}

/// Locates the record array inside a dataset response body. First
/// recognized wrapper wins.
fn extract_record_array(body: Value) -> Vec<Value> {
    match body {
        Value::Array(records) => records,
        Value::Object(mut map) => {
            for key in ["records", "results", "data"] {
                if let Some(Value::Array(records)) = map.remove(key) {
                    return records;
                }
            }
            tracing::debug!("no recognized record array in dataset response");
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Loads, fuses, and (if necessary) falls back.
///
/// All three dataset fetches are issued concurrently and fusion waits
/// for all of them. A source that fails or returns garbage is logged
/// and treated as empty; it degrades the result but never aborts the
/// join. Only a completely empty fusion activates the built-in sample
/// set, so this function is infallible by design.
pub async fn load_parks(
    client: &DatasetClient,
    config: &AppConfig,
    lexicon: &FacilityLexicon,
) -> Vec<Park> {
    let (parks, off_leash, fountains) = tokio::join!(
        client.fetch_dataset(&config.park_locations_url),
        client.fetch_dataset(&config.off_leash_url),
        client.fetch_dataset(&config.water_fountain_url),
    );

    let parks = absorb_source_failure(parks, "park locations");
    let off_leash = absorb_source_failure(off_leash, "off-leash areas");
    let fountains = absorb_source_failure(fountains, "water fountains");

    tracing::info!(
        parks = parks.len(),
        off_leash = off_leash.len(),
        fountains = fountains.len(),
        "dataset fetches complete"
    );

    let fused = fuse_parks(&parks, &off_leash, &fountains, &config.region, lexicon);
    if fused.is_empty() {
        tracing::warn!("no usable records from any source, falling back to sample parks");
        return sample_parks();
    }
    fused
}

fn absorb_source_failure(result: Result<Vec<Value>, IngestError>, source: &str) -> Vec<Value> {
    match result {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(source, error = %error, "dataset source unavailable, treating as empty");
            Vec::new()
        }
    }
}
