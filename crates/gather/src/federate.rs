//! Federate snapshot gatherer
//!
//! Issues the two `/federate` requests and assembles the metrics record.

use std::io::Read;

use reqwest::blocking::{Client, RequestBuilder, Response};
use tracing::{debug, error, warn};

use fedsnap_config::{EndpointConfig, GatherConfig};
use fedsnap_stream::{count_lines, LineLimitReader};

use crate::error::GatherError;
use crate::record::Record;

/// Archive location of the metrics snapshot record.
pub const METRICS_RECORD_NAME: &str = "config/metrics";

/// Pulls a federated metrics snapshot from a monitoring endpoint.
///
/// One instance drives one gather cycle; the HTTP client is built once at
/// construction and response handles live only for the duration of
/// [`gather`](Self::gather).
pub struct MetricsGatherer {
    client: Client,
    base_url: String,
    token: Option<String>,
    series: Vec<String>,
    alerts_series: String,
    alert_line_limit: u64,
}

impl MetricsGatherer {
    /// Create a gatherer from endpoint and gather configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatherError::Init`] if HTTP client construction fails
    /// (e.g., TLS backend or proxy misconfiguration).
    pub fn new(endpoint: &EndpointConfig, gather: &GatherConfig) -> Result<Self, GatherError> {
        let client = Client::builder()
            .user_agent(concat!("fedsnap/", env!("CARGO_PKG_VERSION")))
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| GatherError::Init(format!("metrics HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: endpoint.url.trim_end_matches('/').to_string(),
            token: endpoint.token.clone(),
            series: gather.series.clone(),
            alerts_series: gather.alerts_series.clone(),
            alert_line_limit: gather.alert_line_limit,
        })
    }

    /// Run one gather cycle and return the records to archive.
    ///
    /// Request-level failures are embedded as `# error:` comment records;
    /// only a mid-stream read failure returns `Err`, in which case no
    /// records are produced for this cycle.
    pub fn gather(&self) -> Result<Vec<Record>, GatherError> {
        let mut data = match self.fetch_fixed_series() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "unable to retrieve most recent metrics");
                return Ok(vec![Record::comment(METRICS_RECORD_NAME, &e.to_string())]);
            }
        };

        let response = match self.send_alerts_request() {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "unable to retrieve alerts from metrics");
                return Ok(vec![Record::comment(METRICS_RECORD_NAME, &e.to_string())]);
            }
        };

        let mut reader = LineLimitReader::new(response, self.alert_line_limit);
        let mut alerts = Vec::new();
        if let Err(e) = reader.read_to_end(&mut alerts) {
            error!(error = %e, "unable to read alerts from metrics");
            return Err(GatherError::Read(e));
        }

        let kept = reader.lines_read();
        let remaining = match count_lines(reader.into_remainder()) {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "unable to count truncated alert lines");
                return Err(GatherError::Read(e));
            }
        };
        let total = kept + remaining;

        debug!(
            kept,
            total,
            limit = self.alert_line_limit,
            "alerts stream drained"
        );

        // The federate exposition carries a `# TYPE` header line and a
        // trailing blank line, so the total is usually two higher than the
        // number of actual alert samples.
        data.extend_from_slice(
            format!("# ALERTS {}/{}\n", total, self.alert_line_limit).as_bytes(),
        );
        data.extend_from_slice(&alerts);

        Ok(vec![Record::new(METRICS_RECORD_NAME, data)])
    }

    /// Fetch the fixed series set fully in one request.
    fn fetch_fixed_series(&self) -> Result<Vec<u8>, reqwest::Error> {
        let matches: Vec<&str> = self.series.iter().map(String::as_str).collect();
        let response = self.federate_request(&matches).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    /// Open the alerts response for streaming consumption.
    fn send_alerts_request(&self) -> Result<Response, reqwest::Error> {
        self.federate_request(&[self.alerts_series.as_str()])
            .send()?
            .error_for_status()
    }

    /// Build a GET against `/federate` with one `match[]` per series.
    fn federate_request(&self, matches: &[&str]) -> RequestBuilder {
        let url = format!("{}/federate", self.base_url);
        let query: Vec<(&str, &str)> = matches.iter().map(|m| ("match[]", *m)).collect();
        let mut request = self.client.get(url).query(&query);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        request
    }
}

/// Gather with the best-effort policy applied.
///
/// If the metrics client cannot be built at all, the cycle is skipped
/// silently: a warning is logged and no records and no error are returned.
pub fn gather_most_recent(
    endpoint: &EndpointConfig,
    gather: &GatherConfig,
) -> Result<Vec<Record>, GatherError> {
    gather_with(MetricsGatherer::new(endpoint, gather))
}

/// Best-effort policy over a possibly-failed gatherer construction.
fn gather_with(built: Result<MetricsGatherer, GatherError>) -> Result<Vec<Record>, GatherError> {
    let gatherer = match built {
        Ok(gatherer) => gatherer,
        Err(e) => {
            warn!(error = %e, "unable to load metrics client, no metrics will be collected");
            return Ok(Vec::new());
        }
    };
    gatherer.gather()
}

#[cfg(test)]
#[path = "federate_test.rs"]
mod federate_test;
