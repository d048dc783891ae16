//! `[observability]` section of the service configuration

use opentelemetry_sdk::trace::Sampler;
use serde::Deserialize;

const DEFAULT_SERVICE_NAME: &str = "credential-service";
const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";
const DEFAULT_METRICS_PATH: &str = "/metrics";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
}

/// Span export to an OTLP collector. Local log output is configured under
/// `[logging]` and is always on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    pub enabled: bool,
    /// gRPC endpoint of the collector
    pub otlp_endpoint: String,
    /// Reported as the `service.name` resource attribute
    pub service_name: String,
    /// Fraction of traces kept; values outside 0..=1 are clamped
    pub sampling_ratio: f64,
}

impl TracingConfig {
    pub fn sampler(&self) -> Sampler {
        match self.sampling_ratio {
            r if r >= 1.0 => Sampler::AlwaysOn,
            r if r <= 0.0 => Sampler::AlwaysOff,
            r => Sampler::TraceIdRatioBased(r),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            otlp_endpoint: DEFAULT_OTLP_ENDPOINT.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            sampling_ratio: 1.0,
        }
    }
}

/// Prometheus scrape endpoint, served on the API listener
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}
