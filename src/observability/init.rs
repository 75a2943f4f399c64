//! Subscriber setup.

use super::exporter::file_tracer_provider;
use super::{SERVICE_NAME, TRACE_FILE_NAME};
use crate::infrastructure::paths::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// Traces go to `~/.local/share/zellij/concierge/concierge-otlp.json` on the
/// host. The filter is `config.trace_level`, falling back to `info` when it is
/// unset or not a valid directive.
///
/// Only the first call installs a subscriber. If the data directory cannot be
/// created, tracing stays disabled.
///
/// # Example
///
/// ```rust,no_run
/// use concierge::observability::init_tracing;
/// use concierge::Config;
///
/// let config = Config {
///     trace_level: Some("concierge=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(dir.join(TRACE_FILE_NAME), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok() {
        tracing::info!(level = directive, "tracing initialized");
    }
}
