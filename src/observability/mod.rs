//! OpenTelemetry tracing with file-based OTLP export.
//!
//! Spans and events from the `tracing` macros are exported as OTLP JSON,
//! one batch per line, to a size-capped file in the plugin data directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → FileSpanExporter → concierge-otlp.json
//! ```
//!
//! The file rotates at 10 MB and keeps three numbered backups
//! (`concierge-otlp.json.1` is the newest).
//!
//! The level filter comes from the `trace_level` plugin option and uses
//! `EnvFilter` directive syntax, e.g. `"info"` or `"concierge=debug"`.
//! Tracing is best effort: if the data directory cannot be created the plugin
//! runs without it.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: the `SpanExporter` writing to disk
//! - `otlp`: span data to OTLP JSON
//! - `rotation`: size-capped append-only file

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::init_tracing;

/// Service name reported in the OTLP resource.
pub const SERVICE_NAME: &str = "Concierge";

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "concierge-otlp.json";
