//! Span exporter writing OTLP JSON lines to a rotating file.

use super::otlp::batch_document;
use super::rotation::RotatingFile;
use super::SERVICE_NAME;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::future::ready;
use std::path::PathBuf;

/// Writes each exported batch as one OTLP JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(ready(Err(TraceError::from("file exporter is shut down"))));
        }

        let line = batch_document(&self.resource, SERVICE_NAME, &batch).to_string();
        let result = self
            .file
            .append(&line)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider that exports every finished span to `path`.
///
/// Spans are exported synchronously as they end; the plugin runs on a single
/// thread without an async runtime for a batch processor.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);

        let provider = file_tracer_provider(path.clone(), resource);
        provider.tracer("test").in_span("overlay.open", |_cx| {});

        let written = std::fs::read_to_string(&path).unwrap();
        let line = written.lines().next().unwrap();
        let doc: serde_json::Value = serde_json::from_str(line).unwrap();

        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "overlay.open"
        );
    }
}
