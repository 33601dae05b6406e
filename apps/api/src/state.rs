use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::resume::IdGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: the record being edited lives with the caller, never here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entry id source. Default: UuidIdGenerator.
    pub ids: Arc<dyn IdGenerator>,
    /// Pluggable PDF backend. Default: PrintPdfExporter.
    pub exporter: Arc<dyn PdfExporter>,
}
