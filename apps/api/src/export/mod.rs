//! PDF export — pluggable, trait-based exporter for a validated resume.
//!
//! Default: `PrintPdfExporter` (text layout via printpdf, runs on the blocking pool).
//! `AppState` holds an `Arc<dyn PdfExporter>`.

pub mod handlers;
pub mod pdf;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::render::{document_title, TemplateKind};
use crate::resume::ResumeRecord;

/// Implement this to swap export backends without touching the handler.
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, record: ResumeRecord, kind: TemplateKind) -> Result<Vec<u8>, AppError>;
}

pub struct PrintPdfExporter;

#[async_trait]
impl PdfExporter for PrintPdfExporter {
    async fn export(&self, record: ResumeRecord, kind: TemplateKind) -> Result<Vec<u8>, AppError> {
        // CPU-bound layout — spawn_blocking to avoid blocking the async executor.
        tokio::task::spawn_blocking(move || pdf::render_pdf(&record, kind))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in pdf export: {e}")))?
            .map_err(|e| AppError::Export(e.to_string()))
    }
}

/// Download name derived from the document title, restricted to characters
/// that survive a `Content-Disposition` header.
pub fn export_filename(record: &ResumeRecord, kind: TemplateKind) -> String {
    let stem: String = document_title(record, kind)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::sample_record;

    #[test]
    fn test_export_filename() {
        let mut record = sample_record();
        assert_eq!(
            export_filename(&record, TemplateKind::Modern),
            "Grace_Hopper_-_modern.pdf"
        );
        record.name = "Zoë \"Z\" O'Brien".to_string();
        let name = export_filename(&record, TemplateKind::Classic);
        assert!(name.is_ascii());
        assert!(!name.contains('"'));
        assert!(name.ends_with("_-_classic.pdf"));
    }

    #[tokio::test]
    async fn test_print_pdf_exporter() {
        let bytes = PrintPdfExporter
            .export(sample_record(), TemplateKind::Creative)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
