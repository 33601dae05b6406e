use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::export::export_filename;
use crate::render::handlers::TemplateQuery;
use crate::resume::{validate, ResumeRecord};
use crate::state::AppState;

/// POST /api/v1/export/pdf?template=classic
///
/// Validates, then returns the PDF as an attachment.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
    Json(candidate): Json<ResumeRecord>,
) -> Result<Response, AppError> {
    let kind = query.resolve(state.config.default_template)?;
    let record = validate(candidate)?;
    let filename = export_filename(&record, kind);

    let started = Instant::now();
    let pdf = state.exporter.export(record, kind).await?;
    tracing::info!(
        template = %kind,
        bytes = pdf.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "exported resume pdf"
    );

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
