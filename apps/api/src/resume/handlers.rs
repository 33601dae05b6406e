//! Axum route handlers for the form layer.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::edit::{apply_edit, ResumeEdit};
use crate::resume::{
    default_record, derive_responsibility_lines, derive_skill_list, validate, ResumeRecord,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub record: ResumeRecord,
    pub edit: ResumeEdit,
}

#[derive(Debug, Serialize)]
pub struct ResponsibilityLines {
    pub id: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub valid: bool,
    pub record: ResumeRecord,
    pub skills: Vec<String>,
    pub responsibilities: Vec<ResponsibilityLines>,
}

/// GET /api/v1/resume/default
pub async fn handle_default_record() -> Json<ResumeRecord> {
    Json(default_record())
}

/// POST /api/v1/resume/edit
///
/// Applies one form edit to the caller's record and returns the new record.
pub async fn handle_edit(
    State(state): State<AppState>,
    Json(req): Json<EditRequest>,
) -> Result<Json<ResumeRecord>, AppError> {
    tracing::debug!(edit = ?req.edit, "applying resume edit");
    let record = apply_edit(&req.record, req.edit, state.ids.as_ref())?;
    Ok(Json(record))
}

/// POST /api/v1/resume/validate
///
/// Submit: the record is materialized only when every field passes.
pub async fn handle_validate(
    Json(candidate): Json<ResumeRecord>,
) -> Result<Json<SubmitResponse>, AppError> {
    let record = validate(candidate).map_err(|errors| {
        tracing::info!(fields = errors.len(), "resume submission rejected");
        errors
    })?;

    let skills = derive_skill_list(&record.skills);
    let responsibilities = record
        .experience
        .iter()
        .map(|e| ResponsibilityLines {
            id: e.id.clone(),
            lines: derive_responsibility_lines(&e.responsibilities),
        })
        .collect();

    Ok(Json(SubmitResponse {
        valid: true,
        record,
        skills,
        responsibilities,
    }))
}
