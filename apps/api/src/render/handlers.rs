//! Axum route handlers for template listing and HTML preview.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::errors::AppError;
use crate::render::{render, TemplateKind};
use crate::resume::{validate, ResumeRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub template: Option<String>,
}

impl TemplateQuery {
    /// The requested template, or the configured default when none was given.
    pub fn resolve(&self, default: TemplateKind) -> Result<TemplateKind, AppError> {
        match self.template.as_deref() {
            None | Some("") => Ok(default),
            Some(name) => TemplateKind::from_str(name)
                .map_err(|_| AppError::Validation(format!("Unknown template '{name}'"))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub key: TemplateKind,
    pub label: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TemplateKind::iter()
            .map(|key| TemplateInfo {
                key,
                label: key.label(),
            })
            .collect(),
    )
}

/// POST /api/v1/render?template=modern
///
/// Validates the record first; an invalid record is never rendered.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
    Json(candidate): Json<ResumeRecord>,
) -> Result<Html<String>, AppError> {
    let kind = query.resolve(state.config.default_template)?;
    let record = validate(candidate)?;

    tracing::info!(template = %kind, "rendering resume preview");
    Ok(Html(render(&record, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_template_query() {
        let q = TemplateQuery { template: None };
        assert_eq!(q.resolve(TemplateKind::Creative).unwrap(), TemplateKind::Creative);

        let q = TemplateQuery {
            template: Some("minimalist".to_string()),
        };
        assert_eq!(q.resolve(TemplateKind::Classic).unwrap(), TemplateKind::Minimalist);

        let q = TemplateQuery {
            template: Some("baroque".to_string()),
        };
        assert!(matches!(
            q.resolve(TemplateKind::Classic),
            Err(AppError::Validation(_))
        ));
    }
}
