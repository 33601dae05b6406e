// Presentation: one renderer per template, each producing a standalone HTML
// document that doubles as the print view. Renderers only read the record;
// skills and responsibilities always go through the resume derive functions.

pub mod classic;
pub mod creative;
pub mod handlers;
pub mod html;
pub mod minimalist;
pub mod modern;
pub mod templates;

pub use templates::TemplateKind;

use crate::resume::ResumeRecord;

/// Print/document title: `"{name} - {template}"`.
pub fn document_title(record: &ResumeRecord, kind: TemplateKind) -> String {
    let name = if record.name.is_empty() {
        "Resume"
    } else {
        record.name.as_str()
    };
    format!("{name} - {kind}")
}

/// Renders a validated record as a complete HTML page.
pub fn render(record: &ResumeRecord, kind: TemplateKind) -> String {
    let (style, body) = match kind {
        TemplateKind::Classic => (classic::STYLE, classic::render(record)),
        TemplateKind::Modern => (modern::STYLE, modern::render(record)),
        TemplateKind::Creative => (creative::STYLE, creative::render(record)),
        TemplateKind::Minimalist => (minimalist::STYLE, minimalist::render(record)),
    };
    html::document(&document_title(record, kind), style, body).into_string()
}
