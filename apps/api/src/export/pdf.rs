//! Text layout of a resume onto A4 pages.
//!
//! `layout_lines` decides what goes on the page for a template (pure, tested);
//! `render_pdf` places those lines with an embedded DejaVu Sans, wrapping by an
//! average glyph width and starting a new page when the bottom margin is hit.
//! `render_pdf` is CPU-bound and is only called from inside `spawn_blocking`.
//!
//! The font is embedded as a CID font, so text is written as glyph ids rather
//! than WinAnsi bytes. DejaVu Sans covers Latin, Greek and Cyrillic; characters
//! it has no glyph for (CJK, emoji) are left out of the page.

use anyhow::{anyhow, Result};
use printpdf::{Mm, PdfDocument};

use crate::render::{document_title, TemplateKind};
use crate::resume::{derive_responsibility_lines, derive_skill_list, ResumeRecord};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const BULLET_INDENT_MM: f32 = 5.0;
const PT_TO_MM: f32 = 0.3528;
/// Average DejaVu Sans advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.55;
const LINE_SPACING: f32 = 1.4;

static REGULAR_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static BOLD_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Name,
    Contact,
    Heading,
    Title,
    Meta,
    Body,
    Bullet,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            LineStyle::Name => 20.0,
            LineStyle::Heading => 13.0,
            LineStyle::Title => 11.0,
            LineStyle::Meta => 9.0,
            LineStyle::Contact | LineStyle::Body | LineStyle::Bullet => 10.0,
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, LineStyle::Name | LineStyle::Heading | LineStyle::Title)
    }

    fn indent_mm(self) -> f32 {
        if self == LineStyle::Bullet {
            BULLET_INDENT_MM
        } else {
            0.0
        }
    }

    /// Extra space above the line.
    fn gap_before_mm(self) -> f32 {
        match self {
            LineStyle::Heading => 5.0,
            LineStyle::Title => 2.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLine {
    pub style: LineStyle,
    pub text: String,
}

impl PdfLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        PdfLine {
            style,
            text: text.into(),
        }
    }
}

fn heading(kind: TemplateKind, text: &str) -> PdfLine {
    let text = match kind {
        TemplateKind::Minimalist => text.to_uppercase(),
        _ => text.to_string(),
    };
    PdfLine::new(LineStyle::Heading, text)
}

/// The lines a template puts on paper, in order.
pub fn layout_lines(record: &ResumeRecord, kind: TemplateKind) -> Vec<PdfLine> {
    let mut lines = vec![
        PdfLine::new(LineStyle::Name, record.name.as_str()),
        PdfLine::new(
            LineStyle::Contact,
            format!("{} | {} | {}", record.email, record.phone, record.address),
        ),
    ];

    match kind {
        TemplateKind::Minimalist => {}
        TemplateKind::Creative => lines.push(heading(kind, "About Me")),
        _ => lines.push(heading(kind, "Summary")),
    }
    lines.push(PdfLine::new(LineStyle::Body, record.summary.as_str()));

    lines.push(heading(kind, "Experience"));
    for exp in &record.experience {
        let dates = format!("{} - {}", exp.start_date, exp.end_date);
        match kind {
            TemplateKind::Classic => {
                lines.push(PdfLine::new(
                    LineStyle::Title,
                    format!("{} at {}", exp.position, exp.company),
                ));
                lines.push(PdfLine::new(LineStyle::Meta, dates));
            }
            _ => {
                lines.push(PdfLine::new(LineStyle::Title, exp.position.as_str()));
                lines.push(PdfLine::new(
                    LineStyle::Meta,
                    format!("{} | {}", exp.company, dates),
                ));
            }
        }
        for bullet in derive_responsibility_lines(&exp.responsibilities) {
            lines.push(PdfLine::new(LineStyle::Bullet, bullet));
        }
    }

    lines.push(heading(kind, "Education"));
    for edu in &record.education {
        let dates = format!("{} - {}", edu.start_date, edu.end_date);
        match kind {
            TemplateKind::Classic => {
                lines.push(PdfLine::new(
                    LineStyle::Title,
                    format!("{} - {}", edu.degree, edu.institution),
                ));
                lines.push(PdfLine::new(LineStyle::Meta, dates));
            }
            _ => {
                lines.push(PdfLine::new(LineStyle::Title, edu.degree.as_str()));
                lines.push(PdfLine::new(
                    LineStyle::Meta,
                    format!("{} | {}", edu.institution, dates),
                ));
            }
        }
        if let Some(description) = edu.description_text() {
            lines.push(PdfLine::new(LineStyle::Body, description));
        }
    }

    lines.push(heading(kind, "Skills"));
    lines.push(PdfLine::new(
        LineStyle::Body,
        derive_skill_list(&record.skills).join(", "),
    ));

    if record.has_links() {
        lines.push(heading(kind, "Links"));
        for url in [&record.linkedin, &record.portfolio] {
            if !url.is_empty() {
                lines.push(PdfLine::new(LineStyle::Body, url.as_str()));
            }
        }
    }

    lines
}

/// Greedy word wrap; words longer than a line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn chars_per_line(style: LineStyle) -> usize {
    let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - style.indent_mm();
    let glyph_mm = style.font_size() * AVG_GLYPH_WIDTH * PT_TO_MM;
    (usable_mm / glyph_mm) as usize
}

pub fn render_pdf(record: &ResumeRecord, kind: TemplateKind) -> Result<Vec<u8>> {
    let title = document_title(record, kind);
    let (doc, page, layer) = PdfDocument::new(
        title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let regular = doc
        .add_external_font(REGULAR_FONT)
        .map_err(|e| anyhow!("failed to load DejaVu Sans: {e:?}"))?;
    let bold = doc
        .add_external_font(BOLD_FONT)
        .map_err(|e| anyhow!("failed to load DejaVu Sans Bold: {e:?}"))?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut page_count = 1;
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for line in layout_lines(record, kind) {
        let style = line.style;
        let size = style.font_size();
        let leading = size * PT_TO_MM * LINE_SPACING;
        let font = if style.is_bold() { &bold } else { &regular };
        y -= style.gap_before_mm();

        for (i, chunk) in wrap_text(&line.text, chars_per_line(style)).into_iter().enumerate() {
            if y - leading < MARGIN_MM {
                page_count += 1;
                let (next_page, next_layer) = doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Layer {page_count}"),
                );
                current_layer = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            y -= leading;

            let (text, x) = match (style, i) {
                (LineStyle::Bullet, 0) => (format!("- {chunk}"), MARGIN_MM),
                _ => (chunk, MARGIN_MM + style.indent_mm()),
            };
            current_layer.use_text(text, size, Mm(x), Mm(y), font);
        }
    }

    tracing::debug!(pages = page_count, "laid out resume pdf");

    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to serialize pdf: {e:?}"))
}
