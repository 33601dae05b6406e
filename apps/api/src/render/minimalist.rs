use maud::{html, Markup};

use crate::render::html::{bullet_list, date_range, link};
use crate::resume::{derive_responsibility_lines, derive_skill_list, ResumeRecord};

pub const STYLE: &str = "\
.minimalist{font-family:Inter,system-ui,sans-serif;font-weight:300;padding:2.5rem}\
.minimalist header{text-align:center;border-bottom:1px solid #e5e7eb;padding-bottom:1rem}\
.minimalist header h1{font-size:2.25rem;font-weight:300;letter-spacing:.05em}\
.minimalist .contact{display:flex;flex-wrap:wrap;justify-content:center;gap:1rem;font-size:.75rem}\
.minimalist .summary{text-align:center}\
.minimalist h2{text-transform:uppercase;letter-spacing:.05em;font-size:1.125rem;margin:1.5rem 0 .75rem}\
.minimalist .row{display:flex;justify-content:space-between;align-items:baseline}";

/// Separator between skills on the single skills line.
pub const SKILL_SEPARATOR: &str = " · ";

pub fn render(record: &ResumeRecord) -> Markup {
    html! {
        article.resume.minimalist {
            header {
                h1 { (record.name) }
                div.contact {
                    span { (record.email) }
                    span { (record.phone) }
                    span { (record.address) }
                }
            }
            // No heading for the summary in this layout.
            section {
                p.summary { (record.summary) }
            }
            section {
                h2 { "Experience" }
                @for exp in &record.experience {
                    div.entry {
                        div.row {
                            h3 { (exp.position) }
                            span.muted { (date_range(&exp.start_date, &exp.end_date)) }
                        }
                        p.muted { (exp.company) }
                        (bullet_list("responsibilities", &derive_responsibility_lines(&exp.responsibilities)))
                    }
                }
            }
            section {
                h2 { "Education" }
                @for edu in &record.education {
                    div.entry {
                        div.row {
                            h3 { (edu.degree) }
                            span.muted { (date_range(&edu.start_date, &edu.end_date)) }
                        }
                        p.muted { (edu.institution) }
                        @if let Some(description) = edu.description_text() {
                            p { em { (description) } }
                        }
                    }
                }
            }
            section {
                h2 { "Skills" }
                p { (derive_skill_list(&record.skills).join(SKILL_SEPARATOR)) }
            }
            @if record.has_links() {
                section.links {
                    h2 { "Links" }
                    @if !record.linkedin.is_empty() {
                        div { (link(&record.linkedin, &record.linkedin)) }
                    }
                    @if !record.portfolio.is_empty() {
                        div { (link(&record.portfolio, &record.portfolio)) }
                    }
                }
            }
        }
    }
}
