use maud::{html, Markup};

use crate::render::html::{bullet_list, date_range, link};
use crate::resume::{derive_responsibility_lines, derive_skill_list, ResumeRecord};

pub const STYLE: &str = "\
.classic{font-family:Georgia,serif}\
.classic header{background:#f3f4f6;padding:1.5rem;text-align:center}\
.classic .contact{display:flex;flex-wrap:wrap;justify-content:center;gap:1rem;font-size:.875rem}\
.classic section{padding:1rem 2rem;border-top:1px solid #e5e7eb}\
.classic h2{font-size:1.25rem;margin-bottom:.75rem;border-bottom:1px solid #e5e7eb}\
.classic .pill{display:inline-block;background:#f3f4f6;border-radius:9999px;padding:.25rem .75rem;margin:.125rem}";

pub fn render(record: &ResumeRecord) -> Markup {
    html! {
        article.resume.classic {
            header {
                h1 { (record.name) }
                div.contact {
                    span { (record.email) }
                    span { (record.phone) }
                    span { (record.address) }
                }
            }
            section {
                h2 { "Summary" }
                p { (record.summary) }
            }
            section {
                h2 { "Experience" }
                @for exp in &record.experience {
                    div.entry {
                        h3 { (exp.position) " at " (exp.company) }
                        p.muted { (date_range(&exp.start_date, &exp.end_date)) }
                        (bullet_list("responsibilities", &derive_responsibility_lines(&exp.responsibilities)))
                    }
                }
            }
            section {
                h2 { "Education" }
                @for edu in &record.education {
                    div.entry {
                        h3 { (edu.degree) " - " (edu.institution) }
                        p.muted { (date_range(&edu.start_date, &edu.end_date)) }
                        @if let Some(description) = edu.description_text() {
                            p { em { (description) } }
                        }
                    }
                }
            }
            section {
                h2 { "Skills" }
                div.skills {
                    @for skill in derive_skill_list(&record.skills) {
                        span.pill { (skill) }
                    }
                }
            }
            // Always present in this layout, even with no links.
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
