use maud::{html, Markup};

use crate::render::html::{bullet_list, date_range, link};
use crate::resume::{derive_responsibility_lines, derive_skill_list, ResumeRecord};

pub const STYLE: &str = "\
.creative{display:grid;grid-template-columns:1fr 2fr;gap:2rem;font-family:Inter,system-ui,sans-serif;\
background:linear-gradient(135deg,#eef2ff,#fff,#f3f4f6);padding:2rem}\
.creative .left{border-right:1px solid #c7d2fe;padding-right:1.5rem}\
.creative .left h1{color:#4f46e5;text-align:center}\
.creative h2{color:#4f46e5;margin:.75rem 0 .5rem}\
.creative .about{font-style:italic;background:#f3f4f6;padding:.75rem;border-radius:.375rem}\
.creative .chip{display:inline-block;background:#e0e7ff;border-radius:9999px;padding:.25rem .75rem;margin:.125rem;font-size:.75rem}";

pub fn render(record: &ResumeRecord) -> Markup {
    html! {
        article.resume.creative {
            div.left {
                h1 { (record.name) }
                section.contact {
                    h2 { "Contact" }
                    p { (record.email) }
                    p { (record.phone) }
                    p { (record.address) }
                    @if !record.linkedin.is_empty() {
                        p { (link(&record.linkedin, "LinkedIn")) }
                    }
                    @if !record.portfolio.is_empty() {
                        p { (link(&record.portfolio, "Portfolio")) }
                    }
                }
                section.skills {
                    h2 { "Skills" }
                    div {
                        @for skill in derive_skill_list(&record.skills) {
                            span.chip { (skill) }
                        }
                    }
                }
            }
            div.right {
                section {
                    h2 { "About Me" }
                    p.about { (record.summary) }
                }
                section {
                    h2 { "Experience" }
                    @for exp in &record.experience {
                        div.entry {
                            h3 { (exp.position) }
                            p.muted { (exp.company) " | " (date_range(&exp.start_date, &exp.end_date)) }
                            (bullet_list("responsibilities", &derive_responsibility_lines(&exp.responsibilities)))
                        }
                    }
                }
                section {
                    h2 { "Education" }
                    @for edu in &record.education {
                        div.entry {
                            h3 { (edu.degree) }
                            p.muted { (edu.institution) " | " (date_range(&edu.start_date, &edu.end_date)) }
                            @if let Some(description) = edu.description_text() {
                                p { em { (description) } }
                            }
                        }
                    }
                }
            }
        }
    }
}
