use maud::{html, Markup};

use crate::render::html::{bullet_list, date_range, link};
use crate::resume::{derive_responsibility_lines, derive_skill_list, ResumeRecord};

pub const STYLE: &str = "\
.modern{display:flex;font-family:Inter,system-ui,sans-serif}\
.modern aside{width:33%;background:#f3f4f6;padding:1.5rem}\
.modern main{width:67%;padding:2rem}\
.modern .avatar{width:6rem;height:6rem;margin:0 auto 1rem;border-radius:50%;border:4px solid #2563eb;\
display:flex;align-items:center;justify-content:center;font-size:1.875rem}\
.modern aside h1{text-align:center;margin-bottom:1rem}\
.modern h2{color:#2563eb;margin-bottom:.5rem}\
.modern .timeline{border-left:2px solid #2563eb;padding-left:1rem}\
.modern .tag{display:inline-block;background:#fff;border-radius:.25rem;padding:.25rem .5rem;margin:.125rem;font-size:.75rem}";

/// First character of every whitespace-separated part of the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

pub fn render(record: &ResumeRecord) -> Markup {
    html! {
        article.resume.modern {
            aside {
                div.avatar { (initials(&record.name)) }
                h1 { (record.name) }
                section.contact {
                    h2 { "Contact" }
                    p { (record.email) }
                    p { (record.phone) }
                    p { (record.address) }
                }
                section.skills {
                    h2 { "Skills" }
                    div {
                        @for skill in derive_skill_list(&record.skills) {
                            span.tag { (skill) }
                        }
                    }
                }
            }
            main {
                section {
                    h2 { "Summary" }
                    p { (record.summary) }
                }
                section {
                    h2 { "Experience" }
                    div.timeline {
                        @for exp in &record.experience {
                            div.entry {
                                h3 { (exp.position) }
                                p.muted { (exp.company) }
                                p.muted { (date_range(&exp.start_date, &exp.end_date)) }
                                (bullet_list("responsibilities", &derive_responsibility_lines(&exp.responsibilities)))
                            }
                        }
                    }
                }
                section {
                    h2 { "Education" }
                    div.timeline {
                        @for edu in &record.education {
                            div.entry {
                                h3 { (edu.degree) }
                                p.muted { (edu.institution) }
                                p.muted { (date_range(&edu.start_date, &edu.end_date)) }
                                @if let Some(description) = edu.description_text() {
                                    p { em { (description) } }
                                }
                            }
                        }
                    }
                }
                @if record.has_links() {
                    section.links {
                        h2 { "Links" }
                        @if !record.linkedin.is_empty() {
                            div { (link(&record.linkedin, "LinkedIn Profile")) }
                        }
                        @if !record.portfolio.is_empty() {
                            div { (link(&record.portfolio, "Portfolio Website")) }
                        }
                    }
                }
            }
        }
    }
}
