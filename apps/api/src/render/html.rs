//! Shared HTML building blocks for the template renderers.
//!
//! Everything is built with `maud::html!`, so interpolated record text is
//! escaped on the way out. Only the stylesheets go in as `PreEscaped`.

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// An anchor for `url` when its scheme is safe to follow from a printed page,
/// otherwise the text in a plain span.
pub fn link(url: &str, text: &str) -> Markup {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let followable = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));

    html! {
        @if followable {
            a href=(url) target="_blank" rel="noopener noreferrer" { (text) }
        } @else {
            span { (text) }
        }
    }
}

pub fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// `<ul>` of already-derived lines, or nothing when there are none.
pub fn bullet_list(class: &str, lines: &[String]) -> Markup {
    html! {
        @if !lines.is_empty() {
            ul class=(class) {
                @for line in lines {
                    li { (line) }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.page-footer { "© " (Utc::now().year()) " ResumeForge." }
    }
}

const BASE_STYLE: &str = "\
*{box-sizing:border-box}\
body{margin:0;padding:2rem;background:#fff;color:#1f2937}\
.resume{max-width:48rem;margin:0 auto}\
h1,h2,h3{margin:0}\
ul{margin:.25rem 0;padding-left:1.25rem}\
a{color:inherit}\
.muted{color:#6b7280}\
.page-footer{margin-top:3rem;text-align:center;font-size:.75rem;color:#6b7280}\
@media print{body{padding:0}.page-footer{display:none}}";

/// Wraps a rendered body into a standalone printable document.
pub fn document(title: &str, style: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(BASE_STYLE)) (PreEscaped(style)) }
            }
            body {
                (body)
                (footer())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_only_follows_web_schemes() {
        let anchor = link(" https://ada.dev ", "Portfolio").into_string();
        assert!(anchor.contains(r#"href="https://ada.dev""#));

        let js = link("javascript:alert(1)", "LinkedIn").into_string();
        assert!(!js.contains("href"));
        assert_eq!(js, "<span>LinkedIn</span>");
    }

    #[test]
    fn test_link_escapes_attribute_and_text() {
        let anchor = link(r#"https://x.dev/?q="><script>"#, "<b>me</b>").into_string();
        assert!(anchor.contains(r#"href="https://x.dev/?q=&quot;&gt;&lt;script&gt;""#));
        assert!(anchor.contains("&lt;b&gt;me&lt;/b&gt;"));
        assert!(!anchor.contains("<script>"));
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list("x", &[]).into_string(), "");
        let html = bullet_list("x", &["a<b".to_string()]).into_string();
        assert_eq!(html, r#"<ul class="x"><li>a&lt;b</li></ul>"#);
    }

    #[test]
    fn test_document_has_title_and_footer() {
        let html = document("Ada & <Co> - classic", "", html! { main {} }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ada &amp; &lt;Co&gt; - classic</title>"));
        assert!(html.contains("<main></main>"));
        assert!(html.contains(&format!("© {} ResumeForge.", Utc::now().year())));
    }
}
