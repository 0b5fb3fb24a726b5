//! HTML helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Element that partial navigation swaps content into
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// URL of a post, with the slug percent-encoded as one path segment
pub fn post_href(slug: &str) -> String {
    format!("/blog/{}", utf8_percent_encode(slug, SEGMENT))
}

/// Attributes that turn a link into a partial navigation
pub fn hx_attrs(href: &str) -> String {
    format!(
        r##"hx-get="{}" hx-target="#{}" hx-push-url="true" hx-swap="innerHTML show:window:top""##,
        html_escape(href),
        MAIN_CONTENT_ID
    )
}

/// Generate an anchor that loads `href` into the main content region.
/// `inner` is trusted HTML.
///
/// # Examples
/// ```ignore
/// hx_link("/blog", "Blog", "text-sm")
/// // -> <a href="/blog" hx-get="/blog" hx-target="#main-content" ... class="text-sm">Blog</a>
/// ```
pub fn hx_link(href: &str, inner: &str, class: &str) -> String {
    format!(
        r#"<a href="{}" {} class="{}">{}</a>"#,
        html_escape(href),
        hx_attrs(href),
        class,
        inner
    )
}

/// Generate an anchor that opens in a new tab
pub fn external_link(href: &str, inner: &str, class: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
        html_escape(href),
        class,
        inner
    )
}

/// Tag badges, or an empty string when there are no tags
pub fn tag_badges(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let badges: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag tag-primary">{}</span>"#, html_escape(tag)))
        .collect();
    format!(r#"<div class="flex gap-2 flex-wrap">{}</div>"#, badges)
}
