//! Error pages shown inside the normal layout

use super::Fragment;
use crate::helpers::{html_escape, hx_link};

/// Heading, explanation and a way back to the blog
pub fn compose_error(heading: &str, message: &str) -> Fragment {
    Fragment::new(format!(
        r#"<h2 class="text-accent-error text-2xl mb-4">{}</h2><p class="text-muted mb-4">{}</p>{}"#,
        html_escape(heading),
        html_escape(message),
        hx_link("/blog", "\u{2190} Back to blog", "text-accent-link")
    ))
}

pub fn compose_not_found() -> Fragment {
    compose_error(
        "404 - Post Not Found",
        "The requested post could not be found.",
    )
}

pub fn compose_bad_request() -> Fragment {
    compose_error(
        "400 - Bad Request",
        "That is not a valid post address.",
    )
}
