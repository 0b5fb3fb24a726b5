//! Page shell
//!
//! A full navigation gets the whole document: head, navigation bar, effect
//! canvas and footer around the content. A partial navigation only needs the
//! title and the content, which the client swaps into `#main-content`.

mod theme;

pub use theme::{theme_script, theme_switcher, THEME_STORAGE_KEY};

use crate::config::SiteConfig;
use crate::helpers::{html_escape, hx_attrs, hx_link, MAIN_CONTENT_ID};
use crate::pages::Fragment;

const FONT_LINKS: &str = r#"<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="">
<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=IBM+Plex+Mono:wght@400;500;600;700&display=swap">"#;

const EFFECTS_SCRIPT: &str = "/static/js/effects.js";

/// htmx 2 leaves 4xx/5xx bodies unswapped by default; error pages are
/// real pages here, so swap them too
const HTMX_CONFIG: &str = r#"<meta name="htmx-config" content='{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true},{"code":"...","swap":false}]}'>"#;

const CANVAS_ID: &str = "bg-canvas";

const BASE_STYLES: &str = r#"<style>
.effect-canvas { position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; }
.content-overlay { position: relative; z-index: 1; background: rgba(26, 31, 41, 0.85); backdrop-filter: blur(4px); }
[data-theme="light"] .content-overlay { background: rgba(238, 241, 245, 0.9); }
.social-link { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.25rem; border: 1px solid var(--accent-primary); transition: all 0.2s ease; font-size: 0.9rem; }
.social-link:hover { background: var(--accent-primary); color: var(--bg-deep); box-shadow: 0 0 20px var(--accent-primary); }
.effect-btn { padding: 0.75rem 1rem; border: 1px solid var(--fg-muted); background: var(--bg-surface); cursor: pointer; transition: all 0.2s ease; font-family: var(--font-mono); font-size: 0.875rem; min-width: 5rem; text-align: center; }
@media (min-width: 640px) { .effect-btn { padding: 0.5rem 1rem; font-size: 0.75rem; } }
.effect-btn:hover, .effect-btn.active { border-color: var(--accent-primary); color: var(--accent-primary); }
.blog-card { border: 1px solid var(--bg-overlay); padding: 1rem; transition: all 0.2s ease; }
.blog-card:hover { border-color: var(--accent-primary); box-shadow: 0 0 10px rgba(0, 170, 255, 0.2); }
</style>"#;

/// How the client asked for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Ordinary browser load; needs the whole document
    Full,
    /// Client-side navigation replacing only the content region
    Partial,
}

/// Output of [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Document(String),
    Fragment(String),
}

impl Rendered {
    pub fn is_partial(&self) -> bool {
        matches!(self, Rendered::Fragment(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Document(html) | Rendered::Fragment(html) => html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Rendered::Document(html) | Rendered::Fragment(html) => html,
        }
    }
}

/// Wrap `content` in the page shell, or return it bare for partial requests.
/// An empty `page_title` falls back to the site title.
pub fn render(
    config: &SiteConfig,
    content: Fragment,
    page_title: &str,
    mode: NavigationMode,
    show_effects: bool,
) -> Rendered {
    let page_title = if page_title.is_empty() {
        config.title.as_str()
    } else {
        page_title
    };
    let title = format!("<title>{}</title>", html_escape(page_title));

    if mode == NavigationMode::Partial {
        return Rendered::Fragment(format!("{}{}", title, content));
    }

    let (canvas, init_script) = if show_effects {
        (
            format!(r#"<canvas id="{}" class="effect-canvas"></canvas>"#, CANVAS_ID),
            format!(
                r#"<script>document.addEventListener('DOMContentLoaded', () => effectManager.init('{}', '{}'));</script>"#,
                CANVAS_ID,
                html_escape(&config.default_effect)
            ),
        )
    } else {
        (String::new(), String::new())
    };

    Rendered::Document(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
{title}
{head}
</head>
<body class="min-h-screen flex flex-col">
{canvas}<div class="flex flex-col min-h-screen">{nav}<div class="content-overlay flex-1"><main class="container py-8 flex-1" id="{main_id}">{content}</main></div>{footer}</div>
{init_script}
</body>
</html>
"#,
        title = title,
        head = head(config),
        canvas = canvas,
        nav = navbar(config),
        main_id = MAIN_CONTENT_ID,
        content = content,
        footer = footer(config),
        init_script = init_script,
    ))
}

fn head(config: &SiteConfig) -> String {
    let stylesheets: Vec<String> = config
        .stylesheets
        .iter()
        .map(|href| format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(href)))
        .collect();

    [
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
        format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(&config.description)
        ),
        FONT_LINKS.to_string(),
        stylesheets.join("\n"),
        HTMX_CONFIG.to_string(),
        format!(r#"<script src="{}"></script>"#, html_escape(&config.htmx_src)),
        theme_script(config),
        format!(r#"<script src="{}"></script>"#, EFFECTS_SCRIPT),
        BASE_STYLES.to_string(),
    ]
    .join("\n")
}

fn navbar(config: &SiteConfig) -> String {
    let brand = format!(
        r#"<a href="/" {} class="text-lg"><span class="font-bold text-accent-primary">{}</span></a>"#,
        hx_attrs("/"),
        html_escape(&config.brand)
    );

    let links = format!(
        r#"<div class="flex gap-10 items-center">{}{}</div>"#,
        hx_link("/", "Home", "hover:text-accent-primary transition-all"),
        hx_link("/blog", "Blog", "hover:text-accent-primary transition-all")
    );

    format!(
        r#"<nav class="bg-surface border-b border-overlay"><div class="flex items-center justify-between container py-4">{}{}{}</div></nav>"#,
        brand,
        links,
        theme_switcher()
    )
}

fn footer(config: &SiteConfig) -> String {
    format!(
        r#"<footer class="content-overlay border-t border-overlay"><div class="container py-4 text-center"><span class="text-muted text-sm">{}</span></div></footer>"#,
        html_escape(&config.copyright)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Fragment {
        Fragment::new("<p>Body</p>")
    }

    #[test]
    fn test_partial_is_title_and_fragment() {
        let out = render(
            &SiteConfig::default(),
            content(),
            "Blog",
            NavigationMode::Partial,
            true,
        );
        assert!(out.is_partial());
        assert_eq!(out.as_str(), "<title>Blog</title><p>Body</p>");
    }

    #[test]
    fn test_full_document() {
        let out = render(
            &SiteConfig::default(),
            content(),
            "Blog",
            NavigationMode::Full,
            true,
        );
        assert!(!out.is_partial());
        let html = out.as_str();

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Blog</title>"));
        assert!(html.contains("<nav"));
        assert!(html.contains("<footer"));
        assert!(html.contains(r#"<main class="container py-8 flex-1" id="main-content"><p>Body</p></main>"#));
        assert!(html.contains(r#"<canvas id="bg-canvas""#));
        assert!(html.contains("effectManager.init('bg-canvas', 'matrix')"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains(r#"<meta name="htmx-config""#));
        assert!(html.contains(r#"{"code":"[45]..","swap":true,"error":true}"#));
        assert!(html.contains("/static/css/terminal.css"));
        assert!(html.contains("cycleTheme()"));
        assert!(html.contains("\u{00a9} 2025"));
    }

    #[test]
    fn test_effects_can_be_omitted() {
        let out = render(
            &SiteConfig::default(),
            content(),
            "Blog",
            NavigationMode::Full,
            false,
        );
        assert!(!out.as_str().contains("<canvas"));
        assert!(!out.as_str().contains("effectManager.init"));
    }

    #[test]
    fn test_title_escaped_and_defaulted() {
        let config = SiteConfig::default();
        let out = render(&config, content(), "<Hi>", NavigationMode::Partial, true);
        assert!(out.as_str().starts_with("<title>&lt;Hi&gt;</title>"));

        let out = render(&config, content(), "", NavigationMode::Partial, true);
        assert!(out.as_str().starts_with("<title>Robbie Preswick</title>"));
    }
}
