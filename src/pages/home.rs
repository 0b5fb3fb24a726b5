//! Home page: hero, effect selector and recent posts

use super::Fragment;
use crate::config::{SiteConfig, SocialLink};
use crate::content::Post;
use crate::helpers::{external_link, html_escape, hx_link, post_href};

/// Build the home page from the most recent posts.
/// At most `config.recent_posts` summaries are shown.
pub fn compose_home(config: &SiteConfig, recent_posts: &[Post]) -> Fragment {
    let hero = format!(
        r#"<div class="text-center py-12"><h1 class="text-3xl md:text-4xl font-bold mb-4 glow-text-subtle">{}</h1><p class="text-secondary text-lg mb-8">{}</p>{}</div>"#,
        html_escape(&config.author),
        html_escape(&config.tagline),
        social_links(&config.socials)
    );

    let effects = if config.effects.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="py-8 border-t border-overlay"><h2 class="text-xl font-semibold mb-4 text-center">Visual Effects</h2>{}</div>"#,
            effect_controls(&config.effects)
        )
    };

    let list = if recent_posts.is_empty() {
        r#"<p class="text-muted">No posts yet.</p>"#.to_string()
    } else {
        let items: String = recent_posts
            .iter()
            .take(config.recent_posts)
            .map(recent_post_card)
            .collect();
        format!(r#"<div class="grid gap-4">{}</div>"#, items)
    };

    let blog = format!(
        r#"<div class="py-8 border-t border-overlay"><div class="flex justify-between items-center mb-4"><h2 class="text-xl font-semibold">Recent Posts</h2>{}</div>{}</div>"#,
        hx_link("/blog", "View all \u{2192}", "text-sm text-accent-link"),
        list
    );

    Fragment::new(format!("{}{}{}", hero, effects, blog))
}

fn social_links(socials: &[SocialLink]) -> String {
    let links: String = socials
        .iter()
        .map(|s| {
            external_link(
                &s.url,
                &format!("<span>{}</span>", html_escape(&s.name)),
                "social-link",
            )
        })
        .collect();
    format!(
        r#"<div class="flex flex-wrap gap-4 justify-center">{}</div>"#,
        links
    )
}

fn effect_controls(effects: &[String]) -> String {
    let buttons: String = effects
        .iter()
        .map(|effect| {
            let effect = html_escape(effect);
            format!(
                r#"<button onclick="effectManager.init('bg-canvas', '{0}')" class="effect-btn flex-1 sm:flex-none" id="btn-{0}">{1}</button>"#,
                effect,
                capitalize(&effect)
            )
        })
        .collect();

    format!(
        r#"<div class="flex flex-col sm:flex-row items-center gap-2 justify-center"><span class="text-muted text-sm mb-2 block text-center sm:hidden">Effect:</span><span class="text-muted text-sm mr-2 hidden sm:inline">Effect: </span><div class="grid grid-cols-2 gap-2 w-full sm:flex sm:flex-wrap sm:justify-center sm:gap-2 sm:w-auto">{}</div></div>"#,
        buttons
    )
}

fn recent_post_card(post: &Post) -> String {
    let excerpt = if post.excerpt.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-muted text-sm">{}</p>"#,
            html_escape(&post.excerpt)
        )
    };

    let inner = format!(
        r#"<div><h3 class="font-semibold mb-1">{}</h3>{}<span class="text-muted text-xs">{}</span></div>"#,
        html_escape(&post.title),
        excerpt,
        post.short_date()
    );

    format!(
        r#"<div class="blog-card">{}</div>"#,
        hx_link(&post_href(&post.slug), &inner, "block")
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
