//! Blog listing and single post pages

use super::Fragment;
use crate::content::{MarkdownRenderer, Post};
use crate::helpers::{html_escape, hx_link, post_href, tag_badges, time_tag};

const BLOG_HEADING: &str = r#"<h1 class="text-2xl font-bold mb-8">Blog</h1>"#;

/// One summary card per post, or a placeholder when there are none
pub fn compose_blog_list(posts: &[Post]) -> Fragment {
    if posts.is_empty() {
        return Fragment::new(format!(
            r#"{}<p class="text-muted">No blog posts yet. Check back soon!</p>"#,
            BLOG_HEADING
        ));
    }

    let cards: String = posts.iter().map(blog_card).collect();
    Fragment::new(format!(
        r#"{}<div class="grid gap-4">{}</div>"#,
        BLOG_HEADING, cards
    ))
}

fn blog_card(post: &Post) -> String {
    let excerpt = if post.excerpt.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-secondary text-sm mb-2">{}</p>"#,
            html_escape(&post.excerpt)
        )
    };

    let inner = format!(
        r#"<div><h3 class="font-semibold mb-2">{}</h3>{}<div class="flex justify-between items-center flex-wrap gap-2"><span class="text-muted text-sm">{}</span>{}</div></div>"#,
        html_escape(&post.title),
        excerpt,
        post.short_date(),
        tag_badges(&post.tags)
    );

    format!(
        r#"<div class="blog-card">{}</div>"#,
        hx_link(&post_href(&post.slug), &inner, "block")
    )
}

/// Full article: header, rendered markdown body and a link back to the list
pub fn compose_blog_post(post: &Post, markdown: &MarkdownRenderer) -> Fragment {
    let header = format!(
        r#"<div><h1 class="text-2xl font-bold mb-2">{}</h1><div class="flex justify-between items-center flex-wrap gap-4 mb-8"><span class="text-muted">{}</span>{}</div></div>"#,
        html_escape(&post.title),
        time_tag(&post.display_date(), &post.long_date()),
        tag_badges(&post.tags)
    );

    let body = markdown.render(&post.content);

    let footer = format!(
        r#"<div><hr class="divider my-8">{}</div>"#,
        hx_link("/blog", "\u{2190} Back to blog", "text-accent-link")
    );

    Fragment::new(format!(
        r#"<article class="max-w-2xl">{}<div class="prose">{}</div>{}</article>"#,
        header, body, footer
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post() -> Post {
        let mut post = Post::new("hello", "# Heading\n\nSome *text*.\n");
        post.title = "Hello <World>".to_string();
        post.excerpt = "First".to_string();
        post.tags = vec!["rust".to_string(), "web".to_string()];
        post.date = Some(Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        post
    }

    #[test]
    fn test_blog_list_empty() {
        let html = compose_blog_list(&[]);
        assert!(html.as_str().contains("No blog posts yet. Check back soon!"));
        assert!(!html.as_str().contains("blog-card"));
    }

    #[test]
    fn test_blog_list_cards() {
        let mut second = post();
        second.slug = "other".to_string();
        second.tags.clear();
        let html = compose_blog_list(&[post(), second]);
        let html = html.as_str();

        assert_eq!(html.matches(r#"class="blog-card""#).count(), 2);
        assert!(html.contains(r#"href="/blog/hello""#));
        assert!(html.contains(r#"href="/blog/other""#));
        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("2024-01-01"));
        assert_eq!(html.matches("tag tag-primary").count(), 2);
    }

    #[test]
    fn test_blog_post() {
        let renderer = MarkdownRenderer::new();
        let html = compose_blog_post(&post(), &renderer);
        let html = html.as_str();

        assert!(html.contains("Hello &lt;World&gt;"));
        assert!(html.contains("January 01, 2024"));
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains(r#"<span class="tag tag-primary">web</span>"#));
        assert!(html.contains("Back to blog"));
        assert!(html.contains(r#"href="/blog""#));
    }
}
