//! Post model

use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;

/// A blog post read from `<posts_dir>/<slug>.md`
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// File stem, used as the URL segment
    pub slug: String,

    /// Post title, "Untitled" when the front-matter has none
    pub title: String,

    /// Publication date; `None` for undated posts
    pub date: Option<DateTime<Local>>,

    /// Short summary, empty when absent
    pub excerpt: String,

    pub tags: Vec<String>,

    /// Raw markdown body with the front-matter stripped
    pub content: String,

    /// When the file was read
    pub loaded_at: DateTime<Local>,
}

impl Post {
    pub const DEFAULT_TITLE: &'static str = "Untitled";

    /// Create a post with only a slug and body; metadata takes defaults
    pub fn new(slug: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: Self::DEFAULT_TITLE.to_string(),
            date: None,
            excerpt: String::new(),
            tags: Vec::new(),
            content: content.into(),
            loaded_at: Local::now(),
        }
    }

    /// Date shown to readers. Undated posts show the time they were read.
    pub fn display_date(&self) -> DateTime<Local> {
        self.date.unwrap_or(self.loaded_at)
    }

    /// Date for listings, e.g. `2024-01-15`
    pub fn short_date(&self) -> String {
        crate::helpers::short_date(&self.display_date())
    }

    /// Date for the post page, e.g. `January 15, 2024`
    pub fn long_date(&self) -> String {
        crate::helpers::full_date(&self.display_date())
    }

    /// Newest first; undated posts after every dated one
    pub fn cmp_newest_first(&self, other: &Post) -> Ordering {
        match (&self.date, &other.date) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
