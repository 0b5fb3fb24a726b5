//! Content module - posts, front-matter and markdown rendering

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use error::ContentError;
pub use frontmatter::{FrontMatter, ParseError};
pub use loader::{is_valid_slug, PostRepository};
pub use markdown::MarkdownRenderer;
pub use post::Post;
