//! Page composition
//!
//! Each function builds the content for one page type. The output carries no
//! site chrome; wrapping it is the job of [`crate::layout`].

mod blog;
mod error;
mod home;

pub use blog::{compose_blog_list, compose_blog_post};
pub use error::{compose_bad_request, compose_error, compose_not_found};
pub use home::compose_home;

use std::fmt;

/// An HTML sub-tree without navigation or footer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
