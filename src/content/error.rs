//! Errors raised while reading posts

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no post named `{slug}`")]
    NotFound { slug: String },

    /// The slug could escape the posts directory or is otherwise not a file stem
    #[error("invalid post identifier `{slug}`")]
    InvalidSlug { slug: String },

    #[error("malformed front-matter in {path:?}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("unrecognised date `{value}`")]
    InvalidDate { value: String },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
