//! Post repository - reads posts from the posts directory

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};

const MARKDOWN_EXTENSION: &str = "md";

/// Reads posts straight from disk on every call; nothing is cached
#[derive(Debug, Clone)]
pub struct PostRepository {
    posts_dir: PathBuf,
}

impl PostRepository {
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    /// All posts, newest first, truncated to `limit` when given.
    ///
    /// A missing posts directory yields no posts. Files that fail to load are
    /// logged and skipped so one bad file does not hide the rest.
    pub fn list_posts(&self, limit: Option<usize>) -> Result<Vec<Post>, ContentError> {
        if !self.posts_dir.exists() {
            tracing::debug!("Posts directory {:?} does not exist", self.posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.posts_dir.as_path()).to_path_buf();
                ContentError::io(path, e.into())
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            // Only list what `get_post` can serve back
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            if !is_valid_slug(stem) {
                tracing::warn!("Skipping post {:?}: file name is not a usable slug", path);
                continue;
            }

            match load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                }
            }
        }

        // Stable sort keeps file-name order among equal dates
        posts.sort_by(Post::cmp_newest_first);

        if let Some(limit) = limit {
            posts.truncate(limit);
        }

        Ok(posts)
    }

    /// Look up a single post by slug
    pub fn get_post(&self, slug: &str) -> Result<Post, ContentError> {
        let path = self.resolve(slug)?;

        let post = match load_post(&path) {
            Err(ContentError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                return Err(ContentError::NotFound {
                    slug: slug.to_string(),
                });
            }
            other => other?,
        };

        Ok(post)
    }

    /// Map a slug to `<posts_dir>/<slug>.md`, refusing anything that could
    /// land outside the posts directory
    fn resolve(&self, slug: &str) -> Result<PathBuf, ContentError> {
        let invalid = || ContentError::InvalidSlug {
            slug: slug.to_string(),
        };

        if !is_valid_slug(slug) {
            return Err(invalid());
        }

        let path = self
            .posts_dir
            .join(format!("{}.{}", slug, MARKDOWN_EXTENSION));
        if path.parent() != Some(self.posts_dir.as_path()) {
            return Err(invalid());
        }

        // Symlinks may still point elsewhere
        if let (Ok(base), Ok(resolved)) = (self.posts_dir.canonicalize(), path.canonicalize()) {
            if resolved.parent() != Some(base.as_path()) {
                tracing::warn!("Post {:?} resolves outside {:?}", path, base);
                return Err(invalid());
            }
        }

        Ok(path)
    }
}

/// Whether `slug` is a plain file stem: no path separators, no control
/// characters, no `..` and no leading dot
pub fn is_valid_slug(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_REGEX: Regex =
            Regex::new(r"^[^./\\\x00-\x1f\x7f][^/\\\x00-\x1f\x7f]*$").unwrap();
    }
    SLUG_REGEX.is_match(slug) && !slug.contains("..")
}

/// Read and parse one post file
fn load_post(path: &Path) -> Result<Post, ContentError> {
    let raw = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let (fm, body) = FrontMatter::parse(&raw).map_err(|e| ContentError::Frontmatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let date = fm.parse_date()?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::InvalidSlug {
            slug: path.to_string_lossy().to_string(),
        })?;

    let mut post = Post::new(slug, body);
    if let Some(title) = fm.title {
        post.title = title;
    }
    post.date = date;
    post.excerpt = fm.excerpt.unwrap_or_default();
    post.tags = fm.tags;

    Ok(post)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn sample_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "hello.md",
            "---\ntitle: \"Hello\"\ndate: 2024-01-01\n---\nHello body\n",
        );
        write(
            dir.path(),
            "world.md",
            "---\ntitle: \"World\"\ndate: 2024-06-01\nexcerpt: Round trip\ntags: [travel]\n---\nWorld body\n",
        );
        dir
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_list_posts_sorted_newest_first() {
        let dir = sample_dir();
        let repo = PostRepository::new(dir.path());

        let posts = repo.list_posts(None).unwrap();
        assert_eq!(titles(&posts), vec!["World", "Hello"]);
        assert_eq!(posts[0].excerpt, "Round trip");
        assert_eq!(posts[0].tags, vec!["travel"]);
        assert_eq!(posts[1].content, "Hello body\n");
    }

    #[test]
    fn test_list_posts_limit() {
        let dir = sample_dir();
        let repo = PostRepository::new(dir.path());

        assert_eq!(titles(&repo.list_posts(Some(1)).unwrap()), vec!["World"]);
        assert_eq!(repo.list_posts(Some(10)).unwrap().len(), 2);
        assert!(repo.list_posts(Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = PostRepository::new(dir.path().join("nope"));
        assert!(repo.list_posts(None).unwrap().is_empty());
    }

    #[test]
    fn test_non_markdown_and_subdirectories_ignored() {
        let dir = sample_dir();
        write(dir.path(), "notes.txt", "---\ntitle: Notes\n---\n");
        fs::create_dir(dir.path().join("drafts")).unwrap();
        write(&dir.path().join("drafts"), "draft.md", "---\ntitle: Draft\n---\n");

        let repo = PostRepository::new(dir.path());
        assert_eq!(repo.list_posts(None).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_post_skipped() {
        let dir = sample_dir();
        write(dir.path(), "broken.md", "---\ntitle: [oops\n---\nBody\n");
        write(dir.path(), "baddate.md", "---\ndate: someday\n---\nBody\n");

        let repo = PostRepository::new(dir.path());
        assert_eq!(titles(&repo.list_posts(None).unwrap()), vec!["World", "Hello"]);
        assert!(matches!(
            repo.get_post("broken"),
            Err(ContentError::Frontmatter { .. })
        ));
        assert!(matches!(
            repo.get_post("baddate"),
            Err(ContentError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_defaults_for_missing_metadata() {
        let dir = sample_dir();
        write(dir.path(), "bare.md", "Just text.\n");

        let repo = PostRepository::new(dir.path());
        let post = repo.get_post("bare").unwrap();
        assert_eq!(post.title, "Untitled");
        assert!(post.excerpt.is_empty());
        assert!(post.tags.is_empty());
        assert!(post.date.is_none());
        assert_eq!(post.content, "Just text.\n");

        // Undated posts come last
        let posts = repo.list_posts(None).unwrap();
        assert_eq!(posts.last().unwrap().slug, "bare");
    }

    #[test]
    fn test_get_post() {
        let dir = sample_dir();
        let repo = PostRepository::new(dir.path());

        let post = repo.get_post("hello").unwrap();
        assert_eq!(post.slug, "hello");
        assert_eq!(post.title, "Hello");

        assert!(matches!(
            repo.get_post("missing"),
            Err(ContentError::NotFound { .. })
        ));
    }

    #[test]
    fn test_traversal_rejected() {
        let dir = sample_dir();
        let repo = PostRepository::new(dir.path().join("posts"));
        fs::create_dir(repo.posts_dir()).unwrap();

        for slug in [
            "../../etc/passwd",
            "..",
            "../hello",
            "a/b",
            "a\\b",
            "/etc/passwd",
            ".hidden",
            "",
            "foo..bar",
        ] {
            assert!(
                matches!(repo.get_post(slug), Err(ContentError::InvalidSlug { .. })),
                "slug {:?} should be rejected",
                slug
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_outside_rejected() {
        let dir = sample_dir();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        std::os::unix::fs::symlink(dir.path().join("hello.md"), posts.join("escape.md")).unwrap();

        let repo = PostRepository::new(&posts);
        assert!(matches!(
            repo.get_post("escape"),
            Err(ContentError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("hello"));
        assert!(is_valid_slug("2024-01-01_first-post"));
        assert!(is_valid_slug("v1.2-notes"));
        assert!(is_valid_slug("hello world"));
        assert!(is_valid_slug("café"));
        assert!(!is_valid_slug("tab\there"));
        assert!(!is_valid_slug("nul\0byte"));
        assert!(!is_valid_slug("line\nbreak"));
    }

    #[test]
    fn test_listed_stems_can_be_fetched() {
        let dir = sample_dir();
        write(
            dir.path(),
            "my first post.md",
            "---\ntitle: Spaced\ndate: 2024-02-01\n---\nBody\n",
        );
        write(dir.path(), "café.md", "---\ntitle: Coffee\ndate: 2024-03-01\n---\nBody\n");
        write(dir.path(), ".draft.md", "---\ntitle: Hidden\n---\nBody\n");

        let repo = PostRepository::new(dir.path());
        let posts = repo.list_posts(None).unwrap();
        assert_eq!(titles(&posts), vec!["World", "Coffee", "Spaced", "Hello"]);

        for post in &posts {
            let fetched = repo.get_post(&post.slug).unwrap();
            assert_eq!(fetched.slug, post.slug);
            assert_eq!(fetched.title, post.title);
        }
    }
}
