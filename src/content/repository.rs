//! Post repository - loads posts from the blog source directory
//!
//! There is no cache: every query re-reads the directory, so edits to a
//! post file show up on the next request.

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;

use super::{excerpt, humanize_slug};
use super::{DateValue, FrontMatter, MarkdownRenderer, Post, PublishedAt};

/// Loads posts from a directory of Markdown files
pub struct PostRepository {
    renderer: MarkdownRenderer,
    excerpt_length: usize,
}

impl PostRepository {
    /// Create a new repository
    pub fn new(excerpt_length: usize) -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
            excerpt_length,
        }
    }

    /// Create a repository with the default excerpt length
    pub fn with_defaults() -> Self {
        Self::new(excerpt::DEFAULT_EXCERPT_LENGTH)
    }

    /// Load all posts from a directory (non-recursive), sorted by
    /// publication date descending. A missing directory yields an empty
    /// list; a file that fails to load is logged and skipped.
    pub fn list_all(&self, dir: &Path) -> Vec<Post> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut posts = Vec::new();

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && is_markdown_file(&path) {
                match self.load_post(&path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        posts
    }

    /// Find a post by slug. Scans the full listing; the first match wins,
    /// so duplicate slugs are resolved by sort order, not rejected.
    pub fn get_by_slug(&self, dir: &Path, slug: &str) -> Option<Post> {
        self.list_all(dir).into_iter().find(|p| p.slug == slug)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content);

        let content_html = self.renderer.render(body)?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // Title from front-matter, or a humanized form of the slug
        let title = fm.title.unwrap_or_else(|| humanize_slug(&slug));

        // A missing date falls back to the current time, so undated posts
        // sort as freshly published
        let published_at = match fm.date {
            Some(DateValue::Date(date)) => PublishedAt::from_date(date),
            Some(DateValue::Raw(raw)) => PublishedAt::Raw(raw),
            None => PublishedAt::Date(Local::now().naive_local()),
        };

        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Post::new(
            slug,
            title,
            published_at,
            fm.tags,
            content_html,
            filename,
            self.excerpt_length,
        ))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let repo = PostRepository::with_defaults();
        let posts = repo.list_all(Path::new("/no/such/directory"));
        assert!(posts.is_empty());
    }

    #[test]
    fn test_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write_post(
            tmp.path(),
            "older.md",
            "---\ndate: 2025-01-20\n---\nOlder body.",
        );
        write_post(
            tmp.path(),
            "newer.md",
            "---\ndate: 2025-02-01\n---\nNewer body.",
        );

        let repo = PostRepository::with_defaults();
        let posts = repo.list_all(tmp.path());
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "newer");
        assert_eq!(posts[1].slug, "older");
    }

    #[test]
    fn test_get_by_slug_matches_listing() {
        let tmp = TempDir::new().unwrap();
        write_post(
            tmp.path(),
            "first-post.md",
            "---\ntitle: First Post\ndate: 2025-01-20\ntags: rust, web\n---\nBody text.",
        );

        let repo = PostRepository::with_defaults();
        let listed = repo.list_all(tmp.path());
        assert_eq!(listed.len(), 1);

        let post = repo.get_by_slug(tmp.path(), "first-post").unwrap();
        assert_eq!(post.slug, listed[0].slug);
        assert_eq!(post.title, listed[0].title);
        assert_eq!(post.tags, listed[0].tags);
    }

    #[test]
    fn test_get_by_slug_miss() {
        let tmp = TempDir::new().unwrap();
        let repo = PostRepository::with_defaults();
        assert!(repo.get_by_slug(tmp.path(), "nope").is_none());
    }

    #[test]
    fn test_title_defaults_to_humanized_slug() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "my-first-post.md", "No frontmatter here.");

        let repo = PostRepository::with_defaults();
        let post = repo.get_by_slug(tmp.path(), "my-first-post").unwrap();
        assert_eq!(post.title, "My First Post");
    }

    #[test]
    fn test_undated_post_sorts_as_freshly_published() {
        let tmp = TempDir::new().unwrap();
        write_post(
            tmp.path(),
            "dated.md",
            "---\ndate: 2025-01-01\n---\nDated body.",
        );
        write_post(tmp.path(), "undated.md", "No date in here.");

        let repo = PostRepository::with_defaults();
        let posts = repo.list_all(tmp.path());
        assert_eq!(posts.len(), 2);
        // The missing-date fallback is the load time, which is newer than
        // any past date
        assert_eq!(posts[0].slug, "undated");
        assert_eq!(posts[1].slug, "dated");
        assert!(matches!(posts[0].published_at, PublishedAt::Date(_)));
    }

    #[test]
    fn test_malformed_date_still_loads() {
        let tmp = TempDir::new().unwrap();
        write_post(
            tmp.path(),
            "draft.md",
            "---\ndate: sometime soon\n---\nDraft body.",
        );

        let repo = PostRepository::with_defaults();
        let post = repo.get_by_slug(tmp.path(), "draft").unwrap();
        assert_eq!(post.published_at, PublishedAt::Raw("sometime soon".into()));
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "good.md", "---\ndate: 2025-01-01\n---\nGood.");
        // Invalid UTF-8 makes the read fail; the post is skipped, not fatal
        fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0xfd]).unwrap();

        let repo = PostRepository::with_defaults();
        let posts = repo.list_all(tmp.path());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "post.md", "Body.");
        fs::write(tmp.path().join("notes.txt"), "not a post").unwrap();

        let repo = PostRepository::with_defaults();
        assert_eq!(repo.list_all(tmp.path()).len(), 1);
    }

    #[test]
    fn test_excerpt_strips_markup() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "styled.md", "Some **bold** text.");

        let repo = PostRepository::with_defaults();
        let post = repo.get_by_slug(tmp.path(), "styled").unwrap();
        assert_eq!(post.excerpt, "Some bold text.");
    }
}
