//! Post model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

use super::excerpt;

/// Publication timestamp of a post.
///
/// Frontmatter dates that fail to parse are kept as raw strings, so the
/// value is date-or-string. Ordering is total: dates compare
/// chronologically, raw strings lexicographically, and any date sorts
/// after (newer than) any raw string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PublishedAt {
    Raw(String),
    Date(NaiveDateTime),
}

impl PublishedAt {
    /// Midnight on the given calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        PublishedAt::Date(date.and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for PublishedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishedAt::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%d")),
            PublishedAt::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for PublishedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Slug (URL segment), derived from the source filename stem
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub published_at: PublishedAt,

    /// Post tags
    pub tags: Vec<String>,

    /// Rendered HTML content
    pub content: String,

    /// Plain-text teaser derived from the rendered content
    pub excerpt: String,

    /// Original file name, kept for diagnostics
    pub filename: String,
}

impl Post {
    /// Create a post. The excerpt is derived from the rendered content
    /// here and nowhere else.
    pub fn new(
        slug: String,
        title: String,
        published_at: PublishedAt,
        tags: Vec<String>,
        content: String,
        filename: String,
        excerpt_length: usize,
    ) -> Self {
        let excerpt = excerpt::excerpt(&content, excerpt_length);
        Self {
            slug,
            title,
            published_at,
            tags,
            content,
            excerpt,
            filename,
        }
    }
}

/// Turn a filename slug into a display title: hyphens become spaces and
/// every word is title-cased.
pub fn humanize_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("my-first-post"), "My First Post");
        assert_eq!(humanize_slug("hello"), "Hello");
        assert_eq!(humanize_slug("ALL-CAPS"), "All Caps");
    }

    #[test]
    fn test_excerpt_computed_at_construction() {
        let post = Post::new(
            "p".into(),
            "P".into(),
            PublishedAt::Raw("draft".into()),
            vec![],
            "<p>Hello world</p>".into(),
            "p.md".into(),
            200,
        );
        assert_eq!(post.excerpt, "Hello world");
    }

    #[test]
    fn test_date_ordering() {
        let earlier = PublishedAt::from_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        let later = PublishedAt::from_date(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(later > earlier);
    }

    #[test]
    fn test_raw_sorts_before_any_date() {
        let date = PublishedAt::from_date(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        let raw = PublishedAt::Raw("zzz".into());
        assert!(date > raw);
    }

    #[test]
    fn test_display() {
        let date = PublishedAt::from_date(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        assert_eq!(date.to_string(), "2025-01-20");
        assert_eq!(PublishedAt::Raw("soon".into()).to_string(), "soon");
    }
}
