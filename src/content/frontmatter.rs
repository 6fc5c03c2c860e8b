//! Front-matter parsing
//!
//! Posts carry a simple `key: value` metadata block between two `---`
//! delimiters. Parsing is best-effort and never fails: anything that does
//! not look like metadata is handed back as body text unchanged.

use chrono::NaiveDate;
use std::collections::HashMap;

/// A frontmatter `date` value.
///
/// Values that parse as `YYYY-MM-DD` become calendar dates; anything else
/// is kept verbatim so a malformed date never loses the author's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    Raw(String),
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<DateValue>,
    /// Comma-split tag list, order and duplicates preserved
    pub tags: Vec<String>,
    /// Remaining keys, stored as trimmed strings
    pub extra: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns `(front_matter, body)`.
    ///
    /// The metadata block sits between the first two `---` delimiters. If
    /// the text does not open with `---`, or no closing delimiter exists,
    /// the whole input is body and the metadata is empty.
    pub fn parse(content: &str) -> (Self, &str) {
        if !content.starts_with("---") {
            return (FrontMatter::default(), content);
        }

        let rest = &content[3..];
        let Some(end) = rest.find("---") else {
            return (FrontMatter::default(), content);
        };

        let block = rest[..end].trim();
        let body = rest[end + 3..].trim();

        let mut fm = FrontMatter::default();
        for line in block.lines() {
            // Lines without a colon are silently ignored
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "title" => fm.title = Some(value.to_string()),
                "tags" => {
                    fm.tags = value.split(',').map(|t| t.trim().to_string()).collect();
                }
                "date" => {
                    fm.date = Some(match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                        Ok(date) => DateValue::Date(date),
                        Err(_) => DateValue::Raw(value.to_string()),
                    });
                }
                _ => {
                    fm.extra.insert(key.to_string(), value.to_string());
                }
            }
        }

        (fm, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: Hello World\ndate: 2025-01-20\ntags: rust, web\n---\n\nThis is the content.\n";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(
            fm.date,
            Some(DateValue::Date(
                NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
            ))
        );
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert_eq!(body, "This is the content.");
    }

    #[test]
    fn test_tags_comma_split_preserves_order_and_duplicates() {
        let content = "---\ntags: a, b , c, b\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.tags, vec!["a", "b", "c", "b"]);
    }

    #[test]
    fn test_no_leading_delimiter() {
        let content = "Just a plain post.\n\nNo metadata here.";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_single_delimiter_is_all_body() {
        let content = "---\ntitle: Orphaned";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_malformed_date_kept_as_raw_string() {
        let content = "---\ndate: next tuesday\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.date, Some(DateValue::Raw("next tuesday".to_string())));
    }

    #[test]
    fn test_lines_without_colon_ignored() {
        let content = "---\ntitle: Ok\nthis line has no separator\nauthor: Jane\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title, Some("Ok".to_string()));
        assert_eq!(fm.extra.get("author"), Some(&"Jane".to_string()));
        assert_eq!(fm.extra.len(), 1);
    }

    #[test]
    fn test_value_with_colon_splits_on_first() {
        let content = "---\nsubtitle: part one: part two\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(
            fm.extra.get("subtitle"),
            Some(&"part one: part two".to_string())
        );
    }
}
