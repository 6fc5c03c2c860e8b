//! Blog content pipeline: frontmatter parsing, markdown rendering,
//! excerpt generation and the post repository.

mod excerpt;
mod frontmatter;
mod markdown;
mod post;
mod repository;

pub use excerpt::{excerpt, DEFAULT_EXCERPT_LENGTH};
pub use frontmatter::{DateValue, FrontMatter};
pub use markdown::MarkdownRenderer;
pub use post::{humanize_slug, Post, PublishedAt};
pub use repository::PostRepository;
