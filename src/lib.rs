//! folio: a personal portfolio and blog server
//!
//! Pages are rendered from flat data files: JSON for projects, skills and
//! education, Markdown with frontmatter for blog posts. Everything is
//! re-read from disk on each request; there is no cache to invalidate.

pub mod config;
pub mod content;
pub mod data;
pub mod mail;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// JSON data directory
    pub data_dir: std::path::PathBuf,
    /// Blog post source directory
    pub blog_dir: std::path::PathBuf,
    /// Static asset directory
    pub static_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new folio instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("folio.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let data_dir = base_dir.join(&config.data_dir);
        let blog_dir = data_dir.join(&config.blog_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            data_dir,
            blog_dir,
            static_dir,
        })
    }
}
