//! Site configuration (folio.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub tagline: String,
    pub author: String,
    pub url: String,

    // Directory layout, relative to the site base directory
    pub data_dir: String,
    /// Blog post directory, relative to `data_dir`
    pub blog_dir: String,
    pub static_dir: String,

    // Content
    pub excerpt_length: usize,

    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            tagline: String::new(),
            author: String::new(),
            url: "http://localhost:5000".to_string(),

            data_dir: "data".to_string(),
            blog_dir: "blog_posts".to_string(),
            static_dir: "static".to_string(),

            excerpt_length: 200,

            server: ServerConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Contact form mail relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// When false the contact form logs submissions instead of relaying them
    pub enable: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    /// Address contact messages are delivered to
    pub recipient: String,
    /// Envelope sender address
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enable: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            recipient: String::new(),
            from: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Portfolio");
        assert_eq!(config.excerpt_length, 200);
        assert_eq!(config.server.port, 5000);
        assert!(!config.mail.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Jane Doe
tagline: Systems programmer
excerpt_length: 140
server:
  port: 8080
mail:
  enable: true
  recipient: jane@example.com
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Jane Doe");
        assert_eq!(config.excerpt_length, 140);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.mail.enable);
        assert_eq!(config.mail.recipient, "jane@example.com");
    }
}
