//! View rendering with embedded Tera templates
//!
//! All templates are compiled into the binary with `include_str!`, so a
//! deployed site needs no template directory on disk. Site-wide context
//! (name, tagline, author, current year) is injected into every render.

use anyhow::Result;
use chrono::{Datelike, Local};
use tera::{Context, Tera};

use crate::config::SiteConfig;

/// Standalone error page served when rendering itself fails
pub const ERROR_PAGE: &str = include_str!("views/500.html");

/// Template renderer with embedded views
#[derive(Clone)]
pub struct TemplateRenderer {
    tera: Tera,
    site_name: String,
    site_tagline: String,
    site_author: String,
}

impl TemplateRenderer {
    /// Create a new renderer with all views loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("views/layout.html")),
            ("index.html", include_str!("views/index.html")),
            ("about.html", include_str!("views/about.html")),
            ("projects.html", include_str!("views/projects.html")),
            (
                "project_detail.html",
                include_str!("views/project_detail.html"),
            ),
            ("blog.html", include_str!("views/blog.html")),
            ("blog_post.html", include_str!("views/blog_post.html")),
            ("contact.html", include_str!("views/contact.html")),
            ("404.html", include_str!("views/404.html")),
        ])?;

        Ok(Self {
            tera,
            site_name: config.name.clone(),
            site_tagline: config.tagline.clone(),
            site_author: config.author.clone(),
        })
    }

    /// Render a view with the given context, plus the site-wide values
    pub fn render(&self, template: &str, mut context: Context) -> Result<String> {
        context.insert("site_name", &self.site_name);
        context.insert("site_tagline", &self.site_tagline);
        context.insert("site_author", &self.site_author);
        context.insert("current_year", &Local::now().year());
        Ok(self.tera.render(template, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateRenderer {
        let config = SiteConfig {
            name: "Test Site".to_string(),
            tagline: "Testing".to_string(),
            ..Default::default()
        };
        TemplateRenderer::new(&config).unwrap()
    }

    #[test]
    fn test_renders_layout_with_site_context() {
        let mut context = Context::new();
        context.insert("page_title", "Home");
        context.insert("featured_projects", &Vec::<crate::data::Project>::new());
        let html = renderer().render("index.html", context).unwrap();
        assert!(html.contains("Test Site"));
    }

    #[test]
    fn test_renders_404() {
        let mut context = Context::new();
        context.insert("page_title", "Page Not Found");
        let html = renderer().render("404.html", context).unwrap();
        assert!(html.contains("404"));
    }
}
