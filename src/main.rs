//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A personal portfolio and blog server", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the portfolio server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides folio.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides folio.yml)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List blog posts
    Posts,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,tower_http=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, bind } => {
            let folio = folio::Folio::new(&base_dir)?;
            let host = bind.unwrap_or_else(|| folio.config.server.host.clone());
            let port = port.unwrap_or(folio.config.server.port);

            tracing::info!("Starting server at http://{}:{}", host, port);
            folio::server::start(&folio, &host, port).await?;
        }

        Commands::Posts => {
            let folio = folio::Folio::new(&base_dir)?;
            let repository = folio::content::PostRepository::new(folio.config.excerpt_length);
            let posts = repository.list_all(&folio.blog_dir);

            if posts.is_empty() {
                println!("No posts found in {:?}", folio.blog_dir);
            } else {
                for post in &posts {
                    println!("{}  {}  [{}]", post.published_at, post.slug, post.title);
                }
                println!("\n{} post(s)", posts.len());
            }
        }
    }

    Ok(())
}
