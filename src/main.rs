//! CLI entry point for agency-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agency-blog")]
#[command(version)]
#[command(about = "Blog backend for an agency landing page", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Config file (defaults to site.yml in the base directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides server.ip)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List published posts
    List {
        /// Only show the N most recent posts
        #[arg(short, long)]
        latest: Option<usize>,
    },

    /// Print the slug of every published post
    Slugs,

    /// Render one post
    Show {
        /// Slug of the post
        slug: String,

        /// Print the full HTML page instead of JSON
        #[arg(long)]
        html: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "agency_blog=debug,tower_http=debug,info"
    } else {
        "agency_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolving current directory")?,
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = agency_blog::Site::new(&base_dir, config_path)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            agency_blog::server::start(&site, &ip, port).await?;
        }

        Commands::List { latest } => {
            let site = agency_blog::Site::new(&base_dir, config_path)?;
            agency_blog::commands::list::run(&site, latest).await?;
        }

        Commands::Slugs => {
            let site = agency_blog::Site::new(&base_dir, config_path)?;
            agency_blog::commands::slugs::run(&site).await?;
        }

        Commands::Show { slug, html } => {
            let site = agency_blog::Site::new(&base_dir, config_path)?;
            agency_blog::commands::show::run(&site, &slug, html).await?;
        }

        Commands::Version => {
            println!("agency-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
