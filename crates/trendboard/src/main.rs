//! trendboard - Fashion trend analytics dashboard

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::Overrides;
use std::path::PathBuf;
use trendboard_core::{fetch_gallery, load_batch, render_tab, ItemRef, Payload, Tab};
use trendboard_web::HttpFetcher;

#[derive(Parser)]
#[command(
    name = "trendboard",
    version,
    about = "Fashion trend analytics dashboard",
    long_about = "Dev server and terminal views for the fashion trend analytics backend.\n\
                  \n\
                  The web dashboard is a Leptos WASM app built with Trunk. `serve` hosts the\n\
                  build and forwards /api/* and /images/* to the analytics backend, so the\n\
                  browser only ever talks to one origin.\n\
                  \n\
                  Examples:\n\
                    trendboard                               # Run dev server (default)\n\
                    trendboard serve --port 8080 --open      # Custom port, open browser\n\
                    trendboard snapshot --tab predictive     # Print a tab's charts as tables\n\
                    trendboard snapshot --json               # Raw batch as JSON\n\
                    trendboard gallery \"Bag (Black)\" Accessories\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/trendboard-web && trunk build --release\n\
                    trendboard serve\n\
                  \n\
                  Environment Variables:\n\
                    TRENDBOARD_CONFIG                        # Config file path\n\
                    TRENDBOARD_BACKEND                       # Analytics backend URL\n\
                    TRENDBOARD_PORT                          # Dev server port\n\
                    TRENDBOARD_NO_COLOR                      # Disable ANSI colors\n\
                    RUST_LOG                                 # Log filter (default trendboard=info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Config file (default: <config_dir>/trendboard/config.toml)
    #[arg(long, global = true, env = "TRENDBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Analytics backend base URL
    #[arg(long, global = true, env = "TRENDBOARD_BACKEND")]
    backend: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "TRENDBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web dashboard and proxy the backend (default)
    Serve {
        /// Port for the dev server
        #[arg(long, env = "TRENDBOARD_PORT")]
        port: Option<u16>,
        /// Trunk output directory
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Open the dashboard in a browser
        #[arg(long)]
        open: bool,
    },
    /// Load one tab from the backend and print its charts
    Snapshot {
        /// trends | predictive | items | breakdown
        #[arg(long, short = 't')]
        tab: Option<Tab>,
        /// Output the raw batch as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the image gallery for one item
    Gallery {
        /// Item name as shown in the top-items charts
        item: String,
        /// Top category (Accessories, Clothing, Footwear)
        category: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.no_color);

    let mut overrides = Overrides {
        backend: cli.backend,
        ..Default::default()
    };

    match cli.mode.unwrap_or(Mode::Serve {
        port: None,
        dist: None,
        open: false,
    }) {
        Mode::Serve { port, dist, open } => {
            overrides.port = port;
            overrides.dist = dist;
            let config = cli::load_config(cli.config.as_deref(), overrides)?;
            run_serve(config, open).await?;
        }
        Mode::Snapshot { tab, json } => {
            overrides.tab = tab;
            let config = cli::load_config(cli.config.as_deref(), overrides)?;
            run_snapshot(config, json, cli.no_color).await?;
        }
        Mode::Gallery {
            item,
            category,
            json,
        } => {
            let config = cli::load_config(cli.config.as_deref(), overrides)?;
            run_gallery(config, ItemRef::new(item, category), json, cli.no_color).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays clean on stdout
fn init_logging(no_color: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trendboard=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .init();
}

async fn run_serve(config: trendboard_core::DashboardConfig, open: bool) -> Result<()> {
    let url = format!("http://localhost:{}", config.port);

    if config.dist_dir.join("index.html").exists() {
        println!("🌐 Dashboard:   {}", url);
    } else {
        println!("🌐 API proxy only: {}/api/*", url);
        println!("   💡 Run 'trunk build' in crates/trendboard-web to compile the frontend");
    }
    println!("   Backend:     {}", config.backend_base());

    if open {
        let url = url.clone();
        tokio::spawn(async move {
            // give the listener a moment to bind
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            if let Err(e) = open::that(&url) {
                tracing::warn!("Could not open browser: {}", e);
            }
        });
    }

    trendboard_web::run(config.backend_base(), &config.dist_dir, config.port).await
}

async fn run_snapshot(
    config: trendboard_core::DashboardConfig,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let fetcher = HttpFetcher::new(config.backend_base())?;
    let tab = config.default_tab;

    let batch = load_batch(&fetcher, &tab.endpoints())
        .await
        .with_context(|| format!("Failed to load the {} tab", tab.title()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let view = render_tab(tab, &batch);
    println!("{}", cli::format_tab_view(&view, no_color));
    Ok(())
}

async fn run_gallery(
    config: trendboard_core::DashboardConfig,
    item: ItemRef,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let fetcher = HttpFetcher::new(config.backend_base())?;

    let gallery = match fetch_gallery(&fetcher, &item)
        .await
        .with_context(|| format!("Failed to load gallery for {}", item.heading()))?
    {
        Payload::Ready(gallery) => gallery,
        Payload::Failed { message } => {
            anyhow::bail!(
                "Backend has no gallery for {}: {}",
                item.heading(),
                message.as_deref().unwrap_or("unknown error")
            )
        }
        Payload::Malformed { message } => {
            anyhow::bail!("Unexpected gallery reply: {}", message)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&gallery)?);
    } else {
        println!("{}", cli::format_gallery(&item, &gallery, no_color));
    }
    Ok(())
}
