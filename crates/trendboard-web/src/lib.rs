//! trendboard-web - Web frontend for trendboard using Leptos, plus an Axum dev server

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod upstream;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;
#[cfg(feature = "ssr")]
pub use upstream::HttpFetcher;

#[cfg(feature = "ssr")]
use anyhow::{Context, Result};
#[cfg(feature = "ssr")]
use std::{net::SocketAddr, path::Path};
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the dev server until the process is stopped
#[cfg(feature = "ssr")]
pub async fn run(backend_url: &str, dist_dir: &Path, port: u16) -> Result<()> {
    let upstream = HttpFetcher::new(backend_url)?;
    let router = create_router(upstream, dist_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Dev server listening on http://{} (backend {})", addr, backend_url);
    println!("trendboard listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
