//! Dev server router using Axum
//!
//! Serves the Trunk build and forwards analytics and image requests to the
//! backend, so the frontend can use same-origin paths.

use crate::upstream::HttpFetcher;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

#[derive(Clone)]
pub struct ProxyState {
    upstream: Arc<HttpFetcher>,
}

/// Create the dev server router
pub fn create_router(upstream: HttpFetcher, dist_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = ProxyState {
        upstream: Arc::new(upstream),
    };

    let router = Router::new()
        .route("/healthz", get(health_handler))
        .route("/api/{*path}", get(proxy_handler))
        .route("/images/{*path}", get(proxy_handler));

    let index = dist_dir.join("index.html");
    let router = if index.exists() {
        router.fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
    } else {
        tracing::warn!(
            "No frontend build at {}, serving setup page",
            dist_dir.display()
        );
        router.fallback(setup_handler)
    };

    router.layer(cors).with_state(state)
}

async fn health_handler(State(state): State<ProxyState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "backend": state.upstream.base(),
    }))
}

/// Forward a GET to the backend, passing status, content type and body through
async fn proxy_handler(State(state): State<ProxyState>, uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = state.upstream.url(path);

    let upstream = match state.upstream.client().get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Proxy request to {} failed: {}", url, e);
            return bad_gateway(format!("Backend unreachable: {}", e));
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Reading proxied body from {} failed: {}", url, e);
            return bad_gateway(format!("Backend reply interrupted: {}", e));
        }
    };
    tracing::debug!("{} {} ({} bytes)", status.as_u16(), path, body.len());

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

fn bad_gateway(message: String) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        axum::Json(serde_json::json!({"success": false, "message": message})),
    )
        .into_response()
}

async fn setup_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>trendboard - Build Required</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #f5f5f5; display: flex; justify-content: center; padding-top: 10vh; }
        .setup-message { max-width: 600px; background: white; padding: 2rem; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
        code { background: #f0f0f0; padding: 0.2rem 0.4rem; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>trendboard web UI - build required</h1>
        <p>The Leptos WASM frontend has not been built yet.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add the WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build: <code>cd crates/trendboard-web &amp;&amp; trunk build --release</code></li>
            <li>Restart: <code>trendboard serve</code></li>
        </ol>
        <p>The API proxy is already live: <a href="/healthz">/healthz</a></p>
    </div>
</body>
</html>"#,
    )
}
