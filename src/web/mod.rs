mod routes;
pub mod pages;

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::ideas::{IdeasSource, ImageResolver, ProxyClient, UpstreamClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Client for the remote content API, used by the proxy route.
    pub upstream: UpstreamClient,
    /// Where the ideas page gets its listing from.
    pub source: Arc<dyn IdeasSource>,
    pub resolver: ImageResolver,
}

impl AppState {
    /// Build HTTP clients and the image resolver from `config`.
    ///
    /// The page reads through the proxy at `IDEAS_PROXY_URL` when one is
    /// configured, and straight from the remote API otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or an endpoint URL
    /// does not parse.
    pub fn from_config(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        let upstream = UpstreamClient::new(client.clone(), &config.ideas_api_url)
            .context("Invalid IDEAS_API_URL")?;

        let source: Arc<dyn IdeasSource> = match config.ideas_proxy_url.as_deref() {
            Some(proxy_url) => {
                info!(proxy_url, "Ideas page reads through proxy");
                Arc::new(ProxyClient::new(client, proxy_url).context("Invalid IDEAS_PROXY_URL")?)
            }
            None => Arc::new(upstream.clone()),
        };

        let resolver = ImageResolver::new(
            &config.static_assets_host,
            &config.backend_host,
            &config.default_image_path,
        );

        Ok(Self {
            config: Arc::new(config),
            upstream,
            source,
            resolver,
        })
    }
}

/// Run the web server until `shutdown` resolves.
///
/// In-flight requests are drained before returning.
///
/// # Errors
///
/// Returns an error if the address is invalid, the port cannot be bound, or
/// the server stops on an I/O error.
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let state = AppState::from_config(config)?;
    let app = create_app(state);

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
///
/// Unmatched paths fall through to the public assets directory, which is
/// where the default banner image lives.
pub fn create_app(state: AppState) -> Router {
    let static_dir = find_static_dir();
    let public_dir = state.config.public_dir.clone();
    info!(static_dir = ?static_dir, public_dir = ?public_dir, "Serving static files");

    Router::new()
        .merge(routes::router())
        .nest_service("/static", ServeDir::new(&static_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Find the static files directory.
///
/// Checks in order:
/// 1. ./static (development)
/// 2. /usr/share/ideas-board/static (installed)
/// 3. Falls back to ./static
fn find_static_dir() -> PathBuf {
    let candidates = [
        PathBuf::from("./static"),
        PathBuf::from("/usr/share/ideas-board/static"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    PathBuf::from("./static")
}
