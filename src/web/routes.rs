use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use tracing::debug;

use super::pages::{render_ideas_page, IdeasPageParams};
use super::AppState;
use crate::ideas::{FetchError, ListQuery, MemoryLocation, PostsFetcher, QueryStateSync};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ideas_page))
        .route("/healthz", get(health))
        .route("/api/ideas", get(api_ideas))
}

// ========== HTML Routes ==========

async fn ideas_page(State(state): State<AppState>, uri: Uri) -> Response {
    let sync = QueryStateSync::new(MemoryLocation::from_uri(&uri));
    let fetcher = PostsFetcher::new(Arc::clone(&state.source), state.resolver.clone());
    let budget = state.config.page_render_budget;
    if tokio::time::timeout(budget, fetcher.fetch(sync.query())).await.is_err() {
        debug!(?budget, "Listing still loading, rendering placeholder");
    }
    let snapshot = fetcher.snapshot().await;

    let html = render_ideas_page(&IdeasPageParams {
        snapshot: &snapshot,
        sync: &sync,
        default_image: &state.config.default_image_path,
    });
    Html(html.into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: &'static str,
}

/// Any failure of the proxy route. The client only ever sees a fixed message.
#[derive(Debug)]
pub struct ProxyError(FetchError);

impl From<FetchError> for ProxyError {
    fn from(err: FetchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to proxy ideas request: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody {
                error: "Failed to fetch data",
            }),
        )
            .into_response()
    }
}

/// Forward `page`, `per_page` and `sort` to the remote API in its own
/// parameter dialect and pass its JSON body straight through.
async fn api_ideas(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ProxyError> {
    let query = ListQuery::from_query_str(raw.as_deref().unwrap_or_default());
    let body = state.upstream.fetch_raw(&query).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
