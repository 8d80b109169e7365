//! Shared helpers for the integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use ideas_board::config::Config;
use ideas_board::web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build the full app against the given remote API endpoint.
pub fn app_for_api(api_url: &str) -> Router {
    let mut config = Config::for_testing();
    config.ideas_api_url = api_url.to_string();
    app_with_config(config)
}

pub fn app_with_config(config: Config) -> Router {
    let state = AppState::from_config(config).expect("Failed to build app state");
    create_app(state)
}

/// GET `uri` and return the status and body as a string.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// An upstream page body with `count` items starting after `offset`.
pub fn ideas_body(offset: u32, count: u32, total: u64, per_page: u32) -> Value {
    let data: Vec<Value> = (offset + 1..=offset + count)
        .map(|id| {
            json!({
                "id": id,
                "slug": format!("idea-{id}"),
                "title": format!("Idea number {id}"),
                "content": "<p>Body</p>",
                "published_at": "2026-10-17 09:00:00",
                "small_image": [{
                    "id": id,
                    "mime": "image/jpeg",
                    "file_name": format!("s{id}.jpg"),
                    "url": format!("https://suitmedia-backend.suitdev.com/storage/files/s{id}.jpg")
                }],
                "medium_image": [{
                    "id": id,
                    "mime": "image/jpeg",
                    "file_name": format!("m{id}.jpg"),
                    "url": format!("/storage/files/m{id}.jpg")
                }]
            })
        })
        .collect();
    json!({
        "data": data,
        "meta": {
            "current_page": offset / per_page + 1,
            "per_page": per_page,
            "total": total,
            "last_page": total.div_ceil(u64::from(per_page))
        }
    })
}
