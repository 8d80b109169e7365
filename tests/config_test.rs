//! Environment-driven configuration tests.
//!
//! These mutate process environment variables, so they run serially.

use std::path::PathBuf;
use std::time::Duration;

use ideas_board::config::{Config, ConfigError};
use serial_test::serial;

const VARS: &[&str] = &[
    "WEB_HOST",
    "WEB_PORT",
    "PUBLIC_DIR",
    "IDEAS_API_URL",
    "IDEAS_PROXY_URL",
    "STATIC_ASSETS_HOST",
    "BACKEND_HOST",
    "DEFAULT_IMAGE_PATH",
    "UPSTREAM_TIMEOUT_SECS",
    "PAGE_RENDER_BUDGET_SECS",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_from_empty_env() {
    clear_env();
    let config = Config::from_env().expect("Failed to load config");

    assert_eq!(config.web_host, "0.0.0.0");
    assert_eq!(config.web_port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("./public"));
    assert_eq!(
        config.ideas_api_url,
        "https://suitmedia-backend.suitdev.com/api/ideas"
    );
    assert!(config.ideas_proxy_url.is_none());
    assert_eq!(config.static_assets_host, "https://suitmedia.static-assets.id");
    assert_eq!(config.backend_host, "https://suitmedia-backend.suitdev.com");
    assert_eq!(config.default_image_path, "/banner-stock.jpg");
    assert!(config.upstream_timeout.is_none());
    assert_eq!(config.page_render_budget, Duration::from_secs(10));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_env();
    std::env::set_var("WEB_HOST", "127.0.0.1");
    std::env::set_var("WEB_PORT", "3000");
    std::env::set_var("IDEAS_PROXY_URL", "http://localhost:3000/api/ideas");
    std::env::set_var("UPSTREAM_TIMEOUT_SECS", "15");
    std::env::set_var("DEFAULT_IMAGE_PATH", "/fallback.png");
    std::env::set_var("PAGE_RENDER_BUDGET_SECS", "3");

    let config = Config::from_env().expect("Failed to load config");
    clear_env();

    assert_eq!(config.web_host, "127.0.0.1");
    assert_eq!(config.web_port, 3000);
    assert_eq!(
        config.ideas_proxy_url.as_deref(),
        Some("http://localhost:3000/api/ideas")
    );
    assert_eq!(config.upstream_timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.default_image_path, "/fallback.png");
    assert_eq!(config.page_render_budget, Duration::from_secs(3));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_empty_values_fall_back_to_defaults() {
    clear_env();
    std::env::set_var("WEB_PORT", "");
    std::env::set_var("IDEAS_PROXY_URL", "");

    let config = Config::from_env().expect("Failed to load config");
    clear_env();

    assert_eq!(config.web_port, 8080);
    assert!(config.ideas_proxy_url.is_none());
}

#[test]
#[serial]
fn test_unparseable_port() {
    clear_env();
    std::env::set_var("WEB_PORT", "eighty");

    let result = Config::from_env();
    clear_env();

    match result {
        Err(ConfigError::ParseInt { name, .. }) => assert_eq!(name, "WEB_PORT"),
        other => panic!("expected ParseInt error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_invalid_api_url_fails_validation() {
    clear_env();
    std::env::set_var("IDEAS_API_URL", "file:///etc/passwd");

    let config = Config::from_env().expect("Failed to load config");
    clear_env();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("IDEAS_API_URL"));
}
