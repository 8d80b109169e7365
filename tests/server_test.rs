//! Tests for the server lifecycle: startup errors surface to the caller and
//! the shutdown future stops the server.

use std::time::Duration;

use ideas_board::config::Config;
use ideas_board::web;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const DEADLINE: Duration = Duration::from_secs(5);

async fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_bind_failure_is_returned() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let mut config = Config::for_testing();
    config.web_port = occupied.local_addr().unwrap().port();

    let result = tokio::time::timeout(DEADLINE, web::serve(config, std::future::pending()))
        .await
        .expect("serve should fail instead of running");

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("Failed to bind web server"));
}

#[tokio::test]
async fn test_invalid_address_is_returned() {
    let mut config = Config::for_testing();
    config.web_host = "not a host".to_string();

    let result = tokio::time::timeout(DEADLINE, web::serve(config, std::future::pending()))
        .await
        .expect("serve should fail instead of running");

    assert!(result.is_err());
}

#[tokio::test]
async fn test_serves_until_shutdown() {
    let mut config = Config::for_testing();
    config.web_port = free_port().await;
    let base = format!("http://127.0.0.1:{}", config.web_port);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(web::serve(config, async {
        let _ = stop_rx.await;
    }));

    let client = reqwest::Client::new();
    let mut body = None;
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{base}/healthz")).send().await {
            body = Some(response.text().await.unwrap());
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(body.as_deref(), Some("OK"));

    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(DEADLINE, server)
        .await
        .expect("server should stop after shutdown")
        .unwrap();
    assert!(result.is_ok());
}
