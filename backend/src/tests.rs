use rand::Rng;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tokio::{
    net::TcpListener,
    time::{sleep, Duration},
};
use tokio_util::sync::CancellationToken;

use crate::{
    parse_env_var, parse_prefix, rewrite_index, serve, web_server::router, AppState, Asset, Config,
    Error, VERSION,
};

/// page as trunk writes it to frontend/dist
const BUILT_INDEX: &str = r#"<!DOCTYPE html><html><head>
<link rel="stylesheet" href="/style-1a2b.css">
<link rel="modulepreload" href="/nightmode-frontend-3c4d.js">
<script type="module">import init from '/nightmode-frontend-3c4d.js';init('/nightmode-frontend-3c4d_bg.wasm');</script>
</head><body></body></html>"#;

/// start a server on a random port and wait until it answers
async fn start(prefix: &str) -> (String, CancellationToken) {
    let port = rand::rng().random_range(10_000..30_000);
    let config = Config {
        http_host: [127, 0, 0, 1].into(),
        http_port: port,
        prefix: parse_prefix(prefix).unwrap(),
    };
    let token = CancellationToken::new();
    tokio::spawn(serve(config, token.clone()));

    let base = format!("http://127.0.0.1:{port}");
    let client = client();
    for _i in 0..60 {
        if client
            .get(format!("{base}/api/version"))
            .send()
            .await
            .is_ok()
        {
            break;
        }

        sleep(Duration::from_millis(100)).await;
    }

    (base, token)
}

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap()
}

#[tokio::test]
async fn serves_version() {
    let (base, token) = start("/").await;

    let response = client()
        .get(format!("{base}/api/version"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["version"], VERSION);

    token.cancel();
}

#[tokio::test]
async fn index_matches_embedded_bundle() {
    let (base, token) = start("/").await;

    let response = client().get(format!("{base}/")).send().await.unwrap();

    if Asset::get("index.html").is_some() {
        assert_eq!(response.status(), StatusCode::OK);
        let page = response.text().await.unwrap();
        assert!(page.contains("/static/nightmode-frontend"));
    } else {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    token.cancel();
}

#[tokio::test]
async fn serves_rewritten_page_under_prefix_and_root() {
    let state = Arc::new(AppState {
        prefix: "/scores".to_owned(),
        index: Some(rewrite_index(BUILT_INDEX, "/scores")),
    });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move { axum::serve(listener, router(state)).await });

    let client = client();
    for path in ["/", "/scores"] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");

        let page = response.text().await.unwrap();
        assert!(page.contains("'/scores/static/nightmode-frontend-3c4d.js'"), "{path}");
        assert!(page.contains(r#"href="/scores/static/style-1a2b.css""#), "{path}");
        assert!(!page.contains("'/nightmode-frontend"), "{path}");
    }

    server.abort();
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let (base, token) = start("/").await;

    let response = client()
        .get(format!("{base}/static/does-not-exist.wasm"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    token.cancel();
}

#[tokio::test]
async fn routes_are_mounted_under_prefix_and_root() {
    let (base, token) = start("/scores/").await;
    let client = client();

    for path in ["/scores/api/version", "/api/version"] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    let response = client
        .get(format!("{base}/other/api/version"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    token.cancel();
}

#[tokio::test]
async fn server_stops_when_cancelled() {
    let port = rand::rng().random_range(30_000..40_000);
    let config = Config {
        http_host: [127, 0, 0, 1].into(),
        http_port: port,
        prefix: "/".to_owned(),
    };
    let token = CancellationToken::new();
    let server = tokio::spawn(serve(config, token.clone()));

    sleep(Duration::from_millis(200)).await;
    token.cancel();

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not shut down")
        .unwrap();
    assert!(result.is_ok());
}

#[test]
fn prefix_is_normalized() {
    assert_eq!(parse_prefix("").unwrap(), "/");
    assert_eq!(parse_prefix("/").unwrap(), "/");
    assert_eq!(parse_prefix("scores").unwrap(), "/scores");
    assert_eq!(parse_prefix("/scores/").unwrap(), "/scores");
    assert_eq!(parse_prefix("a/b").unwrap(), "/a/b");
}

#[test]
fn prefix_rejects_route_syntax() {
    for raw in ["/:id", "/*rest", "/{user}"] {
        assert!(matches!(parse_prefix(raw), Err(Error::InvalidPrefix(p)) if p == raw));
    }
}

#[test]
fn index_assets_point_at_static_route() {
    let index = r#"<link rel="stylesheet" href="/style-1a2b.css">
<script type="module">import init from '/nightmode-frontend-3c4d.js';init('/nightmode-frontend-3c4d_bg.wasm');</script>"#;

    let rooted = rewrite_index(index, "/");
    assert!(rooted.contains(r#"href="/static/style-1a2b.css""#));
    assert!(rooted.contains("'/static/nightmode-frontend-3c4d.js'"));
    assert!(rooted.contains("'/static/nightmode-frontend-3c4d_bg.wasm'"));

    let prefixed = rewrite_index(index, "/scores");
    assert!(prefixed.contains(r#"href="/scores/static/style-1a2b.css""#));
    assert!(prefixed.contains("'/scores/static/nightmode-frontend-3c4d.js'"));
}

#[test]
fn missing_env_var_falls_back_to_default() {
    let port: u16 = parse_env_var("NIGHTMODE_TEST_UNSET_PORT", 1080);
    assert_eq!(port, 1080);
}
