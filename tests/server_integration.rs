//! Integration tests for the page server over a real socket

use portfolio::assets::AssetCache;
use portfolio::{AssetPaths, Content, PageAssembler, PageConfig, PageServer, ServerConfig};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::sync::Arc;

/// Start a page server on an ephemeral port and return its base URL
fn start_server() -> String {
    let paths = AssetPaths {
        background: PathBuf::from("/nonexistent/summer_bg.jpg"),
        profile: PathBuf::from("/nonexistent/me.jpg"),
    };
    let assembler = PageAssembler::new(PageConfig::default(), paths, Content::default())
        .with_cache(Arc::new(AssetCache::new()));
    let config = ServerConfig {
        addr: "127.0.0.1:0".to_string(),
    };
    let bound = PageServer::new(assembler)
        .bind(&config)
        .expect("failed to bind");
    let addr = bound.local_addr().expect("no ip address");

    std::thread::spawn(move || {
        let _ = bound.run();
    });

    format!("http://{}", addr)
}

#[test]
fn serves_portfolio_page() {
    let base_url = start_server();
    let res = reqwest::blocking::get(&base_url).expect("request failed");
    assert_eq!(res.status(), StatusCode::OK);

    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(res.headers().contains_key("etag"));

    let body = res.text().unwrap();
    assert!(body.contains("<title>Saeed Angiz Portfolio</title>"));
    assert!(body.contains("Featured Projects"));
}

#[test]
fn revalidates_with_etag() {
    let base_url = start_server();
    let client = Client::new();

    let first = client.get(&base_url).send().unwrap();
    let etag = first.headers()["etag"].to_str().unwrap().to_string();

    let second = client
        .get(&base_url)
        .header("If-None-Match", etag.as_str())
        .send()
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(second.headers()["etag"].to_str().unwrap(), etag);
}

#[test]
fn health_and_not_found() {
    let base_url = start_server();
    let health = reqwest::blocking::get(format!("{}/healthz", base_url)).unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(health.text().unwrap(), "ok");

    let missing = reqwest::blocking::get(format!("{}/nope", base_url)).unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[test]
fn rejects_post() {
    let base_url = start_server();
    let res = Client::new().post(&base_url).send().unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()["allow"].to_str().unwrap(), "GET, HEAD");
}

#[test]
fn head_returns_headers_without_body() {
    let base_url = start_server();
    let res = Client::new().head(&base_url).send().unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("etag"));
    assert!(res.bytes().unwrap().is_empty());
}

#[test]
fn index_alias_matches_root() {
    let base_url = start_server();
    let root = reqwest::blocking::get(&base_url).unwrap();
    let index = reqwest::blocking::get(format!("{}/index.html", base_url)).unwrap();
    assert_eq!(index.status(), StatusCode::OK);
    assert_eq!(root.headers()["etag"], index.headers()["etag"]);
}
