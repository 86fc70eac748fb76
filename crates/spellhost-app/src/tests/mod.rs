mod file_tests;

use std::fs;
use std::path::Path;

use axum::Router;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use spellhost_config::Config;
use spellhost_core::{discover, IsoLocaleDatabase};
use tower::ServiceExt;

use crate::server::router;
use crate::state::AppState;

pub(crate) fn write_pair(dir: &Path, base: &str) {
    fs::write(dir.join(format!("{base}.dic")), format!("1\n{base}\n")).unwrap();
    fs::write(dir.join(format!("{base}.aff")), "SET UTF-8\n").unwrap();
}

pub(crate) fn test_config() -> Config {
    let mut config = Config::new();
    config.network.base_url = "/".to_string();
    config.network.mount = "spellchecker".to_string();
    config.auth.token = None;
    config
}

/// Router over a catalog discovered from `dirs`, scanned in order
pub(crate) fn app_for(config: Config, dirs: &[&Path]) -> Router {
    let catalog = discover(dirs, &IsoLocaleDatabase::default());
    router(AppState::new(config, catalog))
}

pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    get_with(app, Request::builder().uri(uri)).await
}

pub(crate) async fn get_with(app: Router, request: axum::http::request::Builder) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}
