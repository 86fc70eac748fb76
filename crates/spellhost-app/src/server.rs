use std::io;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::header;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use spellhost_config::CatalogFormat;
use spellhost_core::{url_path_join, ClientEntry};

use crate::errors::AppError;
use crate::middleware::{log_requests, require_token};
use crate::state::AppState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct CatalogResponse<'a> {
    version: &'static str,
    dictionaries: &'a [ClientEntry],
}

/// All routes, mounted under the configured base URL.
///
/// - `{mount}/language_manager`: catalog JSON (token protected)
/// - `{mount}/{identifier}/{file}`: raw `.aff`/`.dic` bytes
pub fn router(state: AppState) -> Router {
    let catalog_route = url_path_join(&[&state.mount_path, "language_manager"]);
    let files_route = url_path_join(&[&state.mount_path, "*path"]);

    let protected = Router::new()
        .route(&catalog_route, get(language_manager))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .merge(protected)
        .route(&files_route, get(dictionary_file))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn language_manager(State(state): State<AppState>) -> Response {
    match state.config.catalog.format {
        CatalogFormat::Envelope => Json(CatalogResponse {
            version: VERSION,
            dictionaries: &state.client_entries,
        })
        .into_response(),
        CatalogFormat::Bare => Json(state.client_entries.as_slice()).into_response(),
    }
}

/// Serve one of the two files registered for a dictionary. Any other
/// filename under the identifier is a 404.
async fn dictionary_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let (identifier, filename) = path
        .rsplit_once('/')
        .ok_or_else(|| AppError::NotFound(path.clone()))?;

    let file_path = state
        .catalog
        .get(identifier)
        .and_then(|entry| entry.file_path(filename))
        .ok_or_else(|| AppError::NotFound(path.clone()))?;

    let bytes = tokio::fs::read(&file_path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AppError::NotFound(path.clone())
        } else {
            AppError::FileRead {
                path: file_path.display().to_string(),
                source,
            }
        }
    })?;

    Ok(([(header::CONTENT_TYPE, "text/plain")], bytes).into_response())
}

async fn healthz() -> &'static str {
    "ok"
}
