use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if status >= 400 {
        warn!(
            %request_id,
            method = %method,
            path = %path,
            status,
            duration_ms,
            "Request completed with error"
        );
    } else {
        info!(
            %request_id,
            method = %method,
            path = %path,
            status,
            duration_ms,
            "Request completed"
        );
    }

    response
}
