// Status middleware: gate, fetch, aggregate, render; passthrough otherwise

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::aggregation::aggregate;
use crate::render;

/// The status path is fixed; everything else passes through.
pub(crate) const STATUS_PATH: &str = "/status";

pub(super) const NOT_FOUND_BODY: &str = "Not Found";
pub(super) const WATCHER_DOWN_BODY: &str = "Watcher is not running";

/// Per-request state machine. `next` runs in exactly one case: a
/// non-matching path. Every other outcome owns the response.
pub(super) async fn status_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if req.uri().path() != STATUS_PATH {
        return next.run(req).await;
    }

    if !(state.options.check)() {
        return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
    }

    let payload = match state.watcher_repo.fetch_snapshot().await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "watcher snapshot fetch failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, WATCHER_DOWN_BODY).into_response();
        }
    };

    let report = aggregate(&payload, &state.identity, state.options.cluster_start_time);
    render::render(&report, state.options.format)
}
