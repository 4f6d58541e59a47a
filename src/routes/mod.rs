// HTTP routes and the status middleware layer

mod http;
mod status;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::models::HostIdentity;
use crate::render::RenderFormat;
use crate::watcher_repo::WatcherRepo;

/// Gate predicate: decides per request whether the status page is served.
pub type GateCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// Middleware policy, fixed at construction: rendering mode, gate, and the
/// cluster start time (epoch ms, set once at startup).
#[derive(Clone)]
pub struct StatusOptions {
    pub format: RenderFormat,
    pub check: GateCheck,
    pub cluster_start_time: i64,
}

impl StatusOptions {
    /// Options with the default always-true gate.
    pub fn new(format: RenderFormat, cluster_start_time: i64) -> Self {
        Self {
            format,
            check: Arc::new(|| true),
            cluster_start_time,
        }
    }

    pub fn with_check(mut self, check: GateCheck) -> Self {
        self.check = check;
        self
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) watcher_repo: Arc<WatcherRepo>,
    pub(crate) identity: Arc<HostIdentity>,
    pub(crate) options: StatusOptions,
}

pub fn app(
    watcher_repo: Arc<WatcherRepo>,
    identity: Arc<HostIdentity>,
    options: StatusOptions,
) -> Router {
    let state = AppState {
        watcher_repo,
        identity,
        options,
    };
    Router::new()
        .route("/", get(|| async { "statuspage: cluster worker status" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        // Explicit fallback so the status layer sees unrouted paths too
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(middleware::from_fn_with_state(
            state.clone(),
            status::status_middleware,
        ))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
