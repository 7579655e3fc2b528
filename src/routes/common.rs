//! Operational routes: liveness, store readiness, build version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness of the configured book store.
#[derive(Debug, Serialize)]
struct StoreReadiness {
    status: &'static str,
    store: &'static str,
    reachable: bool,
}

impl StoreReadiness {
    fn from_ping(store: &'static str, reachable: bool) -> (StatusCode, Self) {
        let (code, status) = if reachable {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        };
        (code, Self { status, store, reachable })
    }
}

#[derive(Debug, Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StoreReadiness>) {
    let store = state.store.kind();
    let reachable = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(store, error = %e, "book store unreachable");
            false
        }
    };
    let (code, body) = StoreReadiness::from_ping(store, reachable);
    (code, Json(body))
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, /ready (store ping) and /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
