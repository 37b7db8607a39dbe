//! Unified API router for the String Analyzer
//!
//! Merges the strings router with the root info route, adds CORS and
//! request tracing, and returns a single axum `Router`.
//!
//! ## Endpoint Map
//!
//! | Method | Path                                  | Description              |
//! |--------|---------------------------------------|--------------------------|
//! | GET    | `/`                                   | Liveness and route list  |
//! | POST   | `/strings`                            | Analyze and store        |
//! | GET    | `/strings`                            | List with typed filters  |
//! | GET    | `/strings/filter-by-natural-language` | List with free text      |
//! | GET    | `/strings/:value`                     | Fetch by original value  |
//! | DELETE | `/strings/:value`                     | Delete by original value |

use crate::strings::{strings_router, StringsState};
use crate::strings::types::ServiceInfo;
use axum::{
    extract::State,
    http::{header, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Routes advertised by `GET /`
pub const ENDPOINTS: [&str; 5] = [
    "POST /strings",
    "GET /strings/:string_value",
    "GET /strings",
    "GET /strings/filter-by-natural-language",
    "DELETE /strings/:string_value",
];

/// Build the complete HTTP application
pub fn build_app(state: StringsState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(service_info))
        .with_state(state.clone())
        .merge(strings_router(state))
        .layer(build_cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn service_info(State(state): State<StringsState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "String Analyzer API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        stored: state.store.len().await,
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
