//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/`. Endpoint handlers use
//! `State<ApiContext>` (provided via `with_state`).

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router with all endpoints under `/api/`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/command", post(endpoints::command::submit))
        .route("/session", get(endpoints::session::snapshot))
        .route("/session/log", get(endpoints::session::log))
        .route("/session/suggestions", get(endpoints::session::suggestions))
        .route(
            "/session/workspace/close",
            post(endpoints::session::close_workspace),
        )
        .route("/desks/registration", post(endpoints::desks::register))
        .route("/desks/appointment", post(endpoints::desks::schedule))
        .route("/desks/records/lookup", post(endpoints::desks::lookup_record))
        .route("/desks/pharmacy/inventory", get(endpoints::desks::inventory))
        .route("/desks/pharmacy/dispense", post(endpoints::desks::dispense))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        // Demo service on localhost; any origin may call it.
        .layer(CorsLayer::permissive())
}
