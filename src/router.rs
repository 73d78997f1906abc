use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::handlers::{heartbeat_handler, script_handler};
use crate::rate_limit;
use crate::state::AppState;

/// Assembles the router and middleware chain.
///
/// Request order: trace logging, panic recovery, then route dispatch. The
/// heartbeat route sits outside the rate-limited subtree so liveness checks
/// never consume a token; only the script route passes through the limiter.
pub fn build(state: Arc<AppState>) -> Router {
    let script = Router::new()
        .route("/{due_date}", get(script_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ));

    Router::new()
        .route("/", get(heartbeat_handler))
        .merge(script)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
