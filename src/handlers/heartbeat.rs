use axum::http::StatusCode;

// Liveness check - 200 with an empty body, no business logic
pub async fn heartbeat_handler() -> StatusCode {
    StatusCode::OK
}
