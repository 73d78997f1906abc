use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::date::{self, DateError};
use crate::state::AppState;

/// Serves the JavaScript template with the validated due date substituted.
///
/// The flow is linear: extract -> validate -> render -> respond. Every
/// failure is terminal for the request and reported as a plain-text body.
pub async fn script_handler(
    State(state): State<Arc<AppState>>,
    Path(due_date): Path<String>,
) -> Response {
    let due_date = match date::validate(&due_date) {
        Ok(_) => due_date,
        Err(DateError::Missing) => {
            return (StatusCode::BAD_REQUEST, "due_date parameter is required").into_response();
        }
        Err(DateError::InvalidFormat) => {
            return (StatusCode::BAD_REQUEST, "Invalid date format. Use YYYY-MM-DD.")
                .into_response();
        }
    };

    match state.template.render(&[("DueDate", due_date.as_str())]) {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/javascript")],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render template").into_response()
        }
    }
}
