use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shell::session::session_from_headers;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let Ok(session) = session_from_headers(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state.aggregate_handler.handle(&session).await {
        Ok(overview) => Json(overview).into_response(),
        Err(ApplicationError::Domain(e)) => (StatusCode::CONFLICT, e.to_string()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "aggregating bookings by tour failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
