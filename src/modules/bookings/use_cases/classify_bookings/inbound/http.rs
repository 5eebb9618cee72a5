use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::bookings::core::booking::parse_calendar_date;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shell::session::session_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BookingBucketsParams {
    pub today: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingBucketsParams>,
) -> impl IntoResponse {
    let session = match session_from_headers(&headers) {
        Ok(session) => session,
        Err(_) => return StatusCode::UNAUTHORIZED.into_response(),
    };

    let today = match params.today {
        Some(raw) => match parse_calendar_date(&raw) {
            Some(date) => date,
            None => return StatusCode::BAD_REQUEST.into_response(),
        },
        None => Utc::now().date_naive(),
    };

    match state.classify_handler.handle(&session, today).await {
        Ok(buckets) => Json(buckets).into_response(),
        Err(ApplicationError::Domain(e)) => (StatusCode::CONFLICT, e.to_string()).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing booking buckets failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
