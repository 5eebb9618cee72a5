// Builds the explicit session from headers set by the auth gateway in front of this service.

use axum::http::HeaderMap;

use crate::shared::core::session::{AuthenticatedSession, Role, SessionError};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub fn session_from_headers(headers: &HeaderMap) -> Result<AuthenticatedSession, SessionError> {
    let role = Role::parse(header(headers, USER_ROLE_HEADER))?;
    AuthenticatedSession::new(header(headers, USER_ID_HEADER), role)
}
