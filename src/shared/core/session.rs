// Authenticated caller passed explicitly into every use case.
//
// Purpose
// - Replace ambient "current user" lookups with a value the shell builds once per request.
//
// Responsibilities
// - Map the role strings stored by the auth backend onto a closed set of roles.
// - Derive the booking scope a caller is allowed to see.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("user id must not be empty")]
    MissingUserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    TourGuide,
    Admin,
}

impl Role {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "customer" | "user" | "traveler" => Ok(Role::Customer),
            "tour_guide" | "guide" | "tourguide" => Ok(Role::TourGuide),
            "admin" => Ok(Role::Admin),
            _ => Err(SessionError::UnknownRole(raw.to_string())),
        }
    }
}

/// Which bookings a caller may read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingScope {
    Customer(String),
    Guide(String),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    user_id: String,
    role: Role,
}

impl AuthenticatedSession {
    pub fn new(user_id: impl Into<String>, role: Role) -> Result<Self, SessionError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(SessionError::MissingUserId);
        }
        Ok(Self { user_id, role })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn booking_scope(&self) -> BookingScope {
        match self.role {
            Role::Customer => BookingScope::Customer(self.user_id.clone()),
            Role::TourGuide => BookingScope::Guide(self.user_id.clone()),
            Role::Admin => BookingScope::All,
        }
    }
}
