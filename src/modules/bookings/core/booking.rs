// Booking rows as delivered by the persistence layer.
//
// Purpose
// - Carry the raw booking shape the classifier consumes. The record is read only here.
//
// Responsibilities
// - Keep the date as the raw string the backend returns so malformed values surface as
//   typed errors during classification instead of failing deserialization of the whole page.
// - Offer the validation the classifier relies on (calendar date, positive participants).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::errors::ClassifyError;

pub const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Pending,
    Paid,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub tour_id: String,
    pub user_id: String,
    pub date: String,
    pub participants: i32,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl BookingRecord {
    pub fn booking_date(&self) -> Result<NaiveDate, ClassifyError> {
        parse_calendar_date(&self.date).ok_or_else(|| ClassifyError::InvalidInput {
            booking_id: self.id.clone(),
            reason: format!("malformed date {:?}", self.date),
        })
    }

    /// Parses the date and checks the participant count in one go.
    pub fn validate(&self) -> Result<NaiveDate, ClassifyError> {
        if self.participants <= 0 {
            return Err(ClassifyError::InvalidInput {
                booking_id: self.id.clone(),
                reason: format!("participants must be positive, got {}", self.participants),
            });
        }
        self.booking_date()
    }

    pub fn is_confirmed_and_paid(&self) -> bool {
        self.status == BookingStatus::Confirmed && self.payment_status == PaymentStatus::Paid
    }
}

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded fields and signed years for %Y-%m-%d.
    if !has_calendar_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, BOOKING_DATE_FORMAT).ok()
}

fn has_calendar_date_shape(raw: &str) -> bool {
    if raw.len() != 10 {
        return false;
    }
    raw.bytes().enumerate().all(|(index, byte)| match index {
        4 | 7 => byte == b'-',
        _ => byte.is_ascii_digit(),
    })
}
