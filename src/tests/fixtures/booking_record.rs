// Shared test fixture for BookingRecord.
// Defaults come from json/booking_record.json: a confirmed, paid booking for two on 2024-06-10.

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus, PaymentStatus};

pub struct BookingRecordBuilder {
    inner: BookingRecord,
}

impl Default for BookingRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingRecordBuilder {
    pub fn new() -> Self {
        let inner: BookingRecord = serde_json::from_str(include_str!("json/booking_record.json"))
            .expect("booking_record.json must deserialize");
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn tour_id(mut self, v: impl Into<String>) -> Self {
        self.inner.tour_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn participants(mut self, v: i32) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn status(mut self, v: BookingStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn payment_status(mut self, v: PaymentStatus) -> Self {
        self.inner.payment_status = v;
        self
    }

    pub fn updated_at(mut self, v: i64) -> Self {
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> BookingRecord {
        self.inner
    }
}

#[cfg(test)]
mod booking_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = BookingRecordBuilder::default().build();
        assert_eq!(built.id, "b-fixed-0001");
        assert_eq!(built.tour_id, "t-fixed-0001");
        assert_eq!(built.date, "2024-06-10");
        assert_eq!(built.participants, 2);
        assert_eq!(built.status, BookingStatus::Confirmed);
        assert_eq!(built.payment_status, PaymentStatus::Paid);
        assert_eq!(built.created_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = BookingRecordBuilder::new()
            .id("b-9")
            .tour_id("t-9")
            .user_id("u-9")
            .date("2025-01-01")
            .participants(7)
            .status(BookingStatus::Cancelled)
            .payment_status(PaymentStatus::Refunded)
            .updated_at(42)
            .build();

        assert_eq!(custom.id, "b-9");
        assert_eq!(custom.tour_id, "t-9");
        assert_eq!(custom.user_id, "u-9");
        assert_eq!(custom.date, "2025-01-01");
        assert_eq!(custom.participants, 7);
        assert_eq!(custom.status, BookingStatus::Cancelled);
        assert_eq!(custom.payment_status, PaymentStatus::Refunded);
        assert_eq!(custom.updated_at, 42);
    }
}
