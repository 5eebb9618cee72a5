// Port for reading bookings and tours from the hosted backend.
//
// The core never queries anything itself. Handlers fetch a snapshot through this trait and hand it
// to the pure classifier.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::tour::TourRef;
use crate::shared::core::session::BookingScope;

#[async_trait]
pub trait BookingQueries: Send + Sync {
    async fn list_bookings(&self, scope: &BookingScope) -> anyhow::Result<Vec<BookingRecord>>;

    /// Tours missing from the backend are absent from the returned map.
    async fn find_tours(&self, tour_ids: &[String]) -> anyhow::Result<HashMap<String, TourRef>>;
}
