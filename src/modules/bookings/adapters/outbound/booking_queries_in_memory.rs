// In memory bookings and tours.
//
// Purpose
// - Exercise handlers and inbound adapters without the hosted backend.
//
// Responsibilities
// - Store tours with the guide that owns them, and bookings in insertion order.
// - Filter bookings by the caller's scope the way the backend's row filters do.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::modules::bookings::adapters::outbound::booking_queries::BookingQueries;
use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::tour::TourRef;
use crate::shared::core::session::BookingScope;

#[derive(Debug, Clone)]
struct StoredTour {
    tour: TourRef,
    guide_id: String,
}

#[derive(Default)]
pub struct InMemoryBookingQueries {
    tours: RwLock<HashMap<String, StoredTour>>,
    bookings: RwLock<Vec<BookingRecord>>,
    is_offline: bool,
}

impl InMemoryBookingQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_tour(&self, tour: TourRef, guide_id: impl Into<String>) {
        let stored = StoredTour {
            tour,
            guide_id: guide_id.into(),
        };
        self.tours
            .write()
            .await
            .insert(stored.tour.id.clone(), stored);
    }

    pub async fn insert_booking(&self, booking: BookingRecord) {
        self.bookings.write().await.push(booking);
    }
}

#[async_trait::async_trait]
impl BookingQueries for InMemoryBookingQueries {
    async fn list_bookings(&self, scope: &BookingScope) -> anyhow::Result<Vec<BookingRecord>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Booking queries offline"));
        }

        let bookings = self.bookings.read().await;
        let items = match scope {
            BookingScope::All => bookings.clone(),
            BookingScope::Customer(user_id) => bookings
                .iter()
                .filter(|b| &b.user_id == user_id)
                .cloned()
                .collect(),
            BookingScope::Guide(guide_id) => {
                let tours = self.tours.read().await;
                bookings
                    .iter()
                    .filter(|b| {
                        tours
                            .get(&b.tour_id)
                            .is_some_and(|stored| &stored.guide_id == guide_id)
                    })
                    .cloned()
                    .collect()
            }
        };
        Ok(items)
    }

    async fn find_tours(&self, tour_ids: &[String]) -> anyhow::Result<HashMap<String, TourRef>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Booking queries offline"));
        }

        let tours = self.tours.read().await;
        let found: HashMap<String, TourRef> = tour_ids
            .iter()
            .filter_map(|id| {
                tours
                    .get(id)
                    .map(|stored| (id.clone(), stored.tour.clone()))
            })
            .collect();
        Ok(found)
    }
}
