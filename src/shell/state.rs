use crate::modules::bookings::adapters::outbound::booking_queries_in_memory::InMemoryBookingQueries;
use crate::modules::bookings::core::classify::CompletedPolicy;
use crate::modules::bookings::use_cases::aggregate_bookings_by_tour::handler::AggregateBookingsByTourHandler;
use crate::modules::bookings::use_cases::classify_bookings::handler::ClassifyBookingsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classify_handler: Arc<ClassifyBookingsHandler<InMemoryBookingQueries>>,
    pub aggregate_handler: Arc<AggregateBookingsByTourHandler<InMemoryBookingQueries>>,
}

impl AppState {
    pub fn new(queries: Arc<InMemoryBookingQueries>, policy: CompletedPolicy) -> Self {
        Self {
            classify_handler: Arc::new(ClassifyBookingsHandler::new(queries.clone(), policy)),
            aggregate_handler: Arc::new(AggregateBookingsByTourHandler::new(queries)),
        }
    }
}
