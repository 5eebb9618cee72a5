use crate::modules::bookings::adapters::outbound::booking_queries::BookingQueries;
use crate::modules::bookings::core::aggregate::{TourAggregate, aggregate_by_tour};
use crate::modules::bookings::core::stats::{BookingStats, compute_stats};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::core::session::AuthenticatedSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourOverview {
    pub tours: Vec<TourAggregate>,
    pub stats: BookingStats,
}

pub struct AggregateBookingsByTourHandler<TQueries>
where
    TQueries: BookingQueries + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
}

impl<TQueries> AggregateBookingsByTourHandler<TQueries>
where
    TQueries: BookingQueries + Send + Sync + 'static,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    pub async fn handle(
        &self,
        session: &AuthenticatedSession,
    ) -> Result<TourOverview, ApplicationError> {
        let bookings = self.queries.list_bookings(&session.booking_scope()).await?;

        let tour_ids: Vec<String> = bookings
            .iter()
            .map(|b| b.tour_id.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let tours = self.queries.find_tours(&tour_ids).await?;

        let aggregates = aggregate_by_tour(&bookings, &tours).inspect_err(|e| {
            tracing::warn!(
                user_id = session.user_id(),
                error = %e,
                "tour aggregation rejected"
            );
        })?;
        let stats = compute_stats(&bookings);

        tracing::debug!(
            user_id = session.user_id(),
            role = ?session.role(),
            tours = aggregates.len(),
            bookings = stats.total_bookings,
            "aggregated bookings by tour"
        );
        Ok(TourOverview {
            tours: aggregates,
            stats,
        })
    }
}
