use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::bookings::core::aggregate::{OverallStatus, TourAggregate};
use crate::modules::bookings::core::booking::BOOKING_DATE_FORMAT;
use crate::modules::bookings::core::stats::BookingStats;
use crate::modules::bookings::use_cases::aggregate_bookings_by_tour::handler::TourOverview;
use crate::shared::core::session::AuthenticatedSession;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlOverallStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl From<OverallStatus> for GqlOverallStatus {
    fn from(status: OverallStatus) -> Self {
        match status {
            OverallStatus::Confirmed => Self::Confirmed,
            OverallStatus::Pending => Self::Pending,
            OverallStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTourAggregate {
    pub tour_id: String,
    pub title: String,
    pub location: String,
    pub earliest_date: String,
    pub total_clients: i64,
    pub overall_status: GqlOverallStatus,
    pub contributing_booking_ids: Vec<String>,
}

impl From<TourAggregate> for GqlTourAggregate {
    fn from(a: TourAggregate) -> Self {
        Self {
            tour_id: a.tour_id,
            title: a.title,
            location: a.location,
            earliest_date: a.earliest_date.format(BOOKING_DATE_FORMAT).to_string(),
            total_clients: a.total_clients,
            overall_status: a.overall_status.into(),
            contributing_booking_ids: a.contributing_booking_ids,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBookingStats {
    pub total_bookings: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub paid: u64,
    pub unpaid: u64,
    pub payment_pending: u64,
    pub refunded: u64,
    pub total_participants: u64,
}

impl From<BookingStats> for GqlBookingStats {
    fn from(s: BookingStats) -> Self {
        Self {
            total_bookings: s.total_bookings,
            pending: s.pending,
            confirmed: s.confirmed,
            completed: s.completed,
            cancelled: s.cancelled,
            paid: s.paid,
            unpaid: s.unpaid,
            payment_pending: s.payment_pending,
            refunded: s.refunded,
            total_participants: s.total_participants,
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlTourOverview {
    pub tours: Vec<GqlTourAggregate>,
    pub stats: GqlBookingStats,
}

impl From<TourOverview> for GqlTourOverview {
    fn from(o: TourOverview) -> Self {
        Self {
            tours: o.tours.into_iter().map(Into::into).collect(),
            stats: o.stats.into(),
        }
    }
}

#[derive(Default)]
pub struct TourAggregatesQuery;

#[Object]
impl TourAggregatesQuery {
    async fn tour_aggregates(&self, context: &Context<'_>) -> GqlResult<GqlTourOverview> {
        let state = context.data_unchecked::<AppState>();
        let session = context
            .data_opt::<AuthenticatedSession>()
            .ok_or_else(|| async_graphql::Error::new("unauthenticated"))?;
        let overview = state
            .aggregate_handler
            .handle(session)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(overview.into())
    }
}
