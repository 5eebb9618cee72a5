use crate::modules::bookings::adapters::outbound::booking_queries::BookingQueries;
use crate::modules::bookings::core::classify::{
    BookingBuckets, CompletedPolicy, classify_by_bucket_with,
};
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::core::session::AuthenticatedSession;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct ClassifyBookingsHandler<TQueries>
where
    TQueries: BookingQueries + Send + Sync + 'static,
{
    queries: Arc<TQueries>,
    policy: CompletedPolicy,
}

impl<TQueries> ClassifyBookingsHandler<TQueries>
where
    TQueries: BookingQueries + Send + Sync + 'static,
{
    pub fn new(queries: Arc<TQueries>, policy: CompletedPolicy) -> Self {
        Self { queries, policy }
    }

    pub async fn handle(
        &self,
        session: &AuthenticatedSession,
        today: NaiveDate,
    ) -> Result<BookingBuckets, ApplicationError> {
        let scope = session.booking_scope();
        let bookings = self.queries.list_bookings(&scope).await?;

        let buckets = classify_by_bucket_with(&bookings, today, self.policy).inspect_err(|e| {
            tracing::warn!(
                user_id = session.user_id(),
                error = %e,
                "booking classification rejected"
            );
        })?;

        tracing::debug!(
            user_id = session.user_id(),
            role = ?session.role(),
            %today,
            upcoming = buckets.upcoming.len(),
            today_count = buckets.today.len(),
            completed = buckets.completed.len(),
            "classified bookings"
        );
        Ok(buckets)
    }
}
