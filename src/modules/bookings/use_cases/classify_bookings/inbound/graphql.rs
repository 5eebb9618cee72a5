use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::bookings::core::booking::{
    BOOKING_DATE_FORMAT, BookingStatus, PaymentStatus, parse_calendar_date,
};
use crate::modules::bookings::core::classify::{BookingBuckets, Bucket, ClassifiedBooking};
use crate::shared::core::session::AuthenticatedSession;
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlBookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl From<BookingStatus> for GqlBookingStatus {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Completed => Self::Completed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlPaymentStatus {
    Unpaid,
    Pending,
    Paid,
    Refunded,
}

impl From<PaymentStatus> for GqlPaymentStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Unpaid => Self::Unpaid,
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Refunded => Self::Refunded,
        }
    }
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlBucket {
    Upcoming,
    Today,
    Completed,
    Other,
}

impl From<Bucket> for GqlBucket {
    fn from(bucket: Bucket) -> Self {
        match bucket {
            Bucket::Upcoming => Self::Upcoming,
            Bucket::Today => Self::Today,
            Bucket::Completed => Self::Completed,
            Bucket::Other => Self::Other,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlClassifiedBooking {
    pub id: String,
    pub tour_id: String,
    pub user_id: String,
    pub date: String,
    pub participants: i32,
    pub status: GqlBookingStatus,
    pub payment_status: GqlPaymentStatus,
    pub bucket: GqlBucket,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ClassifiedBooking> for GqlClassifiedBooking {
    fn from(c: ClassifiedBooking) -> Self {
        Self {
            id: c.booking.id,
            tour_id: c.booking.tour_id,
            user_id: c.booking.user_id,
            date: c.date.format(BOOKING_DATE_FORMAT).to_string(),
            participants: c.booking.participants,
            status: c.booking.status.into(),
            payment_status: c.booking.payment_status.into(),
            bucket: c.bucket.into(),
            created_at: c.booking.created_at,
            updated_at: c.booking.updated_at,
        }
    }
}

#[derive(async_graphql::SimpleObject)]
pub struct GqlBookingBuckets {
    pub upcoming: Vec<GqlClassifiedBooking>,
    pub today: Vec<GqlClassifiedBooking>,
    pub completed: Vec<GqlClassifiedBooking>,
}

impl From<BookingBuckets> for GqlBookingBuckets {
    fn from(b: BookingBuckets) -> Self {
        Self {
            upcoming: b.upcoming.into_iter().map(Into::into).collect(),
            today: b.today.into_iter().map(Into::into).collect(),
            completed: b.completed.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct BookingBucketsQuery;

#[Object]
impl BookingBucketsQuery {
    async fn booking_buckets(
        &self,
        context: &Context<'_>,
        today: Option<String>,
    ) -> GqlResult<GqlBookingBuckets> {
        let state = context.data_unchecked::<AppState>();
        let session = context
            .data_opt::<AuthenticatedSession>()
            .ok_or_else(|| async_graphql::Error::new("unauthenticated"))?;
        let today = match today {
            Some(raw) => match parse_calendar_date(&raw) {
                Some(date) => date,
                None => return Err(async_graphql::Error::new(format!("invalid date {raw:?}"))),
            },
            None => Utc::now().date_naive(),
        };
        let buckets = state
            .classify_handler
            .handle(session, today)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(buckets.into())
    }
}
