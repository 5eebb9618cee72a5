// Pure bucket classification for bookings.
//
// Purpose
// - Split a booking snapshot into the upcoming, today and completed views shown to guides and
//   customers.
//
// Responsibilities
// - Today: confirmed, paid, on the reference date.
// - Upcoming: confirmed, paid, strictly after the reference date.
// - Completed: status completed. Payment is only checked under CompletedPolicy::RequirePaid.
// - Everything else lands in Bucket::Other and is left out of the buckets.
// - Validate every booking before classifying any of them. Never perform input or output.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus, PaymentStatus};
use crate::modules::bookings::core::errors::ClassifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Upcoming,
    Today,
    Completed,
    Other,
}

/// Whether a completed booking must also be paid to count as completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletedPolicy {
    #[default]
    AnyPayment,
    RequirePaid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedBooking {
    pub booking: BookingRecord,
    pub date: NaiveDate,
    pub bucket: Bucket,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingBuckets {
    pub upcoming: Vec<ClassifiedBooking>,
    pub today: Vec<ClassifiedBooking>,
    pub completed: Vec<ClassifiedBooking>,
}

pub fn classify_booking(
    booking: &BookingRecord,
    today: NaiveDate,
    policy: CompletedPolicy,
) -> Result<ClassifiedBooking, ClassifyError> {
    let date = booking.validate()?;
    let bucket = if booking.is_confirmed_and_paid() {
        match date.cmp(&today) {
            Ordering::Equal => Bucket::Today,
            Ordering::Greater => Bucket::Upcoming,
            Ordering::Less => Bucket::Other,
        }
    } else if booking.status == BookingStatus::Completed {
        match policy {
            CompletedPolicy::AnyPayment => Bucket::Completed,
            CompletedPolicy::RequirePaid if booking.payment_status == PaymentStatus::Paid => {
                Bucket::Completed
            }
            CompletedPolicy::RequirePaid => Bucket::Other,
        }
    } else {
        Bucket::Other
    };
    Ok(ClassifiedBooking {
        booking: booking.clone(),
        date,
        bucket,
    })
}

pub fn classify_by_bucket(
    bookings: &[BookingRecord],
    today: NaiveDate,
) -> Result<BookingBuckets, ClassifyError> {
    classify_by_bucket_with(bookings, today, CompletedPolicy::default())
}

pub fn classify_by_bucket_with(
    bookings: &[BookingRecord],
    today: NaiveDate,
    policy: CompletedPolicy,
) -> Result<BookingBuckets, ClassifyError> {
    let classified = bookings
        .iter()
        .map(|booking| classify_booking(booking, today, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let mut buckets = BookingBuckets::default();
    for item in classified {
        match item.bucket {
            Bucket::Upcoming => buckets.upcoming.push(item),
            Bucket::Today => buckets.today.push(item),
            Bucket::Completed => buckets.completed.push(item),
            Bucket::Other => {}
        }
    }
    for bucket in [
        &mut buckets.upcoming,
        &mut buckets.today,
        &mut buckets.completed,
    ] {
        // Ids are opaque strings, so equal dates order lexicographically ("10" before "2").
        bucket.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.booking.id.cmp(&b.booking.id))
        });
    }
    Ok(buckets)
}
