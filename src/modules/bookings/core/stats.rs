use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus, PaymentStatus};

/// Counters shown on top of the guide and admin dashboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStats {
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

pub fn compute_stats(bookings: &[BookingRecord]) -> BookingStats {
    bookings
        .iter()
        .fold(BookingStats::default(), |mut stats, booking| {
            stats.total_bookings += 1;
            match booking.status {
                BookingStatus::Pending => stats.pending += 1,
                BookingStatus::Confirmed => stats.confirmed += 1,
                BookingStatus::Completed => stats.completed += 1,
                BookingStatus::Cancelled => stats.cancelled += 1,
            }
            match booking.payment_status {
                PaymentStatus::Paid => stats.paid += 1,
                PaymentStatus::Unpaid => stats.unpaid += 1,
                PaymentStatus::Pending => stats.payment_pending += 1,
                PaymentStatus::Refunded => stats.refunded += 1,
            }
            // Non-positive counts are rejected by the classifier, they add nothing here.
            let participants = u64::try_from(booking.participants).unwrap_or(0);
            stats.total_participants = stats.total_participants.saturating_add(participants);
            stats
        })
}
