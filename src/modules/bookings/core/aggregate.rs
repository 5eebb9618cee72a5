// Per tour rollups for the guide dashboard.
//
// Purpose
// - Collapse all bookings of a tour into one summary row with a client count and a display status.
//
// Responsibilities
// - Sum participants over every booking of the tour, whatever its status.
// - Derive the overall status: inactive tours first, then confirmed, pending, cancelled.
// - Fail on bookings pointing at tours missing from the lookup instead of dropping them.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::booking::{BookingRecord, BookingStatus};
use crate::modules::bookings::core::errors::ClassifyError;
use crate::modules::bookings::core::tour::TourRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourAggregate {
    pub tour_id: String,
    pub title: String,
    pub location: String,
    pub earliest_date: NaiveDate,
    pub total_clients: i64,
    pub overall_status: OverallStatus,
    pub contributing_booking_ids: Vec<String>,
}

pub fn overall_status(tour: &TourRef, statuses: &[BookingStatus]) -> OverallStatus {
    let all_cancelled = statuses.iter().all(|s| *s == BookingStatus::Cancelled);
    if !tour.is_active {
        // An inactive tour that still carries a live booking stays visible.
        return if all_cancelled {
            OverallStatus::Cancelled
        } else {
            OverallStatus::Confirmed
        };
    }
    if statuses.contains(&BookingStatus::Confirmed) {
        OverallStatus::Confirmed
    } else if statuses.contains(&BookingStatus::Pending) {
        OverallStatus::Pending
    } else {
        OverallStatus::Cancelled
    }
}

pub fn aggregate_by_tour(
    bookings: &[BookingRecord],
    tours: &HashMap<String, TourRef>,
) -> Result<Vec<TourAggregate>, ClassifyError> {
    let mut groups: BTreeMap<&str, (&TourRef, Vec<(NaiveDate, &BookingRecord)>)> = BTreeMap::new();
    for booking in bookings {
        let date = booking.validate()?;
        let tour = tours
            .get(&booking.tour_id)
            .ok_or_else(|| ClassifyError::UnknownTour {
                booking_id: booking.id.clone(),
                tour_id: booking.tour_id.clone(),
            })?;
        groups
            .entry(booking.tour_id.as_str())
            .or_insert_with(|| (tour, Vec::new()))
            .1
            .push((date, booking));
    }

    let mut aggregates = Vec::with_capacity(groups.len());
    for (tour_id, (tour, mut group)) in groups {
        // Ids compare as strings, same tie-break as the buckets.
        group.sort_by(|(a_date, a), (b_date, b)| a_date.cmp(b_date).then_with(|| a.id.cmp(&b.id)));
        let statuses: Vec<BookingStatus> = group.iter().map(|(_, b)| b.status).collect();
        // Groups are never empty and are sorted by date, so the first entry is the earliest.
        let earliest_date = group[0].0;
        aggregates.push(TourAggregate {
            tour_id: tour_id.to_string(),
            title: tour.title.clone(),
            location: tour.location.clone(),
            earliest_date,
            total_clients: group.iter().map(|(_, b)| i64::from(b.participants)).sum(),
            overall_status: overall_status(tour, &statuses),
            contributing_booking_ids: group.iter().map(|(_, b)| b.id.clone()).collect(),
        });
    }

    aggregates.sort_by(|a, b| {
        a.earliest_date
            .cmp(&b.earliest_date)
            .then_with(|| a.tour_id.cmp(&b.tour_id))
    });
    Ok(aggregates)
}
