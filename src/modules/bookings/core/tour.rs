use serde::{Deserialize, Serialize};

/// Tour fields joined onto bookings for aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRef {
    pub id: String,
    pub title: String,
    pub location: String,
    pub is_active: bool,
}
