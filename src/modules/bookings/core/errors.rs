#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("invalid booking {booking_id}: {reason}")]
    InvalidInput { booking_id: String, reason: String },

    #[error("booking {booking_id} references unknown tour {tour_id}")]
    UnknownTour { booking_id: String, tour_id: String },
}
