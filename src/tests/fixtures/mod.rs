pub mod booking_record;
pub mod tour_ref;
