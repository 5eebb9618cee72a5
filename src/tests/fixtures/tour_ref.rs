use std::collections::HashMap;

use crate::modules::bookings::core::tour::TourRef;

pub fn make_tour_ref(id: &str, is_active: bool) -> TourRef {
    TourRef {
        id: id.to_string(),
        title: format!("Tour {id}"),
        location: "Lisbon".to_string(),
        is_active,
    }
}

pub fn tour_map(tours: Vec<TourRef>) -> HashMap<String, TourRef> {
    tours.into_iter().map(|t| (t.id.clone(), t)).collect()
}
