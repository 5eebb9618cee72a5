pub mod fixtures;

pub mod e2e {
    pub mod booking_dashboard_tests;
}
