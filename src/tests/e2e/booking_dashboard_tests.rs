use crate::modules::bookings::adapters::outbound::booking_queries_in_memory::InMemoryBookingQueries;
use crate::modules::bookings::core::booking::{BookingStatus, PaymentStatus};
use crate::modules::bookings::core::classify::CompletedPolicy;
use crate::shell::http::router;
use crate::shell::session::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::shell::state::AppState;
use crate::tests::fixtures::booking_record::BookingRecordBuilder;
use crate::tests::fixtures::tour_ref::make_tour_ref;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn seeded_state() -> AppState {
    let queries = InMemoryBookingQueries::new();
    queries.insert_tour(make_tour_ref("t-alps", true), "guide-anna").await;
    queries.insert_tour(make_tour_ref("t-coast", false), "guide-anna").await;
    queries.insert_tour(make_tour_ref("t-city", true), "guide-ben").await;

    let bookings = [
        BookingRecordBuilder::new()
            .id("b-01")
            .tour_id("t-alps")
            .user_id("u-1")
            .date("2024-06-10")
            .participants(2)
            .build(),
        BookingRecordBuilder::new()
            .id("b-02")
            .tour_id("t-alps")
            .user_id("u-2")
            .date("2024-06-14")
            .participants(4)
            .build(),
        BookingRecordBuilder::new()
            .id("b-03")
            .tour_id("t-alps")
            .user_id("u-3")
            .date("2024-06-14")
            .status(BookingStatus::Pending)
            .payment_status(PaymentStatus::Unpaid)
            .participants(1)
            .build(),
        BookingRecordBuilder::new()
            .id("b-04")
            .tour_id("t-coast")
            .user_id("u-1")
            .date("2024-05-20")
            .status(BookingStatus::Completed)
            .payment_status(PaymentStatus::Unpaid)
            .participants(3)
            .build(),
        BookingRecordBuilder::new()
            .id("b-05")
            .tour_id("t-coast")
            .user_id("u-2")
            .date("2024-06-20")
            .status(BookingStatus::Cancelled)
            .payment_status(PaymentStatus::Refunded)
            .participants(2)
            .build(),
        BookingRecordBuilder::new()
            .id("b-06")
            .tour_id("t-city")
            .user_id("u-1")
            .date("2024-06-11")
            .participants(5)
            .build(),
    ];
    for booking in bookings {
        queries.insert_booking(booking).await;
    }
    AppState::new(Arc::new(queries), CompletedPolicy::AnyPayment)
}

async fn get_json(state: AppState, uri: &str, user_id: &str, role: &str) -> serde_json::Value {
    let response = router(state)
        .oneshot(
            Request::get(uri)
                .header(USER_ID_HEADER, user_id)
                .header(USER_ROLE_HEADER, role)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn ids(bucket: &serde_json::Value) -> Vec<String> {
    bucket
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["booking"]["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn shows_a_guide_their_booking_buckets() {
    let json = get_json(
        seeded_state().await,
        "/bookings/buckets?today=2024-06-10",
        "guide-anna",
        "tour_guide",
    )
    .await;

    assert_eq!(ids(&json["today"]), vec!["b-01"]);
    assert_eq!(ids(&json["upcoming"]), vec!["b-02"]);
    assert_eq!(ids(&json["completed"]), vec!["b-04"]);
}

#[tokio::test]
async fn shows_a_customer_only_their_own_bookings() {
    let json = get_json(
        seeded_state().await,
        "/bookings/buckets?today=2024-06-10",
        "u-1",
        "customer",
    )
    .await;

    assert_eq!(ids(&json["today"]), vec!["b-01"]);
    assert_eq!(ids(&json["upcoming"]), vec!["b-06"]);
    assert_eq!(ids(&json["completed"]), vec!["b-04"]);
}

#[tokio::test]
async fn shows_a_guide_their_tour_rollups() {
    let state = seeded_state().await;
    let json = get_json(state, "/bookings/tours", "guide-anna", "guide").await;

    let tours = json["tours"].as_array().unwrap();
    assert_eq!(tours.len(), 2);
    assert_eq!(tours[0]["tour_id"], "t-coast");
    assert_eq!(tours[0]["earliest_date"], "2024-05-20");
    assert_eq!(tours[0]["total_clients"], 5);
    // Inactive tour with a completed booking stays displayable.
    assert_eq!(tours[0]["overall_status"], "confirmed");
    assert_eq!(tours[1]["tour_id"], "t-alps");
    assert_eq!(tours[1]["total_clients"], 7);
    assert_eq!(tours[1]["overall_status"], "confirmed");
    assert_eq!(
        tours[1]["contributing_booking_ids"],
        serde_json::json!(["b-01", "b-02", "b-03"])
    );

    assert_eq!(json["stats"]["total_bookings"], 5);
    assert_eq!(json["stats"]["cancelled"], 1);
    assert_eq!(json["stats"]["total_participants"], 12);
}

#[tokio::test]
async fn shows_an_admin_every_tour() {
    let json = get_json(seeded_state().await, "/bookings/tours", "admin-1", "admin").await;

    assert_eq!(json["tours"].as_array().unwrap().len(), 3);
    assert_eq!(json["stats"]["total_bookings"], 6);
}
