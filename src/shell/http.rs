use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::bookings::use_cases::aggregate_bookings_by_tour::inbound::http as aggregate_http;
use crate::modules::bookings::use_cases::classify_bookings::inbound::http as classify_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/bookings/buckets", get(classify_http::handle))
        .route("/bookings/tours", get(aggregate_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
