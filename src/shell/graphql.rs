use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, http::HeaderMap};

use crate::modules::bookings::use_cases::aggregate_bookings_by_tour::inbound::graphql::TourAggregatesQuery;
use crate::modules::bookings::use_cases::classify_bookings::inbound::graphql::BookingBucketsQuery;
use crate::shell::session::session_from_headers;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookingBucketsQuery, TourAggregatesQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Ok(session) = session_from_headers(&headers) {
        request = request.data(session);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
