use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use wanderwise_bookings::modules::bookings::adapters::outbound::booking_queries_in_memory::InMemoryBookingQueries;
use wanderwise_bookings::shell::config::AppConfig;
use wanderwise_bookings::shell::http::router;
use wanderwise_bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps until the hosted backend adapter lands
    let queries = Arc::new(InMemoryBookingQueries::new());
    let state = AppState::new(queries, config.completed_policy);

    let addr = config.socket_addr();
    tracing::info!(policy = ?config.completed_policy, "bookings API: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
