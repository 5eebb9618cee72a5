// Composition root for the bookings context.
//
// Responsibilities:
// - Read config from environment.
// - Build the explicit session for each request.
// - Wire the booking queries adapter into use case handlers.
// - Expose the HTTP and GraphQL routes.

pub mod config;
pub mod graphql;
pub mod http;
pub mod session;
pub mod state;
