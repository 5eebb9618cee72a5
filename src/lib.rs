pub mod shared {
    pub mod core {
        pub mod session;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod aggregate;
            pub mod booking;
            pub mod classify;
            pub mod errors;
            pub mod stats;
            pub mod tour;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod classify_bookings {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod aggregate_bookings_by_tour {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod booking_queries;
                pub mod booking_queries_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests;
