// Runtime configuration read from the environment.
//
// Keys
// - WANDERWISE_HOST: bind address, defaults to 0.0.0.0
// - WANDERWISE_PORT: bind port, defaults to 8080
// - WANDERWISE_COMPLETED_POLICY: any_payment (default) or require_paid

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::info;

use crate::modules::bookings::core::classify::CompletedPolicy;

pub const HOST_KEY: &str = "WANDERWISE_HOST";
pub const PORT_KEY: &str = "WANDERWISE_PORT";
pub const COMPLETED_POLICY_KEY: &str = "WANDERWISE_COMPLETED_POLICY";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_COMPLETED_POLICY: &str = "any_payment";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub completed_policy: CompletedPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &'static str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let raw_host = value(HOST_KEY, DEFAULT_HOST);
        let raw_port = value(PORT_KEY, DEFAULT_PORT);
        let raw_policy = value(COMPLETED_POLICY_KEY, DEFAULT_COMPLETED_POLICY);

        let host: IpAddr = raw_host
            .trim()
            .parse()
            .map_err(|e| invalid(HOST_KEY, &raw_host, e))?;
        let port: u16 = raw_port
            .trim()
            .parse()
            .map_err(|e| invalid(PORT_KEY, &raw_port, e))?;

        Ok(Self {
            host,
            port,
            completed_policy: parse_completed_policy(&raw_policy)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_completed_policy(raw: &str) -> Result<CompletedPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "any_payment" => Ok(CompletedPolicy::AnyPayment),
        "require_paid" => Ok(CompletedPolicy::RequirePaid),
        _ => Err(invalid(
            COMPLETED_POLICY_KEY,
            raw,
            "expected any_payment or require_paid",
        )),
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
