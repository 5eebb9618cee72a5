use thiserror::Error;

use crate::modules::bookings::core::errors::ClassifyError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Queries(#[from] anyhow::Error),

    #[error("domain rejected: {0}")]
    Domain(#[from] ClassifyError),
}
