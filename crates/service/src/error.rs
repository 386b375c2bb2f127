use thiserror::Error;

use pizzashop_core::DomainError;
use pizzashop_infra::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller passed a table number or amount the shop does not accept.
    /// Nothing was recorded.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] DomainError),

    /// The payment log could not be written.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ServiceError::InvalidArgument(_))
    }
}
