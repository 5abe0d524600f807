use thiserror::Error;

use super::domain::CustomerId;

/// Business and infrastructure errors for customer workflows
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer with id [{0}] not found")]
    NotFound(CustomerId),
    #[error("Email already taken")]
    Conflict,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("hashing error: {0}")]
    Hashing(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl CustomerError {
    pub fn no_changes() -> Self { Self::InvalidRequest("No data changes found".into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CustomerError::InvalidRequest(_) => 2001,
            CustomerError::Conflict => 2002,
            CustomerError::NotFound(_) => 2003,
            CustomerError::Hashing(_) => 2101,
            CustomerError::Repository(_) => 2200,
        }
    }
}

impl From<models::errors::ModelError> for CustomerError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => CustomerError::InvalidRequest(msg),
            models::errors::ModelError::Db(msg) => CustomerError::Repository(msg),
        }
    }
}
