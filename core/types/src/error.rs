use crate::client::ClientId;
use http::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    // === Domain errors ===
    #[error("client {0} not found")]
    NotFound(ClientId),

    #[error("client has not been stored yet")]
    Unpersisted,

    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    // === Third-party / infrastructure ===
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    pub fn invalid_input(field: &'static str, reason: &'static str) -> Self {
        Error::InvalidInput { field, reason }
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        match &self {
            Error::NotFound(_) => "ERR_CLIENT_NOT_FOUND",
            Error::Unpersisted => "ERR_CLIENT_UNPERSISTED",
            Error::InvalidInput { .. } => "ERR_INVALID_INPUT",
            Error::Storage(_) => "ERR_STORAGE",
        }
    }

    #[inline]
    pub fn http_status(&self) -> StatusCode {
        match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unpersisted | Error::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
