use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};
use crate::protocol::OutboundEvent;
use crate::store::StoreError;

/// JSON body every rejected HTTP request carries. The websocket error
/// event mirrors `code`, `message`, and `recoverable`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
    pub recoverable: bool,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Persistence failure: {detail}")]
    Persistence { detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn persistence(detail: impl Into<String>) -> Self {
        Self::Persistence {
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => match err {
                DomainError::GameAlreadyEnded => ErrorCode::GameAlreadyEnded,
                DomainError::GameNotStarted => ErrorCode::GameNotStarted,
                DomainError::PlayerNotRegistered => ErrorCode::PlayerNotRegistered,
                DomainError::NotYourTurn => ErrorCode::NotYourTurn,
                DomainError::InvalidMove(_) => ErrorCode::InvalidMove,
                DomainError::InvalidPosition(_) => ErrorCode::InvalidPosition,
                DomainError::ColumnFull => ErrorCode::ColumnFull,
                DomainError::LineAlreadyExists => ErrorCode::LineAlreadyExists,
                DomainError::UnsupportedGameType(_) => ErrorCode::UnsupportedGameType,
            },
            AppError::Persistence { .. } => ErrorCode::PersistenceFailure,
            AppError::BadRequest { .. } => ErrorCode::BadRequest,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn recoverable(&self) -> bool {
        self.code().recoverable()
    }

    /// Rule violations are conflicts, malformed input is a bad request,
    /// and infrastructure trouble is a server error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => match err {
                DomainError::GameAlreadyEnded
                | DomainError::GameNotStarted
                | DomainError::NotYourTurn
                | DomainError::ColumnFull
                | DomainError::LineAlreadyExists => StatusCode::CONFLICT,
                DomainError::PlayerNotRegistered => StatusCode::FORBIDDEN,
                DomainError::InvalidMove(_)
                | DomainError::InvalidPosition(_)
                | DomainError::UnsupportedGameType(_) => StatusCode::BAD_REQUEST,
            },
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Persistence { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status().as_u16(),
            code: self.code().as_str(),
            message: self.to_string(),
            recoverable: self.recoverable(),
        }
    }

    /// The websocket rendering of this error.
    pub fn to_event(&self) -> OutboundEvent {
        OutboundEvent::Error {
            code: self.code().as_str().to_owned(),
            message: self.to_string(),
            recoverable: self.recoverable(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::persistence(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self.body())
    }
}
