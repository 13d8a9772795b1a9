//! HTTP error envelope and extractor error handlers.
//!
//! Every failure leaves the service as `{"erro": <message>}`, the envelope
//! the questionnaire front-end and analysis notebooks already parse. Domain
//! and storage failures are translated into [`ApiError`] here so handlers
//! stay free of status-code plumbing.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::ports::ResponseRepositoryError;

/// Message returned when the request body is absent or not valid JSON.
pub const MISSING_BODY_MESSAGE: &str = "Dados não fornecidos";

/// Message returned when an id path segment is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Identificador inválido";

/// Stable category of an API failure, mapped onto an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request body or path is malformed.
    InvalidRequest,
    /// The requested response record does not exist.
    NotFound,
    /// A storage operation failed unexpectedly.
    InternalError,
}

/// Wire envelope for error responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "Resposta não encontrada")]
    pub erro: String,
}

/// API failure carrying the category and the message to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Client error for a malformed request body or path.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: message.into(),
        }
    }

    /// Failure for a lookup that matched no stored record.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Unexpected server-side failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }

    /// Stable failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message surfaced in the `erro` field.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ResponseRepositoryError> for ApiError {
    fn from(err: ResponseRepositoryError) -> Self {
        error!(error = %err, "storage operation failed");
        // Legacy contract: the storage message is surfaced verbatim to the
        // caller in the error envelope.
        Self::internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            erro: self.message.clone(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map JSON extractor failures (absent or unparsable bodies) to the
/// envelope. Registered through `actix_web::web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting request body");
    ApiError::invalid_request(MISSING_BODY_MESSAGE).into()
}

/// Map path extractor failures (non-integer ids) to the envelope.
/// Registered through `actix_web::web::PathConfig`.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting path parameter");
    ApiError::invalid_request(INVALID_ID_MESSAGE).into()
}
