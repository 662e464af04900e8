use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::MatchError;
use crate::models::ErrorResponse;
use crate::services::SourceError;

/// Failures surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Match(MatchError::InvalidArgument(_)) => "invalid_argument",
            ApiError::Match(MatchError::NotFound(_)) => "not_found",
            ApiError::Match(MatchError::MalformedData { .. }) => "malformed_data",
            ApiError::Source(_) => "source_unavailable",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Match(MatchError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            ApiError::Match(MatchError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Match(MatchError::MalformedData { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Source(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(MatchError::InvalidArgument("x".into())), 400),
            (ApiError::from(MatchError::NotFound("x".into())), 404),
            (
                ApiError::from(MatchError::MalformedData { job_id: "1".into(), reason: "x".into() }),
                502,
            ),
            (ApiError::from(SourceError::Api("x".into())), 503),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code().as_u16(), status, "{}", error);
        }
    }

    #[test]
    fn test_message_passes_through() {
        let error = ApiError::from(MatchError::NotFound("BLAH".into()));
        assert_eq!(error.to_string(), "worker not found: BLAH");
        assert_eq!(error.kind(), "not_found");
    }
}
