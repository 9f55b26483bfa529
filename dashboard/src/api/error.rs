use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use model::DashboardError;
use serde::Serialize;
use std::fmt;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-level failure, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::InvalidIdentifier(_)
            | DashboardError::InvalidRequest(_)
            | DashboardError::InvalidThreshold(_) => StatusCode::BAD_REQUEST,
            DashboardError::ConfigurationMissing(_)
            | DashboardError::Storage(_)
            | DashboardError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("request failed: {}", self.0);
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.0.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DashboardError::ConfigurationMissing("finalScore".into()), 500),
            (DashboardError::NotFound("Issue"), 404),
            (DashboardError::InvalidIdentifier("xyz".into()), 400),
            (DashboardError::InvalidRequest("Project ID is required".into()), 400),
            (DashboardError::InvalidThreshold("low above high".into()), 400),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code().as_u16(), status);
        }
    }
}
