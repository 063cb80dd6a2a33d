use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

use crate::stats::StatsError;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Validation error: {0}")]
  ValidationError(String),

  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Statistics error: {0}")]
  Stats(#[from] StatsError),

  #[error("Request timed out")]
  TimeoutError,

  #[error("Internal server error: {0}")]
  InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
  fn from(err: validator::ValidationErrors) -> Self {
      Self::ValidationError(err.to_string())
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let (status, error_message) = match self {
          AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
          AppError::Stats(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
          AppError::ConfigError(_) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              "A configuration error occurred".to_string(),
          ),
          AppError::TimeoutError => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
          AppError::InternalError(err) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              format!("An internal server error occurred: {}", err),
          ),
      };

      let body = Json(json!({
          "status": "error",
          "message": error_message,
      }));

      (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_codes() {
      let cases = [
          (AppError::ValidationError("bad".into()), StatusCode::BAD_REQUEST),
          (AppError::ConfigError("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
          (AppError::Stats(StatsError::EmptySeries), StatusCode::UNPROCESSABLE_ENTITY),
          (AppError::TimeoutError, StatusCode::REQUEST_TIMEOUT),
          (AppError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
      ];

      for (error, status) in cases {
          assert_eq!(error.into_response().status(), status);
      }
  }
}
