use axum::{
  error_handling::HandleErrorLayer,
  extract::DefaultBodyLimit,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
  BoxError, Json, Router,
};
use serde_json::json;
use std::time::Duration;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{
  compression::CompressionLayer,
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  error::AppError,
  market::{model::MAX_BODY_BYTES, routes::stats_routes, service::StatsService},
};

pub fn create_router(config: &Config) -> Router {
  let stats_service = StatsService::new();

  // Setup routes
  let api_routes = Router::new()
      .route("/health", get(health_check))
      .nest("/stats", stats_routes(stats_service));

  // Build the router
  with_middleware(Router::new().nest("/api/v1", api_routes), config.request_timeout)
}

fn with_middleware(router: Router, request_timeout: Duration) -> Router {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  router
      .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
      .layer(
          ServiceBuilder::new()
              .layer(HandleErrorLayer::new(handle_middleware_error))
              .timeout(request_timeout),
      )
      .layer(CompressionLayer::new())
      .layer(TraceLayer::new_for_http())
      .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}

async fn handle_middleware_error(err: BoxError) -> Response {
  if err.is::<Elapsed>() {
      return AppError::TimeoutError.into_response();
  }
  AppError::InternalError(err.to_string()).into_response()
}
