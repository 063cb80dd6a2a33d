use axum::{
  extract::{Query, State},
  Json,
};
use validator::Validate;

use crate::{
  error::AppError,
  market::{
      model::{
          MovingAverageRequest, MovingAverageResponse, PriceSeriesRequest, PriceValueResponse,
          StrictParams,
      },
      service::StatsService,
  },
  stats::PriceSummary,
};

pub async fn moving_average(
  State(service): State<StatsService>,
  Query(params): Query<StrictParams>,
  Json(req): Json<MovingAverageRequest>,
) -> Result<Json<MovingAverageResponse>, AppError> {
  req.validate()?;

  let values = service.moving_average(&req.prices, req.window, params.strict)?;
  Ok(Json(MovingAverageResponse { values }))
}

pub async fn min_price(
  State(service): State<StatsService>,
  Query(params): Query<StrictParams>,
  Json(req): Json<PriceSeriesRequest>,
) -> Result<Json<PriceValueResponse>, AppError> {
  req.validate()?;

  let value = service.min_price(&req.prices, params.strict)?;
  Ok(Json(PriceValueResponse { value }))
}

pub async fn max_price(
  State(service): State<StatsService>,
  Query(params): Query<StrictParams>,
  Json(req): Json<PriceSeriesRequest>,
) -> Result<Json<PriceValueResponse>, AppError> {
  req.validate()?;

  let value = service.max_price(&req.prices, params.strict)?;
  Ok(Json(PriceValueResponse { value }))
}

pub async fn sum_prices(
  State(service): State<StatsService>,
  Query(params): Query<StrictParams>,
  Json(req): Json<PriceSeriesRequest>,
) -> Result<Json<PriceValueResponse>, AppError> {
  req.validate()?;

  let value = service.sum_prices(&req.prices, params.strict)?;
  Ok(Json(PriceValueResponse { value }))
}

pub async fn summary(
  State(service): State<StatsService>,
  Query(params): Query<StrictParams>,
  Json(req): Json<PriceSeriesRequest>,
) -> Result<Json<PriceSummary>, AppError> {
  req.validate()?;

  let summary = service.summarize(&req.prices, params.strict)?;
  Ok(Json(summary))
}
