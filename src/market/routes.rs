use axum::{routing::post, Router};

use crate::market::{handler, service::StatsService};

pub fn stats_routes(service: StatsService) -> Router {
  Router::new()
      .route("/moving-average", post(handler::moving_average))
      .route("/min", post(handler::min_price))
      .route("/max", post(handler::max_price))
      .route("/sum", post(handler::sum_prices))
      .route("/summary", post(handler::summary))
      .with_state(service)
}
