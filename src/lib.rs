pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod stats;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::AppError;
pub use stats::{max_price, min_price, moving_average, sum_prices, summarize, PriceSummary};
