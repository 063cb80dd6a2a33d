//! Pure price-series statistics.
//!
//! Every function here is total: degenerate input maps to `0.0` or an empty
//! vector. The [`strict`] module offers the same computations with errors
//! instead of sentinels.

pub mod moving_average;
pub mod reducers;
pub mod strict;
pub mod summary;
pub mod volatility;

pub use moving_average::moving_average;
pub use reducers::{max_price, min_price, sum_prices};
pub use strict::StatsError;
pub use summary::{summarize, PriceSummary};
pub use volatility::{std_dev, variance, volatility_percent};
