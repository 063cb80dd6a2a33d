// Strict variants: the same results as the sentinel functions, but degenerate
// input and non-finite results are reported instead of passed through.
use thiserror::Error;

use super::{
    moving_average::moving_average,
    reducers::{max_price, min_price, sum_prices},
    summary::{summarize, PriceSummary},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Price series is empty")]
    EmptySeries,

    #[error("Invalid window {window} for a series of {len} prices")]
    InvalidWindow { window: i64, len: usize },

    #[error("Result is not a finite number")]
    NonFinite,
}

pub fn try_moving_average(prices: &[f64], window: i64) -> Result<Vec<f64>, StatsError> {
    let fits = usize::try_from(window).map_or(false, |period| period <= prices.len());
    if window <= 0 || !fits {
        return Err(StatsError::InvalidWindow {
            window,
            len: prices.len(),
        });
    }

    let values = moving_average(prices, window);
    if !values.iter().all(|value| value.is_finite()) {
        return Err(StatsError::NonFinite);
    }
    Ok(values)
}

pub fn try_min_price(prices: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(prices)?;
    ensure_finite(min_price(prices))
}

pub fn try_max_price(prices: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(prices)?;
    ensure_finite(max_price(prices))
}

pub fn try_sum_prices(prices: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(prices)?;
    ensure_finite(sum_prices(prices))
}

pub fn try_summarize(prices: &[f64]) -> Result<PriceSummary, StatsError> {
    ensure_non_empty(prices)?;
    let summary = summarize(prices);
    if !summary.is_finite() {
        return Err(StatsError::NonFinite);
    }
    Ok(summary)
}

fn ensure_finite(value: f64) -> Result<f64, StatsError> {
    if !value.is_finite() {
        return Err(StatsError::NonFinite);
    }
    Ok(value)
}

fn ensure_non_empty(prices: &[f64]) -> Result<(), StatsError> {
    if prices.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(())
}
