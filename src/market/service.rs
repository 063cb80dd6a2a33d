use tracing::debug;

use crate::{
    error::AppError,
    stats::{
        self,
        strict::{try_max_price, try_min_price, try_moving_average, try_sum_prices, try_summarize},
        PriceSummary,
    },
};

// Dispatches to the sentinel or strict statistics. Holds no state.
#[derive(Clone, Debug, Default)]
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    pub fn moving_average(
        &self,
        prices: &[f64],
        window: i64,
        strict: bool,
    ) -> Result<Vec<f64>, AppError> {
        debug!(len = prices.len(), window, strict, "computing moving average");

        if strict {
            return Ok(try_moving_average(prices, window)?);
        }
        Ok(stats::moving_average(prices, window))
    }

    pub fn min_price(&self, prices: &[f64], strict: bool) -> Result<f64, AppError> {
        debug!(len = prices.len(), strict, "computing min price");

        if strict {
            return Ok(try_min_price(prices)?);
        }
        Ok(stats::min_price(prices))
    }

    pub fn max_price(&self, prices: &[f64], strict: bool) -> Result<f64, AppError> {
        debug!(len = prices.len(), strict, "computing max price");

        if strict {
            return Ok(try_max_price(prices)?);
        }
        Ok(stats::max_price(prices))
    }

    pub fn sum_prices(&self, prices: &[f64], strict: bool) -> Result<f64, AppError> {
        debug!(len = prices.len(), strict, "computing price sum");

        if strict {
            return Ok(try_sum_prices(prices)?);
        }
        Ok(stats::sum_prices(prices))
    }

    pub fn summarize(&self, prices: &[f64], strict: bool) -> Result<PriceSummary, AppError> {
        debug!(len = prices.len(), strict, "summarizing prices");

        if strict {
            return Ok(try_summarize(prices)?);
        }
        Ok(stats::summarize(prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_mode_never_fails() {
        let service = StatsService::new();
        assert_eq!(service.min_price(&[], false).unwrap(), 0.0);
        assert_eq!(service.max_price(&[], false).unwrap(), 0.0);
        assert_eq!(service.sum_prices(&[], false).unwrap(), 0.0);
        assert!(service.moving_average(&[1.0], -2, false).unwrap().is_empty());
        assert_eq!(service.summarize(&[], false).unwrap().count, 0);
    }

    #[test]
    fn strict_mode_reports_degenerate_input() {
        let service = StatsService::new();
        assert!(matches!(
            service.min_price(&[], true),
            Err(AppError::Stats(stats::StatsError::EmptySeries))
        ));
        assert!(matches!(
            service.moving_average(&[1.0, 2.0], 3, true),
            Err(AppError::Stats(stats::StatsError::InvalidWindow { window: 3, len: 2 }))
        ));
        assert!(service.summarize(&[], true).is_err());
    }

    #[test]
    fn strict_mode_matches_sentinel_on_valid_input() {
        let service = StatsService::new();
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(
            service.moving_average(&prices, 3, true).unwrap(),
            vec![2.0, 3.0, 4.0]
        );
        assert_eq!(service.sum_prices(&prices, true).unwrap(), 15.0);
    }
}
