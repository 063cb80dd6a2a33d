use serde::{Deserialize, Serialize};

use super::{
    reducers::{max_price, min_price, sum_prices},
    volatility::{std_dev, variance, volatility_percent},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub volatility_percent: f64,
}

// Every reducer for a series in one value. Empty input gives 0.0 throughout.
pub fn summarize(prices: &[f64]) -> PriceSummary {
    let count = prices.len();
    let sum = sum_prices(prices);
    let mean = if count == 0 { 0.0 } else { sum / count as f64 };

    PriceSummary {
        count,
        min: min_price(prices),
        max: max_price(prices),
        sum,
        mean,
        variance: variance(prices),
        std_dev: std_dev(prices),
        volatility_percent: volatility_percent(prices),
    }
}

impl PriceSummary {
    // Overflowed sums and their derived values are not finite
    pub fn is_finite(&self) -> bool {
        [
            self.min,
            self.max,
            self.sum,
            self.mean,
            self.variance,
            self.std_dev,
            self.volatility_percent,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}
