// Dispersion of a price series around its mean (population statistics).
use super::reducers::sum_prices;

fn mean(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    sum_prices(prices) / prices.len() as f64
}

// Population variance; 0.0 for an empty series
pub fn variance(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }

    let mean = mean(prices);
    let squared: Vec<f64> = prices.iter().map(|p| (p - mean).powi(2)).collect();
    sum_prices(&squared) / prices.len() as f64
}

pub fn std_dev(prices: &[f64]) -> f64 {
    variance(prices).sqrt()
}

// Standard deviation as a percentage of the mean. 0.0 when the series is
// empty or its mean is zero.
pub fn volatility_percent(prices: &[f64]) -> f64 {
    let mean = mean(prices);
    if mean == 0.0 {
        return 0.0;
    }
    std_dev(prices) / mean * 100.0
}
