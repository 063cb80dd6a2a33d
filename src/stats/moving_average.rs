// Simple Moving Average over a trailing window.
//
// Output has `prices.len() - window + 1` values; an empty vector is
// returned for `window <= 0` or a window longer than the series.
pub fn moving_average(prices: &[f64], window: i64) -> Vec<f64> {
    if window <= 0 {
        return Vec::new();
    }

    let period = match usize::try_from(window) {
        Ok(period) if period <= prices.len() => period,
        _ => return Vec::new(),
    };
    let divisor = window as f64;

    let mut result = Vec::with_capacity(prices.len() - period + 1);

    // First window is summed directly, the rest are rolled
    let mut sum = prices[..period].iter().fold(0.0, |acc, price| acc + price);
    result.push(sum / divisor);

    for i in period..prices.len() {
        sum += prices[i] - prices[i - period];
        result.push(sum / divisor);
    }

    result
}
