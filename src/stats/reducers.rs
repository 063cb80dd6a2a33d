// Scalar reducers over a price series. Empty input yields the 0.0 sentinel.

// Lowest price. Keeps the first element that nothing compares below.
pub fn min_price(prices: &[f64]) -> f64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0.0;
    };

    rest.iter()
        .fold(first, |lowest, &price| if price < lowest { price } else { lowest })
}

// Highest price. Keeps the first element that nothing compares above.
pub fn max_price(prices: &[f64]) -> f64 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0.0;
    };

    rest.iter()
        .fold(first, |highest, &price| if highest < price { price } else { highest })
}

// Left-to-right sum starting at +0.0
pub fn sum_prices(prices: &[f64]) -> f64 {
    prices.iter().fold(0.0, |acc, price| acc + price)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES: [f64; 3] = [3.5, -1.0, 7.2];

    #[test]
    fn min_and_max_of_mixed_series() {
        assert_eq!(min_price(&SERIES), -1.0);
        assert_eq!(max_price(&SERIES), 7.2);
    }

    #[test]
    fn sum_of_mixed_series() {
        assert!((sum_prices(&SERIES) - 9.7).abs() < 1e-12);
    }

    #[test]
    fn empty_series_returns_sentinel() {
        assert_eq!(min_price(&[]), 0.0);
        assert_eq!(max_price(&[]), 0.0);
        assert_eq!(sum_prices(&[]), 0.0);
        assert!(sum_prices(&[]).is_sign_positive());
    }

    #[test]
    fn single_element() {
        assert_eq!(min_price(&[42.0]), 42.0);
        assert_eq!(max_price(&[42.0]), 42.0);
        assert_eq!(sum_prices(&[42.0]), 42.0);
    }

    #[test]
    fn duplicates_and_zeros() {
        let prices = [0.0, 2.0, 2.0, 0.0];
        assert_eq!(min_price(&prices), 0.0);
        assert_eq!(max_price(&prices), 2.0);
        assert_eq!(sum_prices(&prices), 4.0);
    }

    #[test]
    fn nan_in_first_position_sticks() {
        assert!(min_price(&[f64::NAN, 1.0]).is_nan());
        assert!(max_price(&[f64::NAN, 1.0]).is_nan());
        assert_eq!(min_price(&[1.0, f64::NAN, 0.5]), 0.5);
    }
}
