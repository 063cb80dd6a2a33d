use serde::{Deserialize, Serialize};
use validator::Validate;

// Largest series accepted over HTTP. Keep in sync with the validators below.
pub const MAX_SERIES_LEN: usize = 1_000_000;

// Room for MAX_SERIES_LEN full-precision literals such as
// `-1.2345678901234567e+300,` plus the surrounding object.
pub const MAX_BODY_BYTES: usize = MAX_SERIES_LEN * 32;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MovingAverageRequest {
    #[validate(length(max = 1000000))]
    pub prices: Vec<f64>,
    pub window: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct PriceSeriesRequest {
    #[validate(length(max = 1000000))]
    pub prices: Vec<f64>,
}

// Selects the error-signalling variants instead of the sentinel ones
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StrictParams {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovingAverageResponse {
    pub values: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceValueResponse {
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_length_cap_matches_validator() {
        let at_cap = PriceSeriesRequest {
            prices: vec![1.0; MAX_SERIES_LEN],
        };
        assert!(at_cap.validate().is_ok());

        let over_cap = MovingAverageRequest {
            prices: vec![1.0; MAX_SERIES_LEN + 1],
            window: 3,
        };
        assert!(over_cap.validate().is_err());
    }
}
