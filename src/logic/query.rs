use thiserror::Error;

/// A price query parameter that is present but not a number
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid {param}. Please provide a numeric value.")]
pub struct InvalidNumber {
    pub param: &'static str,
}

/// Parse an optional price parameter. Surrounding whitespace is ignored;
/// infinities and NaN are not valid bounds.
pub fn parse_price(param: &'static str, raw: Option<&str>) -> Result<Option<f64>, InvalidNumber> {
    let Some(value) = raw else {
        return Ok(None);
    };

    match value.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(InvalidNumber { param }),
    }
}

pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}
