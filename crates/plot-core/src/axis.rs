// File: crates/plot-core/src/axis.rs
// Summary: Axis model and comma-separated range-text parsing.

/// A labeled linear axis domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("x", -10.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("y", -10.0, 10.0)
    }
}

/// Range-text errors. Malformed input is reported, never propagated as NaN.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("expected 'min,max', got {0} value(s)")]
    WrongCount(usize),
    #[error("range bound '{0}' is not a finite number")]
    NotANumber(String),
    #[error("range min {min} must be below max {max}")]
    Reversed { min: f64, max: f64 },
}

/// Parse `"min,max"` into an ordered pair of finite bounds.
pub fn parse_range(text: &str) -> Result<(f64, f64), RangeError> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(RangeError::WrongCount(parts.len()));
    }
    let mut bounds = [0.0f64; 2];
    for (slot, part) in bounds.iter_mut().zip(&parts) {
        let trimmed = part.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| RangeError::NotANumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(RangeError::NotANumber(trimmed.to_string()));
        }
        *slot = value;
    }
    let [min, max] = bounds;
    if min >= max {
        return Err(RangeError::Reversed { min, max });
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_text() {
        assert_eq!(parse_range("-6.28,6.28"), Ok((-6.28, 6.28)));
        assert_eq!(parse_range(" -1 , 1 "), Ok((-1.0, 1.0)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_range("1"), Err(RangeError::WrongCount(1)));
        assert_eq!(parse_range("1,2,3"), Err(RangeError::WrongCount(3)));
    }

    #[test]
    fn rejects_non_numeric_bounds() {
        assert_eq!(
            parse_range("abc,2"),
            Err(RangeError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_range("1,inf"),
            Err(RangeError::NotANumber("inf".to_string()))
        );
    }

    #[test]
    fn rejects_reversed_or_empty_spans() {
        assert_eq!(
            parse_range("2,1"),
            Err(RangeError::Reversed { min: 2.0, max: 1.0 })
        );
        assert_eq!(
            parse_range("3,3"),
            Err(RangeError::Reversed { min: 3.0, max: 3.0 })
        );
    }
}
