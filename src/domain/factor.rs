use std::fmt;

/// Multiplier applied to the monthly surplus to produce the serviceability
/// figure.
pub type Factor = f64;

/// Factor used when the caller does not supply one.
pub const DEFAULT_FACTOR: Factor = 1.5;

/// Parse a scaling factor from its string form.
/// Example: "1.5" -> 1.5, "2" -> 2.0
pub fn parse_factor(input: &str) -> Result<Factor, ParseFactorError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseFactorError::InvalidFormat)
}

/// Format a monetary amount with two decimal places for display.
/// Example: 1200.0 -> "1200.00", -12.345 -> "-12.35"
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFactorError {
    InvalidFormat,
}

impl fmt::Display for ParseFactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFactorError::InvalidFormat => write!(f, "invalid factor format"),
        }
    }
}

impl std::error::Error for ParseFactorError {}
