use {
    super::error::PipelineError,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Amount in minor currency units (cents for two-decimal currencies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount(i64);

impl MoneyAmount {
    pub fn new(cents: i64) -> Result<Self, PipelineError> {
        if cents < 0 {
            return Err(PipelineError::Validation(format!(
                "MoneyAmount cannot be negative, got: {cents}"
            )));
        }
        Ok(Self(cents))
    }

    /// Converts a major-unit price (e.g. `19.99`) into minor units, rounding
    /// to the nearest unit rather than truncating.
    pub fn from_major_units(price: f64) -> Result<Self, PipelineError> {
        if !price.is_finite() {
            return Err(PipelineError::Validation(format!(
                "price must be a finite number, got: {price}"
            )));
        }
        if price < 0.0 {
            return Err(PipelineError::Validation(format!(
                "price cannot be negative, got: {price}"
            )));
        }

        let cents = (price * 100.0).round();
        if cents >= i64::MAX as f64 {
            return Err(PipelineError::Validation(format!(
                "price too large: {price}"
            )));
        }
        Self::new(cents as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase ISO 4217 code as the provider expects it (`usd`, `eur`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Result<Self, PipelineError> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PipelineError::Validation(format!(
                "currency must be a 3-letter ISO code, got: {code:?}"
            )));
        }
        Ok(Self(code.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
