use crate::models::error::ValidationError;

/// Sits between the query string and the logger. A rejected pair is dropped
/// the same way a missing parameter is.
pub trait CoordinateValidator: Send + Sync {
    fn validate(&self, lat: &str, lon: &str) -> Result<(), ValidationError>;
}

pub struct AcceptAll;

impl CoordinateValidator for AcceptAll {
    fn validate(&self, _lat: &str, _lon: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Decimal degrees, latitude within ±90 and longitude within ±180.
pub struct RangeValidator;

impl RangeValidator {
    fn check(name: &'static str, value: &str, limit: f64) -> Result<(), ValidationError> {
        let parsed = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::NotANumber { name, value: value.to_string() })?;

        if parsed.abs() > limit {
            return Err(ValidationError::OutOfRange { name, value: parsed, limit });
        }
        Ok(())
    }
}

impl CoordinateValidator for RangeValidator {
    fn validate(&self, lat: &str, lon: &str) -> Result<(), ValidationError> {
        Self::check("lat", lat, 90.0)?;
        Self::check("lon", lon, 180.0)
    }
}
