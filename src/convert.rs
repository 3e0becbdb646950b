//! The conversion engine - resolve factors and convert through square feet

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region;
use crate::unit::UNITS;

/// One conversion to perform. Stateless; built per user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Quantity in the source unit
    pub quantity: f64,
    /// Source unit key (e.g. "sqft")
    pub from: String,
    /// Target unit key (e.g. "acre")
    pub to: String,
    /// Selected state, or the placeholder sentinel
    pub region: String,
}

impl ConversionRequest {
    pub fn new(
        quantity: f64,
        from: impl Into<String>,
        to: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        ConversionRequest {
            quantity,
            from: from.into(),
            to: to.into(),
            region: region.into(),
        }
    }
}

/// Why a conversion could not be performed.
///
/// All three are recoverable by the caller supplying corrected input;
/// the `Display` strings are the user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionError {
    /// Quantity text did not parse to a finite number
    #[error("Please enter a valid number")]
    InvalidQuantity,

    /// No concrete state selected
    #[error("Please select a state (some regional units depend on state)")]
    RegionRequired,

    /// No usable factor for a chosen unit under the chosen state
    #[error("Conversion not available for selected units in this state yet.")]
    UnitUnavailable,
}

/// Resolve the effective square-feet-per-unit factor for a unit under a
/// region: the state override wins per unit, otherwise the global
/// catalog factor, otherwise `None`.
pub fn resolve_factor(region: &str, unit: &str) -> Option<f64> {
    region::override_factor(region, unit).or_else(|| UNITS.global_factor(unit))
}

/// Convert a quantity between two units under a region.
///
/// Validation order (first failing check wins):
/// 1. quantity must be finite
/// 2. region must not be the placeholder sentinel
/// 3. both units must resolve to a strictly positive factor
pub fn convert(request: &ConversionRequest) -> Result<f64, ConversionError> {
    if !request.quantity.is_finite() {
        return Err(ConversionError::InvalidQuantity);
    }
    if region::is_placeholder(&request.region) {
        return Err(ConversionError::RegionRequired);
    }

    let from_factor = resolve_factor(&request.region, &request.from)
        .filter(|f| *f > 0.0)
        .ok_or(ConversionError::UnitUnavailable)?;
    let to_factor = resolve_factor(&request.region, &request.to)
        .filter(|f| *f > 0.0)
        .ok_or(ConversionError::UnitUnavailable)?;

    // Same factor cancels; skip the trip through the base unit so
    // self-conversion is exact.
    if from_factor == to_factor {
        return Ok(request.quantity);
    }

    let sqft_total = request.quantity * from_factor;
    Ok(sqft_total / to_factor)
}

/// Parse a quantity from form text. Rejects non-finite values.
pub fn parse_quantity(text: &str) -> Result<f64, ConversionError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConversionError::InvalidQuantity)?;
    if !value.is_finite() {
        return Err(ConversionError::InvalidQuantity);
    }
    Ok(value)
}

/// Convert straight from form inputs (quantity as text).
pub fn convert_text(
    quantity: &str,
    from: &str,
    to: &str,
    region: &str,
) -> Result<f64, ConversionError> {
    let quantity = parse_quantity(quantity)?;
    convert(&ConversionRequest::new(quantity, from, to, region))
}
