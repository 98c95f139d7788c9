// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::vehicle::VehicleAttributes;

/// Validates that a VIN has the required length.
///
/// # Errors
///
/// Returns `DomainError::InvalidVin` if the VIN is not exactly 17
/// characters.
pub fn validate_vin(vin: &str) -> Result<(), DomainError> {
    // Rule: a VIN is exactly 17 characters
    let length: usize = vin.chars().count();
    if length != 17 {
        return Err(DomainError::InvalidVin { length });
    }
    Ok(())
}

/// Validates that a price field carries a non-negative number.
///
/// # Arguments
///
/// * `field` - The field name, reported on failure
/// * `value` - The price to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the value is negative or NaN.
pub fn validate_price(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_nan() || value < 0.0 {
        return Err(DomainError::InvalidPrice { field, value });
    }
    Ok(())
}

/// Validates a vehicle's descriptive attribute constraints.
///
/// This checks the documented field rules only; status and addendum
/// invariants are validated by their own components. All violations are
/// collected rather than stopping at the first.
///
/// # Errors
///
/// Returns every failing check:
/// - VIN must be exactly 17 characters
/// - Total price must be non-negative
pub fn validate_attributes(attributes: &VehicleAttributes) -> Result<(), Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    if let Err(e) = validate_vin(&attributes.vin) {
        errors.push(e);
    }
    if let Err(e) = validate_price("total_price", attributes.total_price) {
        errors.push(e);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
