// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The vehicle aggregate and its descriptive attribute types.

use crate::addendum::Additions;
use crate::error::DomainError;
use crate::search::SearchIndex;
use crate::status::{SaleStatus, StatusData};
use lot_desk_audit::Metadata;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Transmission types offered on the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
    #[serde(rename = "CVT")]
    Cvt,
}

impl Transmission {
    /// Returns the string representation used for persistence and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Manual => "Manual",
            Self::Cvt => "CVT",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Automatic" => Ok(Self::Automatic),
            "Manual" => Ok(Self::Manual),
            "CVT" => Ok(Self::Cvt),
            _ => Err(DomainError::UnknownTransmission(s.to_string())),
        }
    }
}

impl FromStr for Transmission {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fuel types offered on the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
    #[serde(rename = "Flex Fuel")]
    FlexFuel,
}

impl FuelType {
    /// Returns the string representation used for persistence and display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
            Self::FlexFuel => "Flex Fuel",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "Gasoline" => Ok(Self::Gasoline),
            "Diesel" => Ok(Self::Diesel),
            "Hybrid" => Ok(Self::Hybrid),
            "Electric" => Ok(Self::Electric),
            "Flex Fuel" => Ok(Self::FlexFuel),
            _ => Err(DomainError::UnknownFuelType(s.to_string())),
        }
    }
}

impl FromStr for FuelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The descriptive attributes entered on the inventory form.
///
/// These are caller-supplied facts about the vehicle. Everything derived
/// from them (search index, addendum totals, status stamps) lives
/// elsewhere on the aggregate and is recomputed by the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleAttributes {
    /// Vehicle identification number. Exactly 17 characters.
    pub vin: String,
    /// Dealer stock number. May be empty before assignment.
    pub stock_number: String,
    /// Lot or store location.
    pub location: String,
    /// Model year as entered, e.g. "2023".
    pub year: String,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Trim level, when known.
    pub trim: Option<String>,
    /// Exterior color.
    pub exterior_color: String,
    /// Odometer reading in miles.
    pub mileage: u32,
    /// Asking price. Never negative.
    pub total_price: f64,
    /// Transmission type.
    pub transmission: Transmission,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Engine size free text, when known.
    pub engine_size: Option<String>,
    /// Free-text listing description.
    pub description: String,
}

/// The vehicle aggregate root.
///
/// Derived fields (`status_data`, `additions`, `search_index`,
/// `metadata`) are kept consistent with the attributes by the record
/// assembler; callers never set them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Identity assigned by the persistence backend on first creation.
    /// `None` until the record has been persisted; immutable thereafter.
    pub vehicle_id: Option<i64>,
    /// Caller-supplied descriptive attributes.
    pub attributes: VehicleAttributes,
    /// The current sale status.
    pub status: SaleStatus,
    /// Audit stamp and detail payload for the current status.
    pub status_data: StatusData,
    /// Dealer-installed equipment.
    pub additions: Additions,
    /// Derived search projection.
    pub search_index: SearchIndex,
    /// Creation and last-update audit envelope.
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_transmission_round_trip() {
        for transmission in [Transmission::Automatic, Transmission::Manual, Transmission::Cvt] {
            let s = transmission.as_str();
            assert_eq!(s.parse::<Transmission>().unwrap(), transmission);
        }
    }

    #[test]
    fn test_fuel_type_round_trip() {
        for fuel_type in [
            FuelType::Gasoline,
            FuelType::Diesel,
            FuelType::Hybrid,
            FuelType::Electric,
            FuelType::FlexFuel,
        ] {
            let s = fuel_type.as_str();
            assert_eq!(s.parse::<FuelType>().unwrap(), fuel_type);
        }
    }

    #[test]
    fn test_unknown_transmission_is_rejected() {
        let result = "Tiptronic".parse::<Transmission>();
        assert_eq!(
            result.unwrap_err(),
            DomainError::UnknownTransmission(String::from("Tiptronic"))
        );
    }

    #[test]
    fn test_unknown_fuel_type_is_rejected() {
        assert!("Hydrogen".parse::<FuelType>().is_err());
    }
}
