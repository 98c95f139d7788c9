// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::SaleStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// VIN is not exactly 17 characters.
    InvalidVin {
        /// The length that was supplied.
        length: usize,
    },
    /// A price field is negative or not a number.
    InvalidPrice {
        /// The field carrying the invalid price.
        field: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A status transition requires a detail payload that was not supplied.
    MissingTransitionPayload {
        /// The target status.
        status: SaleStatus,
    },
    /// A detail payload was supplied for a status that does not take it.
    UnexpectedTransitionPayload {
        /// The target status.
        status: SaleStatus,
        /// The payload kind that was supplied.
        payload: &'static str,
    },
    /// A required field in a transition detail payload is empty.
    MissingStatusDetail {
        /// The target status.
        status: SaleStatus,
        /// The empty field.
        field: &'static str,
    },
    /// Deposit amount must be greater than zero.
    InvalidDepositAmount {
        /// The invalid amount.
        amount: f64,
    },
    /// An addendum category flag disagrees with line-item presence.
    AddendumFlagMismatch {
        /// The addendum category.
        category: &'static str,
        /// The flag value that was supplied.
        flag: bool,
    },
    /// Status string is not a recognized sale status.
    UnknownStatus(String),
    /// Transmission string is not in the fixed enumeration.
    UnknownTransmission(String),
    /// Fuel type string is not in the fixed enumeration.
    UnknownFuelType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVin { length } => {
                write!(f, "VIN must be exactly 17 characters, got {length}")
            }
            Self::InvalidPrice { field, value } => {
                write!(f, "Field '{field}' must be a non-negative price, got {value}")
            }
            Self::MissingTransitionPayload { status } => {
                write!(
                    f,
                    "Transition to {} requires a detail payload",
                    status.as_str()
                )
            }
            Self::UnexpectedTransitionPayload { status, payload } => {
                write!(
                    f,
                    "Transition to {} does not accept a '{payload}' payload",
                    status.as_str()
                )
            }
            Self::MissingStatusDetail { status, field } => {
                write!(
                    f,
                    "Transition to {} requires a non-empty '{field}'",
                    status.as_str()
                )
            }
            Self::InvalidDepositAmount { amount } => {
                write!(f, "Deposit amount must be greater than zero, got {amount}")
            }
            Self::AddendumFlagMismatch { category, flag } => {
                if *flag {
                    write!(
                        f,
                        "Addendum flag for '{category}' is set but no line item is present"
                    )
                } else {
                    write!(
                        f,
                        "Addendum line item for '{category}' is present but its flag is not set"
                    )
                }
            }
            Self::UnknownStatus(value) => write!(f, "Unknown sale status: '{value}'"),
            Self::UnknownTransmission(value) => write!(f, "Unknown transmission: '{value}'"),
            Self::UnknownFuelType(value) => write!(f, "Unknown fuel type: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
