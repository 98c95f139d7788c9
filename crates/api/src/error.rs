// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use lot_desk::CoreError;
use lot_desk_domain::DomainError;
use lot_desk_persistence::PersistenceError;

/// A single violated rule, structured for precise user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldViolation {
    /// The offending field.
    pub field: String,
    /// The violated rule, as a stable slug.
    pub rule: String,
    /// A human-readable description of the violation.
    pub message: String,
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Store failures pass through unmasked; the API never retries
/// and never drops a failed mutation silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested mutation violates documented rules.
    ///
    /// Every failing check is listed; nothing was committed.
    ValidationFailed {
        /// The violations, one entry per failed check.
        violations: Vec<FieldViolation>,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { violations } => {
                write!(f, "Validation failed ({} violations): ", violations.len())?;
                let mut first: bool = true;
                for violation in violations {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{} ({}): {}", violation.field, violation.rule, violation.message)?;
                    first = false;
                }
                Ok(())
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into a structured field violation.
///
/// This translation is explicit so every violation names the field and
/// rule it came from; domain errors are never leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> FieldViolation {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidVin { .. } => FieldViolation {
            field: String::from("vin"),
            rule: String::from("vin_length"),
            message,
        },
        DomainError::InvalidPrice { field, .. } => FieldViolation {
            field: (*field).to_string(),
            rule: String::from("non_negative_price"),
            message,
        },
        DomainError::MissingTransitionPayload { .. } => FieldViolation {
            field: String::from("details"),
            rule: String::from("status_details_required"),
            message,
        },
        DomainError::UnexpectedTransitionPayload { payload, .. } => FieldViolation {
            field: (*payload).to_string(),
            rule: String::from("status_details_mismatch"),
            message,
        },
        DomainError::MissingStatusDetail { field, .. } => FieldViolation {
            field: (*field).to_string(),
            rule: String::from("status_detail_required"),
            message,
        },
        DomainError::InvalidDepositAmount { .. } => FieldViolation {
            field: String::from("deposit_amount"),
            rule: String::from("positive_deposit"),
            message,
        },
        DomainError::AddendumFlagMismatch { category, .. } => FieldViolation {
            field: format!("has_{category}"),
            rule: String::from("addendum_flag_consistency"),
            message,
        },
        DomainError::UnknownStatus(_) => FieldViolation {
            field: String::from("status"),
            rule: String::from("known_status"),
            message,
        },
        DomainError::UnknownTransmission(_) => FieldViolation {
            field: String::from("transmission"),
            rule: String::from("known_transmission"),
            message,
        },
        DomainError::UnknownFuelType(_) => FieldViolation {
            field: String::from("fuel_type"),
            rule: String::from("known_fuel_type"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Validation(errors) => ApiError::ValidationFailed {
            violations: errors.iter().map(translate_domain_error).collect(),
        },
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

/// Translates a persistence error into an API error.
///
/// Store failures are passed through with their own message; the API
/// does not mask or reinterpret them.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(vehicle_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: format!("Vehicle {vehicle_id} does not exist"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
