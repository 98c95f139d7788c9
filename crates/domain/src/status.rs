// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sale status tracking and transition logic.
//!
//! This module defines the vehicle sale states, the structured detail
//! payload each transition requires, and the audit stamp recorded on
//! every status change. Transitions are actor-initiated only; the system
//! never advances status based on time alone.

use crate::error::DomainError;
use lot_desk_audit::Actor;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sale status states for a vehicle listing.
///
/// This is the single internal representation. The UI-facing form
/// (`AVAILABLE`) and the persisted record form (`Available`) are both
/// pure projections of this value, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    /// On the lot and for sale.
    Available,
    /// A deposit has been taken; the vehicle is held.
    Deposit,
    /// Sold and awaiting delivery or paperwork.
    Sold,
    /// Held back from the lot pending reconditioning.
    PendingRecon,
}

impl SaleStatus {
    /// Returns the UI-facing string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Deposit => "DEPOSIT",
            Self::Sold => "SOLD",
            Self::PendingRecon => "PENDING_RECON",
        }
    }

    /// Returns the persistence-facing status label.
    ///
    /// This is the fixed mapping table applied at the persistence
    /// boundary; it is total over the enum, so an unmapped status is
    /// unrepresentable.
    #[must_use]
    pub const fn record_label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Deposit => "Deposit",
            Self::Sold => "Sold",
            Self::PendingRecon => "Pending Recon",
        }
    }

    /// Parses a status from its UI-facing string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "DEPOSIT" => Ok(Self::Deposit),
            "SOLD" => Ok(Self::Sold),
            "PENDING_RECON" => Ok(Self::PendingRecon),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }

    /// Parses a status from its persistence-facing label.
    ///
    /// Used when loading records; a label that fails to parse indicates
    /// a corrupt record, not user input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the label is not recognized.
    pub fn from_record_label(s: &str) -> Result<Self, DomainError> {
        match s {
            "Available" => Ok(Self::Available),
            "Deposit" => Ok(Self::Deposit),
            "Sold" => Ok(Self::Sold),
            "Pending Recon" => Ok(Self::PendingRecon),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl FromStr for SaleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detail payload required when taking a deposit on a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositDetails {
    /// The store location where the deposit was taken.
    pub location_sold: String,
    /// The desk manager who worked the deal.
    pub desk_manager: String,
    /// The dealership deal number.
    pub deal_number: String,
    /// The deposit amount. Must be greater than zero.
    pub deposit_amount: f64,
}

impl DepositDetails {
    /// Validates that all required fields are present and the amount is positive.
    ///
    /// All violations are collected rather than stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns every failing field check.
    pub fn validate(&self) -> Result<(), Vec<DomainError>> {
        let mut errors: Vec<DomainError> = Vec::new();
        let status: SaleStatus = SaleStatus::Deposit;

        if self.location_sold.trim().is_empty() {
            errors.push(DomainError::MissingStatusDetail {
                status,
                field: "location_sold",
            });
        }
        if self.desk_manager.trim().is_empty() {
            errors.push(DomainError::MissingStatusDetail {
                status,
                field: "desk_manager",
            });
        }
        if self.deal_number.trim().is_empty() {
            errors.push(DomainError::MissingStatusDetail {
                status,
                field: "deal_number",
            });
        }
        if self.deposit_amount.is_nan() || self.deposit_amount <= 0.0 {
            errors.push(DomainError::InvalidDepositAmount {
                amount: self.deposit_amount,
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Detail payload required when marking a vehicle sold.
///
/// Whether the salesperson is drawn from a known roster is a UI concern
/// and is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldDetails {
    /// The store location where the sale closed.
    pub location_sold: String,
    /// The desk manager who worked the deal.
    pub desk_manager: String,
    /// The sales manager who approved the deal.
    pub sales_manager: String,
    /// The salesperson credited with the sale.
    pub salesperson: String,
    /// The dealership deal number.
    pub deal_number: String,
    /// The date of sale as entered on the deal.
    pub sale_date: String,
}

impl SoldDetails {
    /// Validates that all six required fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns every failing field check.
    pub fn validate(&self) -> Result<(), Vec<DomainError>> {
        let status: SaleStatus = SaleStatus::Sold;
        let fields: [(&'static str, &str); 6] = [
            ("location_sold", &self.location_sold),
            ("desk_manager", &self.desk_manager),
            ("sales_manager", &self.sales_manager),
            ("salesperson", &self.salesperson),
            ("deal_number", &self.deal_number),
            ("sale_date", &self.sale_date),
        ];

        let errors: Vec<DomainError> = fields
            .iter()
            .filter(|&&(_, value)| value.trim().is_empty())
            .map(|&(field, _)| DomainError::MissingStatusDetail { status, field })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The structured payload accompanying a transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionPayload {
    /// No payload. Required form for Available and Pending Recon targets.
    None,
    /// Deposit details. Required form for a Deposit target.
    Deposit(DepositDetails),
    /// Sold details. Required form for a Sold target.
    Sold(SoldDetails),
}

/// The status envelope carried on every vehicle record.
///
/// Holds the audit stamp of the last status change and at most one of
/// the two detail payloads, matching the current status. The status
/// value itself lives on the vehicle; this envelope never duplicates it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusData {
    /// When the status last changed, as an ISO-8601 string.
    pub updated_at: String,
    /// Who made the last status change.
    pub updated_by: Actor,
    /// Present iff the current status is Deposit.
    pub deposit_details: Option<DepositDetails>,
    /// Present iff the current status is Sold.
    pub sold_details: Option<SoldDetails>,
}

impl StatusData {
    /// Creates the status envelope for a freshly created vehicle.
    ///
    /// New vehicles start Available, so neither detail payload is present.
    #[must_use]
    pub const fn initial(updated_at: String, updated_by: Actor) -> Self {
        Self {
            updated_at,
            updated_by,
            deposit_details: None,
            sold_details: None,
        }
    }

    /// Applies a status transition, producing a fresh envelope.
    ///
    /// A transition to the current status is a valid no-op re-stamp: the
    /// audit fields are refreshed and the payload rules apply exactly as
    /// for any other transition. Any payload belonging to a different
    /// status is cleared by construction, since the envelope is rebuilt
    /// from scratch.
    ///
    /// # Arguments
    ///
    /// * `target` - The status being transitioned to
    /// * `payload` - The detail payload accompanying the request
    /// * `actor` - The actor making the change
    /// * `now` - The transition timestamp
    ///
    /// # Errors
    ///
    /// Returns all payload violations for the target status:
    /// - Deposit requires a complete `DepositDetails` with a positive amount
    /// - Sold requires a complete `SoldDetails`
    /// - Available and Pending Recon accept no payload
    pub fn transition(
        target: SaleStatus,
        payload: TransitionPayload,
        actor: &Actor,
        now: String,
    ) -> Result<Self, Vec<DomainError>> {
        let mut envelope: Self = Self {
            updated_at: now,
            updated_by: actor.clone(),
            deposit_details: None,
            sold_details: None,
        };

        match (target, payload) {
            (SaleStatus::Deposit, TransitionPayload::Deposit(details)) => {
                details.validate()?;
                envelope.deposit_details = Some(details);
                Ok(envelope)
            }
            (SaleStatus::Deposit, TransitionPayload::None) => {
                Err(vec![DomainError::MissingTransitionPayload {
                    status: SaleStatus::Deposit,
                }])
            }
            (SaleStatus::Deposit, TransitionPayload::Sold(_)) => {
                Err(vec![DomainError::UnexpectedTransitionPayload {
                    status: SaleStatus::Deposit,
                    payload: "sold_details",
                }])
            }
            (SaleStatus::Sold, TransitionPayload::Sold(details)) => {
                details.validate()?;
                envelope.sold_details = Some(details);
                Ok(envelope)
            }
            (SaleStatus::Sold, TransitionPayload::None) => {
                Err(vec![DomainError::MissingTransitionPayload {
                    status: SaleStatus::Sold,
                }])
            }
            (SaleStatus::Sold, TransitionPayload::Deposit(_)) => {
                Err(vec![DomainError::UnexpectedTransitionPayload {
                    status: SaleStatus::Sold,
                    payload: "deposit_details",
                }])
            }
            // Available and Pending Recon take no payload; one supplied by
            // a stale form is dropped along with any prior details.
            (SaleStatus::Available | SaleStatus::PendingRecon, _) => Ok(envelope),
        }
    }
}
