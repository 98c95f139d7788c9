// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lot_desk_domain::{AddendumFlags, FuelType, SaleStatus, TransitionPayload, Transmission};

/// A partial update to the descriptive attributes.
///
/// `None` leaves the current value untouched. For the optional free-text
/// fields (trim, engine size) an empty string clears the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeChanges {
    /// Vehicle identification number.
    pub vin: Option<String>,
    /// Dealer stock number.
    pub stock_number: Option<String>,
    /// Lot or store location.
    pub location: Option<String>,
    /// Model year.
    pub year: Option<String>,
    /// Manufacturer.
    pub make: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Trim level. Empty string clears.
    pub trim: Option<String>,
    /// Exterior color.
    pub exterior_color: Option<String>,
    /// Odometer reading in miles.
    pub mileage: Option<u32>,
    /// Asking price.
    pub total_price: Option<f64>,
    /// Transmission type.
    pub transmission: Option<Transmission>,
    /// Fuel type.
    pub fuel_type: Option<FuelType>,
    /// Engine size free text. Empty string clears.
    pub engine_size: Option<String>,
    /// Free-text listing description.
    pub description: Option<String>,
}

/// A requested addendum rebuild.
///
/// Carries the per-category flags plus the lift pricing detail; the
/// aggregator synthesizes the line items and total from these.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddendumUpdate {
    /// The per-category booleans from the form.
    pub flags: AddendumFlags,
    /// Lift description, used when the lift flag is set.
    pub lift_description: Option<String>,
    /// Lift price, used when the lift flag is set.
    pub lift_price: Option<f64>,
}

/// A requested sale-status change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// The status being transitioned to.
    pub target: SaleStatus,
    /// The detail payload accompanying the request.
    pub payload: TransitionPayload,
}

/// A change-set represents caller intent as data only.
///
/// Change-sets are the only way to request record changes; each section
/// is optional and the assembler applies the present ones in a fixed
/// order, recomputing every derived field afterward.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeSet {
    /// Descriptive-attribute edits.
    pub attributes: Option<AttributeChanges>,
    /// Addendum rebuild request.
    pub addendum: Option<AddendumUpdate>,
    /// Sale-status transition request.
    pub status: Option<StatusChange>,
}

impl ChangeSet {
    /// A change-set touching only the descriptive attributes.
    #[must_use]
    pub fn attributes(changes: AttributeChanges) -> Self {
        Self {
            attributes: Some(changes),
            ..Self::default()
        }
    }

    /// A change-set touching only the addendum.
    #[must_use]
    pub fn addendum(update: AddendumUpdate) -> Self {
        Self {
            addendum: Some(update),
            ..Self::default()
        }
    }

    /// A change-set requesting only a status transition.
    #[must_use]
    pub fn status(target: SaleStatus, payload: TransitionPayload) -> Self {
        Self {
            status: Some(StatusChange { target, payload }),
            ..Self::default()
        }
    }
}
