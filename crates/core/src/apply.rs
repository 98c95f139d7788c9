// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{AddendumUpdate, AttributeChanges, ChangeSet};
use crate::error::CoreError;
use lot_desk_audit::{Actor, AuditStamp, Clock, Metadata};
use lot_desk_domain::{
    Additions, DomainError, SaleStatus, SearchIndex, StatusData, Vehicle, VehicleAttributes,
    validate_attributes, validate_price,
};

/// Assembles a brand-new vehicle record.
///
/// New vehicles start Available with an empty addendum unless one is
/// supplied with the create request. Every derived field (status
/// envelope, addendum totals, search index, metadata) is computed here;
/// callers never supply them directly.
///
/// # Arguments
///
/// * `attributes` - The descriptive attributes from the inventory form
/// * `addendum` - Optional addendum section of the create form
/// * `actor` - The actor creating the record
/// * `clock` - The timestamp source
///
/// # Returns
///
/// * `Ok(Vehicle)` - A fully consistent record, not yet persisted
/// * `Err(CoreError::Validation)` - Every failing attribute or addendum check
///
/// # Errors
///
/// Returns an error if any attribute or addendum rule is violated. No
/// partial record is produced on failure.
pub fn create(
    attributes: VehicleAttributes,
    addendum: Option<AddendumUpdate>,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<Vehicle, CoreError> {
    let mut errors: Vec<DomainError> = Vec::new();

    if let Err(violations) = validate_attributes(&attributes) {
        errors.extend(violations);
    }

    let additions: Additions = addendum
        .as_ref()
        .map_or_else(Additions::empty, |update| {
            rebuild_additions(update, &mut errors)
        });

    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }

    let now: String = clock.now();
    let stamp: AuditStamp = AuditStamp::new(now.clone(), actor.clone());
    let search_index: SearchIndex = SearchIndex::build(
        &attributes.year,
        &attributes.make,
        &attributes.model,
        attributes.total_price,
    );

    Ok(Vehicle {
        vehicle_id: None,
        attributes,
        status: SaleStatus::Available,
        status_data: StatusData::initial(now, actor.clone()),
        additions,
        search_index,
        metadata: Metadata::new(stamp),
    })
}

/// Applies a change-set to an existing vehicle, producing a new record.
///
/// Steps run in a fixed order: descriptive-attribute changes, then the
/// addendum aggregator if the addendum section is present, then the
/// status transition if one was requested, then the search projection
/// unconditionally, then the metadata refresh. The input vehicle is
/// never mutated; on failure the caller keeps the prior record.
///
/// # Arguments
///
/// * `vehicle` - The current record (immutable)
/// * `changes` - The partial change-set to apply
/// * `actor` - The actor performing the mutation
/// * `clock` - The timestamp source
///
/// # Returns
///
/// * `Ok(Vehicle)` - The fully consistent successor record
/// * `Err(CoreError::Validation)` - Every failing sub-check, aggregated
///
/// # Errors
///
/// Returns an error if any step's rules are violated; checks from all
/// steps are collected, not just the first failure.
pub fn apply(
    vehicle: &Vehicle,
    changes: ChangeSet,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<Vehicle, CoreError> {
    let mut errors: Vec<DomainError> = Vec::new();
    let now: String = clock.now();

    // Step 1: descriptive attributes
    let attributes: VehicleAttributes = changes.attributes.map_or_else(
        || vehicle.attributes.clone(),
        |edit| merge_attributes(&vehicle.attributes, edit),
    );
    if let Err(violations) = validate_attributes(&attributes) {
        errors.extend(violations);
    }

    // Step 2: addendum aggregation, only when that section changed
    let additions: Additions = changes.addendum.as_ref().map_or_else(
        || vehicle.additions.clone(),
        |update| rebuild_additions(update, &mut errors),
    );

    // Step 3: status transition, only when one was requested
    let (status, status_data) = match changes.status {
        Some(change) => {
            match StatusData::transition(change.target, change.payload, actor, now.clone()) {
                Ok(envelope) => (change.target, envelope),
                Err(violations) => {
                    errors.extend(violations);
                    (vehicle.status, vehicle.status_data.clone())
                }
            }
        }
        None => (vehicle.status, vehicle.status_data.clone()),
    };

    if !errors.is_empty() {
        return Err(CoreError::Validation(errors));
    }

    // Step 4: search projection, unconditionally
    let search_index: SearchIndex = SearchIndex::build(
        &attributes.year,
        &attributes.make,
        &attributes.model,
        attributes.total_price,
    );

    // Step 5: metadata refresh
    let metadata: Metadata = vehicle
        .metadata
        .refreshed(AuditStamp::new(now, actor.clone()));

    Ok(Vehicle {
        vehicle_id: vehicle.vehicle_id,
        attributes,
        status,
        status_data,
        additions,
        search_index,
        metadata,
    })
}

/// Merges a partial attribute edit onto the current attributes.
///
/// For the optional free-text fields an empty string clears the value,
/// matching how the inventory form submits them.
fn merge_attributes(current: &VehicleAttributes, edit: AttributeChanges) -> VehicleAttributes {
    let mut merged: VehicleAttributes = current.clone();

    if let Some(vin) = edit.vin {
        merged.vin = vin;
    }
    if let Some(stock_number) = edit.stock_number {
        merged.stock_number = stock_number;
    }
    if let Some(location) = edit.location {
        merged.location = location;
    }
    if let Some(year) = edit.year {
        merged.year = year;
    }
    if let Some(make) = edit.make {
        merged.make = make;
    }
    if let Some(model) = edit.model {
        merged.model = model;
    }
    if let Some(trim) = edit.trim {
        merged.trim = if trim.is_empty() { None } else { Some(trim) };
    }
    if let Some(exterior_color) = edit.exterior_color {
        merged.exterior_color = exterior_color;
    }
    if let Some(mileage) = edit.mileage {
        merged.mileage = mileage;
    }
    if let Some(total_price) = edit.total_price {
        merged.total_price = total_price;
    }
    if let Some(transmission) = edit.transmission {
        merged.transmission = transmission;
    }
    if let Some(fuel_type) = edit.fuel_type {
        merged.fuel_type = fuel_type;
    }
    if let Some(engine_size) = edit.engine_size {
        merged.engine_size = if engine_size.is_empty() {
            None
        } else {
            Some(engine_size)
        };
    }
    if let Some(description) = edit.description {
        merged.description = description;
    }

    merged
}

/// Runs the addendum aggregator for a requested update.
///
/// A negative or NaN lift price is recorded as a violation; aggregation
/// still runs so later steps can report their own violations alongside.
fn rebuild_additions(update: &AddendumUpdate, errors: &mut Vec<DomainError>) -> Additions {
    if let Some(lift_price) = update.lift_price {
        if let Err(e) = validate_price("lift_price", lift_price) {
            errors.push(e);
        }
    }

    Additions::aggregate(
        &update.flags,
        update.lift_description.as_deref(),
        update.lift_price,
    )
}
