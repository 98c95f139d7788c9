// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the portal's vehicle operations.
//!
//! Handlers translate DTOs into change-sets, run the assembly core, and
//! persist the resulting record through the gateway. Actor identity is
//! supplied verbatim by the caller; access control is handled upstream.

use lot_desk::{AddendumUpdate, AttributeChanges, ChangeSet, apply, create};
use lot_desk_audit::{Actor, Clock};
use lot_desk_domain::{
    AddendumFlags, DepositDetails, FuelType, SaleStatus, SoldDetails, TransitionPayload,
    Transmission, Vehicle, VehicleAttributes,
};
use lot_desk_persistence::{VehicleGateway, VehicleRecord};
use tracing::info;

use crate::error::{
    ApiError, FieldViolation, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
use crate::request_response::{
    AddendumSection, CreateVehicleRequest, CreateVehicleResponse, DeleteVehicleResponse,
    DepositDetailsDto, ListVehiclesResponse, SoldDetailsDto, UpdateAddendumRequest,
    UpdateAttributesRequest, UpdateStatusRequest, UpdateVehicleResponse, VehicleInfo,
};

/// Builds the flattened view projection from a persisted vehicle.
fn vehicle_info(vehicle: &Vehicle, vehicle_id: i64) -> VehicleInfo {
    let flags = vehicle.additions.flags();

    VehicleInfo {
        vehicle_id,
        vin: vehicle.attributes.vin.clone(),
        stock_number: vehicle.attributes.stock_number.clone(),
        location: vehicle.attributes.location.clone(),
        year: vehicle.attributes.year.clone(),
        make: vehicle.attributes.make.clone(),
        model: vehicle.attributes.model.clone(),
        trim: vehicle.attributes.trim.clone(),
        exterior_color: vehicle.attributes.exterior_color.clone(),
        mileage: vehicle.attributes.mileage,
        total_price: vehicle.attributes.total_price,
        transmission: vehicle.attributes.transmission.as_str().to_string(),
        fuel_type: vehicle.attributes.fuel_type.as_str().to_string(),
        engine_size: vehicle.attributes.engine_size.clone(),
        description: vehicle.attributes.description.clone(),
        status: vehicle.status.as_str().to_string(),
        status_updated_at: vehicle.status_data.updated_at.clone(),
        status_updated_by: vehicle.status_data.updated_by.display_name.clone(),
        deposit_details: vehicle
            .status_data
            .deposit_details
            .as_ref()
            .map(|d| DepositDetailsDto {
                location_sold: d.location_sold.clone(),
                desk_manager: d.desk_manager.clone(),
                deal_number: d.deal_number.clone(),
                deposit_amount: d.deposit_amount,
            }),
        sold_details: vehicle
            .status_data
            .sold_details
            .as_ref()
            .map(|d| SoldDetailsDto {
                location_sold: d.location_sold.clone(),
                desk_manager: d.desk_manager.clone(),
                sales_manager: d.sales_manager.clone(),
                salesperson: d.salesperson.clone(),
                deal_number: d.deal_number.clone(),
                sale_date: d.sale_date.clone(),
            }),
        has_addendum: flags.has_addendum,
        has_lift: flags.has_lift,
        has_wheels: flags.has_wheels,
        has_tires: flags.has_tires,
        has_paint_match: flags.has_paint_match,
        has_leather: flags.has_leather,
        has_other: flags.has_other,
        lift_description: vehicle
            .additions
            .lift
            .as_ref()
            .map(|item| item.description.clone()),
        lift_price: vehicle.additions.lift.as_ref().map(|item| item.price),
        addendum_total: vehicle.additions.total_price,
        make_model: vehicle.search_index.make_model.clone(),
        year_make_model: vehicle.search_index.year_make_model.clone(),
        price_range: vehicle.search_index.price_range.clone(),
        date_added: vehicle.metadata.created.at.clone(),
        last_updated_at: vehicle.metadata.last_updated.at.clone(),
        last_updated_by: vehicle.metadata.last_updated.by.display_name.clone(),
    }
}

/// Translates the shared addendum section into a core update.
fn addendum_update(section: AddendumSection) -> AddendumUpdate {
    AddendumUpdate {
        flags: AddendumFlags {
            has_addendum: section.has_addendum,
            has_lift: section.has_lift,
            has_wheels: section.has_wheels,
            has_tires: section.has_tires,
            has_paint_match: section.has_paint_match,
            has_leather: section.has_leather,
            has_other: section.has_other,
        },
        lift_description: section.lift_description,
        lift_price: section.lift_price,
    }
}

/// Loads a vehicle from the gateway, rebuilding the domain aggregate.
fn load_vehicle(gateway: &dyn VehicleGateway, vehicle_id: i64) -> Result<Vehicle, ApiError> {
    let record: VehicleRecord = gateway
        .get(vehicle_id)
        .map_err(|e| translate_persistence_error(&e))?;
    record
        .into_vehicle()
        .map_err(|e| translate_persistence_error(&e))
}

/// Writes an updated vehicle back through the gateway.
fn store_update(
    gateway: &mut dyn VehicleGateway,
    vehicle_id: i64,
    vehicle: &Vehicle,
) -> Result<(), ApiError> {
    gateway
        .update(vehicle_id, VehicleRecord::from_vehicle(vehicle))
        .map_err(|e| translate_persistence_error(&e))
}

/// Adds a vehicle to inventory.
///
/// The record starts Available; every derived field is computed by the
/// assembly core before the record reaches the store.
///
/// # Arguments
///
/// * `gateway` - The persistence gateway
/// * `request` - The create request from the inventory form
/// * `actor` - The actor creating the record
/// * `clock` - The timestamp source
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if any field or addendum rule is
/// violated, or an internal error if the store rejects the write.
pub fn create_vehicle(
    gateway: &mut dyn VehicleGateway,
    request: CreateVehicleRequest,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<CreateVehicleResponse, ApiError> {
    // Parse enumerated fields at the boundary, collecting both failures
    let mut violations: Vec<FieldViolation> = Vec::new();
    let transmission: Option<Transmission> = match request.transmission.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            violations.push(translate_domain_error(&e));
            None
        }
    };
    let fuel_type: Option<FuelType> = match request.fuel_type.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            violations.push(translate_domain_error(&e));
            None
        }
    };
    let (Some(transmission), Some(fuel_type)) = (transmission, fuel_type) else {
        return Err(ApiError::ValidationFailed { violations });
    };

    let attributes: VehicleAttributes = VehicleAttributes {
        vin: request.vin,
        stock_number: request.stock_number,
        location: request.location,
        year: request.year,
        make: request.make,
        model: request.model,
        trim: request.trim,
        exterior_color: request.exterior_color,
        mileage: request.mileage,
        total_price: request.total_price,
        transmission,
        fuel_type,
        engine_size: request.engine_size,
        description: request.description,
    };
    let addendum: Option<AddendumUpdate> = request.addendum.map(addendum_update);

    let mut vehicle: Vehicle =
        create(attributes, addendum, actor, clock).map_err(translate_core_error)?;

    let vehicle_id: i64 = gateway
        .create(VehicleRecord::from_vehicle(&vehicle))
        .map_err(|e| translate_persistence_error(&e))?;
    vehicle.vehicle_id = Some(vehicle_id);

    info!(
        vehicle_id,
        vin = %vehicle.attributes.vin,
        actor_id = %actor.id,
        "Created vehicle"
    );

    Ok(CreateVehicleResponse {
        vehicle_id,
        vehicle: vehicle_info(&vehicle, vehicle_id),
        message: format!("Added vehicle {vehicle_id} to inventory"),
    })
}

/// Edits a vehicle's descriptive attributes.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the vehicle does not exist,
/// or `ApiError::ValidationFailed` if the edit violates attribute rules.
pub fn update_vehicle_attributes(
    gateway: &mut dyn VehicleGateway,
    vehicle_id: i64,
    request: UpdateAttributesRequest,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<UpdateVehicleResponse, ApiError> {
    let current: Vehicle = load_vehicle(gateway, vehicle_id)?;

    let mut violations: Vec<FieldViolation> = Vec::new();
    let transmission: Option<Transmission> = match request.transmission {
        Some(value) => match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                violations.push(translate_domain_error(&e));
                None
            }
        },
        None => None,
    };
    let fuel_type: Option<FuelType> = match request.fuel_type {
        Some(value) => match value.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                violations.push(translate_domain_error(&e));
                None
            }
        },
        None => None,
    };
    if !violations.is_empty() {
        return Err(ApiError::ValidationFailed { violations });
    }

    let changes: ChangeSet = ChangeSet::attributes(AttributeChanges {
        vin: request.vin,
        stock_number: request.stock_number,
        location: request.location,
        year: request.year,
        make: request.make,
        model: request.model,
        trim: request.trim,
        exterior_color: request.exterior_color,
        mileage: request.mileage,
        total_price: request.total_price,
        transmission,
        fuel_type,
        engine_size: request.engine_size,
        description: request.description,
    });

    let updated: Vehicle = apply(&current, changes, actor, clock).map_err(translate_core_error)?;
    store_update(gateway, vehicle_id, &updated)?;

    info!(vehicle_id, actor_id = %actor.id, "Updated vehicle attributes");

    Ok(UpdateVehicleResponse {
        vehicle: vehicle_info(&updated, vehicle_id),
        message: format!("Updated vehicle {vehicle_id}"),
    })
}

/// Changes a vehicle's sale status.
///
/// A transition to the current status is accepted as a re-stamp of the
/// audit fields.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the target status is unknown,
/// the detail payload is incomplete, or both payload kinds are supplied;
/// `ApiError::ResourceNotFound` if the vehicle does not exist.
pub fn update_vehicle_status(
    gateway: &mut dyn VehicleGateway,
    vehicle_id: i64,
    request: UpdateStatusRequest,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<UpdateVehicleResponse, ApiError> {
    let current: Vehicle = load_vehicle(gateway, vehicle_id)?;

    let target: SaleStatus = request.status.parse().map_err(|e| {
        ApiError::ValidationFailed {
            violations: vec![translate_domain_error(&e)],
        }
    })?;

    let payload: TransitionPayload = match (request.deposit_details, request.sold_details) {
        (Some(_), Some(_)) => {
            return Err(ApiError::ValidationFailed {
                violations: vec![FieldViolation {
                    field: String::from("details"),
                    rule: String::from("mutually_exclusive_details"),
                    message: String::from(
                        "Supply deposit details or sold details, never both",
                    ),
                }],
            });
        }
        (Some(details), None) => TransitionPayload::Deposit(DepositDetails {
            location_sold: details.location_sold,
            desk_manager: details.desk_manager,
            deal_number: details.deal_number,
            deposit_amount: details.deposit_amount,
        }),
        (None, Some(details)) => TransitionPayload::Sold(SoldDetails {
            location_sold: details.location_sold,
            desk_manager: details.desk_manager,
            sales_manager: details.sales_manager,
            salesperson: details.salesperson,
            deal_number: details.deal_number,
            sale_date: details.sale_date,
        }),
        (None, None) => TransitionPayload::None,
    };

    let updated: Vehicle = apply(
        &current,
        ChangeSet::status(target, payload),
        actor,
        clock,
    )
    .map_err(translate_core_error)?;
    store_update(gateway, vehicle_id, &updated)?;

    info!(
        vehicle_id,
        status = %target,
        actor_id = %actor.id,
        "Changed vehicle status"
    );

    Ok(UpdateVehicleResponse {
        vehicle: vehicle_info(&updated, vehicle_id),
        message: format!("Vehicle {vehicle_id} is now {target}"),
    })
}

/// Rebuilds a vehicle's addendum from the form's category flags.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the vehicle does not exist,
/// or `ApiError::ValidationFailed` for a negative lift price.
pub fn update_vehicle_addendum(
    gateway: &mut dyn VehicleGateway,
    vehicle_id: i64,
    request: UpdateAddendumRequest,
    actor: &Actor,
    clock: &dyn Clock,
) -> Result<UpdateVehicleResponse, ApiError> {
    let current: Vehicle = load_vehicle(gateway, vehicle_id)?;

    let changes: ChangeSet = ChangeSet::addendum(addendum_update(request));
    let updated: Vehicle = apply(&current, changes, actor, clock).map_err(translate_core_error)?;
    store_update(gateway, vehicle_id, &updated)?;

    info!(vehicle_id, actor_id = %actor.id, "Updated vehicle addendum");

    Ok(UpdateVehicleResponse {
        vehicle: vehicle_info(&updated, vehicle_id),
        message: format!("Updated addendum for vehicle {vehicle_id}"),
    })
}

/// Removes a vehicle from inventory.
///
/// The delete is forwarded verbatim to the gateway; there is no
/// cascading logic.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the vehicle does not exist.
pub fn delete_vehicle(
    gateway: &mut dyn VehicleGateway,
    vehicle_id: i64,
    actor: &Actor,
) -> Result<DeleteVehicleResponse, ApiError> {
    gateway
        .delete(vehicle_id)
        .map_err(|e| translate_persistence_error(&e))?;

    info!(vehicle_id, actor_id = %actor.id, "Deleted vehicle");

    Ok(DeleteVehicleResponse {
        vehicle_id,
        message: format!("Removed vehicle {vehicle_id} from inventory"),
    })
}

/// Fetches a single vehicle.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the vehicle does not exist.
pub fn get_vehicle(
    gateway: &dyn VehicleGateway,
    vehicle_id: i64,
) -> Result<VehicleInfo, ApiError> {
    let vehicle: Vehicle = load_vehicle(gateway, vehicle_id)?;
    Ok(vehicle_info(&vehicle, vehicle_id))
}

/// Lists the whole inventory, ordered by date added.
///
/// # Errors
///
/// Returns an internal error if the store cannot be read or a stored
/// record is corrupt; a bad record is surfaced, never skipped.
pub fn list_vehicles(gateway: &dyn VehicleGateway) -> Result<ListVehiclesResponse, ApiError> {
    let records: Vec<VehicleRecord> = gateway
        .list_all()
        .map_err(|e| translate_persistence_error(&e))?;

    let mut vehicles: Vec<VehicleInfo> = Vec::with_capacity(records.len());
    for record in records {
        let vehicle_id: i64 = record.vehicle_id.unwrap_or_default();
        let vehicle: Vehicle = record
            .into_vehicle()
            .map_err(|e| translate_persistence_error(&e))?;
        vehicles.push(vehicle_info(&vehicle, vehicle_id));
    }

    Ok(ListVehiclesResponse { vehicles })
}
