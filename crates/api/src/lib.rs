// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Lot Desk portal.
//!
//! Handlers here are transport-agnostic functions: the HTTP server calls
//! them with a gateway, an actor, and a clock, and they return DTOs or
//! structured API errors. Authentication and authorization live
//! upstream; the actor identity is recorded verbatim into audit fields.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, FieldViolation, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    create_vehicle, delete_vehicle, get_vehicle, list_vehicles, update_vehicle_addendum,
    update_vehicle_attributes, update_vehicle_status,
};
pub use request_response::{
    AddendumSection, CreateVehicleRequest, CreateVehicleResponse, DeleteVehicleResponse,
    DepositDetailsDto, ListVehiclesResponse, SoldDetailsDto, UpdateAddendumRequest,
    UpdateAttributesRequest, UpdateStatusRequest, UpdateVehicleResponse, VehicleInfo,
};
