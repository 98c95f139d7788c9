// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Enumerated fields travel as strings and are parsed at the
//! boundary.

/// Addendum section shared by the create and addendum-update requests.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct AddendumSection {
    /// Master switch: the vehicle has any addendum at all.
    pub has_addendum: bool,
    /// A lift kit is installed.
    #[serde(default)]
    pub has_lift: bool,
    /// Aftermarket wheels are installed.
    #[serde(default)]
    pub has_wheels: bool,
    /// Aftermarket tires are installed.
    #[serde(default)]
    pub has_tires: bool,
    /// Paint match work was done.
    #[serde(default)]
    pub has_paint_match: bool,
    /// Leather was installed.
    #[serde(default)]
    pub has_leather: bool,
    /// Some other addendum item is present.
    #[serde(default)]
    pub has_other: bool,
    /// Lift description, captured when the lift flag is set.
    pub lift_description: Option<String>,
    /// Lift price, captured when the lift flag is set.
    pub lift_price: Option<f64>,
}

/// API request to add a vehicle to inventory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateVehicleRequest {
    /// Vehicle identification number. Exactly 17 characters.
    pub vin: String,
    /// Dealer stock number. May be empty before assignment.
    #[serde(default)]
    pub stock_number: String,
    /// Lot or store location.
    pub location: String,
    /// Model year, e.g. "2023".
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
    /// Asking price.
    pub total_price: f64,
    /// Transmission type (Automatic, Manual, CVT).
    pub transmission: String,
    /// Fuel type (Gasoline, Diesel, Hybrid, Electric, Flex Fuel).
    pub fuel_type: String,
    /// Engine size free text, when known.
    pub engine_size: Option<String>,
    /// Free-text listing description.
    #[serde(default)]
    pub description: String,
    /// Optional addendum section of the create form.
    pub addendum: Option<AddendumSection>,
}

/// API request to edit descriptive attributes. `None` leaves a field
/// untouched; for trim and engine size an empty string clears the value.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateAttributesRequest {
    pub vin: Option<String>,
    pub stock_number: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub exterior_color: Option<String>,
    pub mileage: Option<u32>,
    pub total_price: Option<f64>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub engine_size: Option<String>,
    pub description: Option<String>,
}

/// Deposit details as submitted by the status dialog.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepositDetailsDto {
    pub location_sold: String,
    pub desk_manager: String,
    pub deal_number: String,
    pub deposit_amount: f64,
}

/// Sold details as submitted by the status dialog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SoldDetailsDto {
    pub location_sold: String,
    pub desk_manager: String,
    pub sales_manager: String,
    pub salesperson: String,
    pub deal_number: String,
    pub sale_date: String,
}

/// API request to change a vehicle's sale status.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStatusRequest {
    /// The target status in its UI form (e.g. "DEPOSIT").
    pub status: String,
    /// Required when the target status is DEPOSIT.
    pub deposit_details: Option<DepositDetailsDto>,
    /// Required when the target status is SOLD.
    pub sold_details: Option<SoldDetailsDto>,
}

/// API request to rebuild a vehicle's addendum.
pub type UpdateAddendumRequest = AddendumSection;

/// Flattened vehicle projection for the portal's views.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VehicleInfo {
    pub vehicle_id: i64,
    pub vin: String,
    pub stock_number: String,
    pub location: String,
    pub year: String,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub exterior_color: String,
    pub mileage: u32,
    pub total_price: f64,
    pub transmission: String,
    pub fuel_type: String,
    pub engine_size: Option<String>,
    pub description: String,
    /// The UI-facing status string.
    pub status: String,
    pub status_updated_at: String,
    pub status_updated_by: String,
    pub deposit_details: Option<DepositDetailsDto>,
    pub sold_details: Option<SoldDetailsDto>,
    pub has_addendum: bool,
    pub has_lift: bool,
    pub has_wheels: bool,
    pub has_tires: bool,
    pub has_paint_match: bool,
    pub has_leather: bool,
    pub has_other: bool,
    pub lift_description: Option<String>,
    pub lift_price: Option<f64>,
    pub addendum_total: f64,
    pub make_model: String,
    pub year_make_model: String,
    pub price_range: String,
    pub date_added: String,
    pub last_updated_at: String,
    pub last_updated_by: String,
}

/// API response for a successful vehicle creation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CreateVehicleResponse {
    /// The identity assigned by the store.
    pub vehicle_id: i64,
    /// The created vehicle.
    pub vehicle: VehicleInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful vehicle update.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UpdateVehicleResponse {
    /// The updated vehicle.
    pub vehicle: VehicleInfo,
    /// A success message.
    pub message: String,
}

/// API response for a successful vehicle deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteVehicleResponse {
    /// The identity of the deleted vehicle.
    pub vehicle_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for listing the inventory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListVehiclesResponse {
    /// Every vehicle, ordered by date added.
    pub vehicles: Vec<VehicleInfo>,
}
