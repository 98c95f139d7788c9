// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted record shapes and their conversion to domain types.
//!
//! Records mirror the document shape the portal has always stored:
//! the UI status string and the persistence status label both appear,
//! and the flat addendum booleans sit next to the line items. Both
//! pairs are projections of a single domain value on the way out and
//! are verified to agree on the way back in, so a record that drifted
//! out-of-band is rejected rather than silently repaired.

use crate::error::PersistenceError;
use lot_desk_audit::{Actor, AuditStamp, Metadata};
use lot_desk_domain::{
    AddendumItem, Additions, DepositDetails, SaleStatus, SearchIndex, SoldDetails, StatusData,
    Vehicle, VehicleAttributes, validate_flag_consistency,
};
use serde::{Deserialize, Serialize};

/// An actor as persisted on audit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRecord {
    pub id: String,
    pub display_name: String,
}

impl ActorRecord {
    fn from_actor(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            display_name: actor.display_name.clone(),
        }
    }

    fn into_actor(self) -> Actor {
        Actor::new(self.id, self.display_name)
    }
}

/// A persisted addendum line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumItemRecord {
    pub description: String,
    pub price: f64,
    pub completed: bool,
}

impl AddendumItemRecord {
    fn from_item(item: &AddendumItem) -> Self {
        Self {
            description: item.description.clone(),
            price: item.price,
            completed: item.completed,
        }
    }

    fn into_item(self) -> AddendumItem {
        AddendumItem::new(self.description, self.price, self.completed)
    }
}

/// The persisted addendum bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lift: Option<AddendumItemRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheels: Option<AddendumItemRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tires: Option<AddendumItemRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paint_match: Option<AddendumItemRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leather: Option<AddendumItemRecord>,
    #[serde(default)]
    pub other: Vec<AddendumItemRecord>,
    pub total_price: f64,
}

impl AdditionsRecord {
    fn from_additions(additions: &Additions) -> Self {
        Self {
            lift: additions.lift.as_ref().map(AddendumItemRecord::from_item),
            wheels: additions.wheels.as_ref().map(AddendumItemRecord::from_item),
            tires: additions.tires.as_ref().map(AddendumItemRecord::from_item),
            paint_match: additions
                .paint_match
                .as_ref()
                .map(AddendumItemRecord::from_item),
            leather: additions
                .leather
                .as_ref()
                .map(AddendumItemRecord::from_item),
            other: additions
                .other
                .iter()
                .map(AddendumItemRecord::from_item)
                .collect(),
            total_price: additions.total_price,
        }
    }

    fn into_additions(self) -> Additions {
        Additions {
            lift: self.lift.map(AddendumItemRecord::into_item),
            wheels: self.wheels.map(AddendumItemRecord::into_item),
            tires: self.tires.map(AddendumItemRecord::into_item),
            paint_match: self.paint_match.map(AddendumItemRecord::into_item),
            leather: self.leather.map(AddendumItemRecord::into_item),
            other: self
                .other
                .into_iter()
                .map(AddendumItemRecord::into_item)
                .collect(),
            total_price: self.total_price,
        }
    }
}

/// Persisted deposit details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositDetailsRecord {
    pub location_sold: String,
    pub desk_manager: String,
    pub deal_number: String,
    pub deposit_amount: f64,
}

/// Persisted sold details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldDetailsRecord {
    pub location_sold: String,
    pub desk_manager: String,
    pub sales_manager: String,
    pub salesperson: String,
    pub deal_number: String,
    pub sale_date: String,
}

/// The persisted status envelope.
///
/// `current` carries the persistence-facing status label and must agree
/// with the record's top-level UI status string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDataRecord {
    pub current: String,
    pub updated_at: String,
    pub updated_by: ActorRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_details: Option<DepositDetailsRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_details: Option<SoldDetailsRecord>,
}

/// The persisted search projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexRecord {
    pub make_model: String,
    pub year_make_model: String,
    pub price_range: String,
}

/// The persisted audit envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub created_at: String,
    pub created_by: ActorRecord,
    pub last_updated_at: String,
    pub last_updated_by: ActorRecord,
}

/// The full persisted vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<i64>,
    pub vin: String,
    pub stock_number: String,
    pub location: String,
    pub year: String,
    pub make: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub exterior_color: String,
    pub mileage: u32,
    pub total_price: f64,
    pub transmission: String,
    pub fuel_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_size: Option<String>,
    pub description: String,
    pub status: String,
    pub status_data: StatusDataRecord,
    pub additions: AdditionsRecord,
    pub has_lift: bool,
    pub has_wheels: bool,
    pub has_tires: bool,
    pub has_paint_match: bool,
    pub has_leather: bool,
    pub has_other: bool,
    pub search_index: SearchIndexRecord,
    pub metadata: MetadataRecord,
    /// Listing order key; set once from the creation stamp.
    pub date_added: String,
}

impl VehicleRecord {
    /// Projects a domain vehicle into its persisted shape.
    ///
    /// Both status strings and the flat addendum booleans are derived
    /// here from their single domain source, so a record written through
    /// this path can never carry a mismatched pair.
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        let attributes: &VehicleAttributes = &vehicle.attributes;
        let flags = vehicle.additions.flags();

        Self {
            vehicle_id: vehicle.vehicle_id,
            vin: attributes.vin.clone(),
            stock_number: attributes.stock_number.clone(),
            location: attributes.location.clone(),
            year: attributes.year.clone(),
            make: attributes.make.clone(),
            model: attributes.model.clone(),
            trim: attributes.trim.clone(),
            exterior_color: attributes.exterior_color.clone(),
            mileage: attributes.mileage,
            total_price: attributes.total_price,
            transmission: attributes.transmission.as_str().to_string(),
            fuel_type: attributes.fuel_type.as_str().to_string(),
            engine_size: attributes.engine_size.clone(),
            description: attributes.description.clone(),
            status: vehicle.status.as_str().to_string(),
            status_data: StatusDataRecord {
                current: vehicle.status.record_label().to_string(),
                updated_at: vehicle.status_data.updated_at.clone(),
                updated_by: ActorRecord::from_actor(&vehicle.status_data.updated_by),
                deposit_details: vehicle.status_data.deposit_details.as_ref().map(|d| {
                    DepositDetailsRecord {
                        location_sold: d.location_sold.clone(),
                        desk_manager: d.desk_manager.clone(),
                        deal_number: d.deal_number.clone(),
                        deposit_amount: d.deposit_amount,
                    }
                }),
                sold_details: vehicle.status_data.sold_details.as_ref().map(|d| {
                    SoldDetailsRecord {
                        location_sold: d.location_sold.clone(),
                        desk_manager: d.desk_manager.clone(),
                        sales_manager: d.sales_manager.clone(),
                        salesperson: d.salesperson.clone(),
                        deal_number: d.deal_number.clone(),
                        sale_date: d.sale_date.clone(),
                    }
                }),
            },
            additions: AdditionsRecord::from_additions(&vehicle.additions),
            has_lift: flags.has_lift,
            has_wheels: flags.has_wheels,
            has_tires: flags.has_tires,
            has_paint_match: flags.has_paint_match,
            has_leather: flags.has_leather,
            has_other: flags.has_other,
            search_index: SearchIndexRecord {
                make_model: vehicle.search_index.make_model.clone(),
                year_make_model: vehicle.search_index.year_make_model.clone(),
                price_range: vehicle.search_index.price_range.clone(),
            },
            metadata: MetadataRecord {
                created_at: vehicle.metadata.created.at.clone(),
                created_by: ActorRecord::from_actor(&vehicle.metadata.created.by),
                last_updated_at: vehicle.metadata.last_updated.at.clone(),
                last_updated_by: ActorRecord::from_actor(&vehicle.metadata.last_updated.by),
            },
            date_added: vehicle.metadata.created.at.clone(),
        }
    }

    /// Rebuilds the domain vehicle, verifying every duplicated invariant.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRecord` if:
    /// - the UI status string is unknown, or disagrees with the
    ///   persistence label in `statusData.current`
    /// - the transmission or fuel type is not in its fixed enumeration
    /// - a flat addendum boolean disagrees with line-item presence
    /// - a status detail payload is present that does not match the status
    pub fn into_vehicle(self) -> Result<Vehicle, PersistenceError> {
        let vehicle_id: Option<i64> = self.vehicle_id;
        let corrupt = |reason: String| PersistenceError::CorruptRecord { vehicle_id, reason };

        let status: SaleStatus = self
            .status
            .parse()
            .map_err(|e| corrupt(format!("{e}")))?;
        if self.status_data.current != status.record_label() {
            return Err(corrupt(format!(
                "status '{}' does not map to statusData.current '{}'",
                self.status, self.status_data.current
            )));
        }

        let transmission = self
            .transmission
            .parse()
            .map_err(|e| corrupt(format!("{e}")))?;
        let fuel_type = self
            .fuel_type
            .parse()
            .map_err(|e| corrupt(format!("{e}")))?;

        let additions: Additions = self.additions.into_additions();
        let flags = lot_desk_domain::AddendumFlags {
            has_addendum: self.has_lift
                || self.has_wheels
                || self.has_tires
                || self.has_paint_match
                || self.has_leather
                || self.has_other,
            has_lift: self.has_lift,
            has_wheels: self.has_wheels,
            has_tires: self.has_tires,
            has_paint_match: self.has_paint_match,
            has_leather: self.has_leather,
            has_other: self.has_other,
        };
        if let Err(errors) = validate_flag_consistency(&flags, &additions) {
            let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return Err(corrupt(reasons.join("; ")));
        }

        let deposit_details: Option<DepositDetails> =
            self.status_data.deposit_details.map(|d| DepositDetails {
                location_sold: d.location_sold,
                desk_manager: d.desk_manager,
                deal_number: d.deal_number,
                deposit_amount: d.deposit_amount,
            });
        let sold_details: Option<SoldDetails> = self.status_data.sold_details.map(|d| SoldDetails {
            location_sold: d.location_sold,
            desk_manager: d.desk_manager,
            sales_manager: d.sales_manager,
            salesperson: d.salesperson,
            deal_number: d.deal_number,
            sale_date: d.sale_date,
        });
        let payload_matches: bool = match status {
            SaleStatus::Deposit => deposit_details.is_some() && sold_details.is_none(),
            SaleStatus::Sold => deposit_details.is_none() && sold_details.is_some(),
            SaleStatus::Available | SaleStatus::PendingRecon => {
                deposit_details.is_none() && sold_details.is_none()
            }
        };
        if !payload_matches {
            return Err(corrupt(format!(
                "status detail payload does not match status '{}'",
                self.status
            )));
        }

        Ok(Vehicle {
            vehicle_id,
            attributes: VehicleAttributes {
                vin: self.vin,
                stock_number: self.stock_number,
                location: self.location,
                year: self.year,
                make: self.make,
                model: self.model,
                trim: self.trim,
                exterior_color: self.exterior_color,
                mileage: self.mileage,
                total_price: self.total_price,
                transmission,
                fuel_type,
                engine_size: self.engine_size,
                description: self.description,
            },
            status,
            status_data: StatusData {
                updated_at: self.status_data.updated_at,
                updated_by: self.status_data.updated_by.into_actor(),
                deposit_details,
                sold_details,
            },
            additions,
            search_index: SearchIndex {
                make_model: self.search_index.make_model,
                year_make_model: self.search_index.year_make_model,
                price_range: self.search_index.price_range,
            },
            metadata: Metadata {
                created: AuditStamp::new(
                    self.metadata.created_at,
                    self.metadata.created_by.into_actor(),
                ),
                last_updated: AuditStamp::new(
                    self.metadata.last_updated_at,
                    self.metadata.last_updated_by.into_actor(),
                ),
            },
        })
    }
}
