// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::VehicleRecord;
use crate::error::PersistenceError;
use crate::tests::helpers::{create_deposit_vehicle, create_test_vehicle};
use lot_desk_domain::SaleStatus;

const T0: &str = "2026-02-01T09:00:00Z";

#[test]
fn test_record_carries_both_status_projections() {
    let vehicle = create_deposit_vehicle(T0);

    let record = VehicleRecord::from_vehicle(&vehicle);

    assert_eq!(record.status, "DEPOSIT");
    assert_eq!(record.status_data.current, "Deposit");
    assert!(record.status_data.deposit_details.is_some());
}

#[test]
fn test_record_flags_derive_from_line_items() {
    let record = VehicleRecord::from_vehicle(&create_test_vehicle(T0));

    assert!(!record.has_lift);
    assert!(!record.has_other);
    assert!(record.additions.lift.is_none());
}

#[test]
fn test_round_trip_preserves_the_vehicle() {
    let vehicle = create_deposit_vehicle(T0);

    let rebuilt = VehicleRecord::from_vehicle(&vehicle).into_vehicle().unwrap();

    assert_eq!(rebuilt, vehicle);
}

#[test]
fn test_date_added_comes_from_creation_stamp() {
    let record = VehicleRecord::from_vehicle(&create_test_vehicle(T0));

    assert_eq!(record.date_added, T0);
    assert_eq!(record.metadata.created_at, T0);
}

#[test]
fn test_mismatched_status_projection_is_rejected() {
    let mut record = VehicleRecord::from_vehicle(&create_test_vehicle(T0));
    record.status_data.current = String::from("Sold");

    let err = record.into_vehicle().unwrap_err();

    match err {
        PersistenceError::CorruptRecord { reason, .. } => {
            assert!(reason.contains("does not map"));
        }
        other => panic!("expected corrupt record, got {other}"),
    }
}

#[test]
fn test_unknown_status_string_is_rejected() {
    let mut record = VehicleRecord::from_vehicle(&create_test_vehicle(T0));
    record.status = String::from("WHOLESALE");

    assert!(record.into_vehicle().is_err());
}

#[test]
fn test_flag_line_item_mismatch_is_rejected() {
    let mut record = VehicleRecord::from_vehicle(&create_test_vehicle(T0));
    record.has_wheels = true;

    let err = record.into_vehicle().unwrap_err();

    match err {
        PersistenceError::CorruptRecord { reason, .. } => {
            assert!(reason.contains("wheels"));
        }
        other => panic!("expected corrupt record, got {other}"),
    }
}

#[test]
fn test_stray_detail_payload_is_rejected() {
    let deposit = create_deposit_vehicle(T0);
    let mut record = VehicleRecord::from_vehicle(&deposit);
    // Claim Available while still carrying deposit details.
    record.status = SaleStatus::Available.as_str().to_string();
    record.status_data.current = SaleStatus::Available.record_label().to_string();

    let err = record.into_vehicle().unwrap_err();

    match err {
        PersistenceError::CorruptRecord { reason, .. } => {
            assert!(reason.contains("payload"));
        }
        other => panic!("expected corrupt record, got {other}"),
    }
}

#[test]
fn test_record_serializes_with_portal_field_names() {
    let record = VehicleRecord::from_vehicle(&create_deposit_vehicle(T0));

    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"stockNumber\""));
    assert!(json.contains("\"statusData\""));
    assert!(json.contains("\"depositDetails\""));
    assert!(json.contains("\"hasLift\""));
    assert!(json.contains("\"totalPrice\""));
    assert!(json.contains("\"makeModel\""));
    assert!(json.contains("\"dateAdded\""));
}
