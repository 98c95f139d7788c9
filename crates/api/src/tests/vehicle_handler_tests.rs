// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{
    create_vehicle, delete_vehicle, get_vehicle, list_vehicles, update_vehicle_addendum,
    update_vehicle_attributes, update_vehicle_status,
};
use crate::request_response::{
    AddendumSection, UpdateAttributesRequest, UpdateStatusRequest,
};
use crate::tests::helpers::{
    FixedClock, create_f150_request, create_test_actor, create_test_deposit_dto,
    create_test_sold_dto,
};
use lot_desk_persistence::{MemoryGateway, VehicleGateway};

const T0: &str = "2026-02-01T09:00:00Z";
const T1: &str = "2026-02-02T10:30:00Z";
const T2: &str = "2026-02-03T16:45:00Z";

fn status_request(status: &str) -> UpdateStatusRequest {
    UpdateStatusRequest {
        status: status.to_string(),
        deposit_details: None,
        sold_details: None,
    }
}

#[test]
fn test_create_vehicle_end_to_end_scenario() {
    let mut gateway = MemoryGateway::new();

    let response = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    assert_eq!(response.vehicle.status, "AVAILABLE");
    assert_eq!(response.vehicle.price_range, "$40k-$50k");
    assert_eq!(response.vehicle.make_model, "ford f-150");
    assert_eq!(response.vehicle.year_make_model, "2023 ford f-150");
    assert_eq!(response.vehicle.date_added, T0);
    // And the stored record agrees with the response
    let stored = gateway.get(response.vehicle_id).unwrap();
    assert_eq!(stored.status, "AVAILABLE");
    assert_eq!(stored.status_data.current, "Available");
}

#[test]
fn test_create_vehicle_rejects_short_vin() {
    let mut gateway = MemoryGateway::new();
    let mut request = create_f150_request();
    request.vin = String::from("SHORT");

    let err = create_vehicle(
        &mut gateway,
        request,
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap_err();

    match err {
        ApiError::ValidationFailed { violations } => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "vin");
            assert_eq!(violations[0].rule, "vin_length");
        }
        other => panic!("expected validation failure, got {other}"),
    }
    assert!(gateway.list_all().unwrap().is_empty());
}

#[test]
fn test_create_vehicle_rejects_unknown_enumerations_together() {
    let mut gateway = MemoryGateway::new();
    let mut request = create_f150_request();
    request.transmission = String::from("Tiptronic");
    request.fuel_type = String::from("Hydrogen");

    let err = create_vehicle(
        &mut gateway,
        request,
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap_err();

    match err {
        ApiError::ValidationFailed { violations } => {
            assert_eq!(violations.len(), 2);
        }
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn test_deposit_without_amount_leaves_record_unmodified() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let mut deposit = create_test_deposit_dto();
    deposit.deposit_amount = 0.0;
    let request = UpdateStatusRequest {
        status: String::from("DEPOSIT"),
        deposit_details: Some(deposit),
        sold_details: None,
    };

    let err = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        request,
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ValidationFailed { .. }));
    // Prior record is untouched in the store
    let stored = gateway.get(created.vehicle_id).unwrap();
    assert_eq!(stored.status, "AVAILABLE");
    assert_eq!(stored.metadata.last_updated_at, T0);
}

#[test]
fn test_status_cycle_clears_sold_residue() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let sold = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        UpdateStatusRequest {
            status: String::from("SOLD"),
            deposit_details: None,
            sold_details: Some(create_test_sold_dto()),
        },
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap();
    assert_eq!(sold.vehicle.status, "SOLD");
    assert!(sold.vehicle.sold_details.is_some());

    let relisted = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        status_request("AVAILABLE"),
        &create_test_actor(),
        &FixedClock(T2),
    )
    .unwrap();

    assert_eq!(relisted.vehicle.status, "AVAILABLE");
    assert!(relisted.vehicle.sold_details.is_none());
    assert!(relisted.vehicle.deposit_details.is_none());
    let stored = gateway.get(created.vehicle_id).unwrap();
    assert!(stored.status_data.sold_details.is_none());
}

#[test]
fn test_status_restamp_is_idempotent_except_timestamp() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let request = || UpdateStatusRequest {
        status: String::from("DEPOSIT"),
        deposit_details: Some(create_test_deposit_dto()),
        sold_details: None,
    };

    let first = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        request(),
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap();
    let second = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        request(),
        &create_test_actor(),
        &FixedClock(T2),
    )
    .unwrap();

    assert_eq!(second.vehicle.status, first.vehicle.status);
    assert_eq!(second.vehicle.deposit_details, first.vehicle.deposit_details);
    assert_eq!(second.vehicle.status_updated_by, first.vehicle.status_updated_by);
    assert_eq!(second.vehicle.status_updated_at, T2);
}

#[test]
fn test_supplying_both_payloads_is_rejected() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let request = UpdateStatusRequest {
        status: String::from("DEPOSIT"),
        deposit_details: Some(create_test_deposit_dto()),
        sold_details: Some(create_test_sold_dto()),
    };

    let err = update_vehicle_status(
        &mut gateway,
        created.vehicle_id,
        request,
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap_err();

    match err {
        ApiError::ValidationFailed { violations } => {
            assert_eq!(violations[0].rule, "mutually_exclusive_details");
        }
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn test_addendum_update_flattens_flags_into_view() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();
    assert!(!created.vehicle.has_addendum);

    let response = update_vehicle_addendum(
        &mut gateway,
        created.vehicle_id,
        AddendumSection {
            has_addendum: true,
            has_lift: true,
            has_wheels: true,
            lift_description: Some(String::from("6in lift")),
            lift_price: Some(4250.0),
            ..AddendumSection::default()
        },
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap();

    assert!(response.vehicle.has_addendum);
    assert!(response.vehicle.has_lift);
    assert!(response.vehicle.has_wheels);
    assert!(!response.vehicle.has_tires);
    assert_eq!(response.vehicle.addendum_total, 4250.0);
    assert_eq!(response.vehicle.lift_description.as_deref(), Some("6in lift"));
    let stored = gateway.get(created.vehicle_id).unwrap();
    assert!(stored.has_lift);
    assert_eq!(stored.additions.total_price, 4250.0);
}

#[test]
fn test_master_switch_clears_addendum_via_api() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    update_vehicle_addendum(
        &mut gateway,
        created.vehicle_id,
        AddendumSection {
            has_addendum: true,
            has_lift: true,
            has_leather: true,
            lift_description: Some(String::from("lift")),
            lift_price: Some(900.0),
            ..AddendumSection::default()
        },
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap();

    let cleared = update_vehicle_addendum(
        &mut gateway,
        created.vehicle_id,
        AddendumSection {
            has_addendum: false,
            has_lift: true,
            has_leather: true,
            ..AddendumSection::default()
        },
        &create_test_actor(),
        &FixedClock(T2),
    )
    .unwrap();

    assert!(!cleared.vehicle.has_addendum);
    assert!(!cleared.vehicle.has_lift);
    assert_eq!(cleared.vehicle.addendum_total, 0.0);
}

#[test]
fn test_attribute_edit_refreshes_search_projection() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let response = update_vehicle_attributes(
        &mut gateway,
        created.vehicle_id,
        UpdateAttributesRequest {
            total_price: Some(19_999.0),
            ..UpdateAttributesRequest::default()
        },
        &create_test_actor(),
        &FixedClock(T1),
    )
    .unwrap();

    assert_eq!(response.vehicle.price_range, "Under $20k");
    assert_eq!(response.vehicle.last_updated_at, T1);
    let stored = gateway.get(created.vehicle_id).unwrap();
    assert_eq!(stored.search_index.price_range, "Under $20k");
}

#[test]
fn test_delete_is_a_verbatim_passthrough() {
    let mut gateway = MemoryGateway::new();
    let created = create_vehicle(
        &mut gateway,
        create_f150_request(),
        &create_test_actor(),
        &FixedClock(T0),
    )
    .unwrap();

    let response =
        delete_vehicle(&mut gateway, created.vehicle_id, &create_test_actor()).unwrap();

    assert_eq!(response.vehicle_id, created.vehicle_id);
    assert!(matches!(
        get_vehicle(&gateway, created.vehicle_id).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_operations_on_missing_vehicle_return_not_found() {
    let mut gateway = MemoryGateway::new();

    assert!(matches!(
        update_vehicle_status(
            &mut gateway,
            404,
            status_request("AVAILABLE"),
            &create_test_actor(),
            &FixedClock(T0),
        )
        .unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
    assert!(matches!(
        delete_vehicle(&mut gateway, 404, &create_test_actor()).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_list_returns_vehicles_in_date_added_order() {
    let mut gateway = MemoryGateway::new();
    let actor = create_test_actor();

    let mut second = create_f150_request();
    second.vin = String::from("1FTFW1ET1EFA00002");
    second.model = String::from("Ranger");

    create_vehicle(&mut gateway, create_f150_request(), &actor, &FixedClock(T0)).unwrap();
    create_vehicle(&mut gateway, second, &actor, &FixedClock(T1)).unwrap();

    let listed = list_vehicles(&gateway).unwrap();

    assert_eq!(listed.vehicles.len(), 2);
    assert_eq!(listed.vehicles[0].model, "F-150");
    assert_eq!(listed.vehicles[1].model, "Ranger");
}
