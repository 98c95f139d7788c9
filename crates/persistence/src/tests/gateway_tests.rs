// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::gateway::VehicleGateway;
use crate::memory::MemoryGateway;
use crate::tests::helpers::create_test_record;

#[test]
fn test_create_assigns_sequential_ids() {
    let mut gateway = MemoryGateway::new();

    let first = gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();
    let second = gateway.create(create_test_record("2026-02-01T09:05:00Z")).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(gateway.get(first).unwrap().vehicle_id, Some(1));
}

#[test]
fn test_get_unknown_id_is_not_found() {
    let gateway = MemoryGateway::new();

    let err = gateway.get(99).unwrap_err();

    assert!(matches!(err, PersistenceError::NotFound(99)));
}

#[test]
fn test_update_replaces_last_write_wins() {
    let mut gateway = MemoryGateway::new();
    let id = gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();

    let mut replacement = create_test_record("2026-02-01T09:00:00Z");
    replacement.stock_number = String::from("P9999");
    gateway.update(id, replacement).unwrap();

    assert_eq!(gateway.get(id).unwrap().stock_number, "P9999");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut gateway = MemoryGateway::new();

    let err = gateway.update(7, create_test_record("2026-02-01T09:00:00Z")).unwrap_err();

    assert!(matches!(err, PersistenceError::NotFound(7)));
}

#[test]
fn test_delete_removes_the_record() {
    let mut gateway = MemoryGateway::new();
    let id = gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();

    gateway.delete(id).unwrap();

    assert!(matches!(
        gateway.get(id).unwrap_err(),
        PersistenceError::NotFound(_)
    ));
    assert!(gateway.delete(id).is_err());
}

#[test]
fn test_list_orders_by_date_added() {
    let mut gateway = MemoryGateway::new();
    // Insert out of date order.
    gateway.create(create_test_record("2026-03-01T09:00:00Z")).unwrap();
    gateway.create(create_test_record("2026-01-01T09:00:00Z")).unwrap();
    gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();

    let listed = gateway.list_all().unwrap();

    let dates: Vec<&str> = listed.iter().map(|r| r.date_added.as_str()).collect();
    assert_eq!(
        dates,
        vec![
            "2026-01-01T09:00:00Z",
            "2026-02-01T09:00:00Z",
            "2026-03-01T09:00:00Z"
        ]
    );
}

#[test]
fn test_list_ties_break_on_id() {
    let mut gateway = MemoryGateway::new();
    let first = gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();
    let second = gateway.create(create_test_record("2026-02-01T09:00:00Z")).unwrap();

    let listed = gateway.list_all().unwrap();

    assert_eq!(listed[0].vehicle_id, Some(first));
    assert_eq!(listed[1].vehicle_id, Some(second));
}
