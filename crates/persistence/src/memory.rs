// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory gateway used for tests and as the server default.

use crate::data_models::VehicleRecord;
use crate::error::PersistenceError;
use crate::gateway::VehicleGateway;
use std::collections::BTreeMap;
use tracing::debug;

/// A [`VehicleGateway`] backed by a plain map.
///
/// Identities are assigned sequentially. Contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    next_id: i64,
    vehicles: BTreeMap<i64, VehicleRecord>,
}

impl MemoryGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 1,
            vehicles: BTreeMap::new(),
        }
    }
}

impl VehicleGateway for MemoryGateway {
    fn create(&mut self, mut record: VehicleRecord) -> Result<i64, PersistenceError> {
        let vehicle_id: i64 = self.next_id;
        self.next_id += 1;
        record.vehicle_id = Some(vehicle_id);
        self.vehicles.insert(vehicle_id, record);
        debug!(vehicle_id, "Stored new vehicle record");
        Ok(vehicle_id)
    }

    fn get(&self, vehicle_id: i64) -> Result<VehicleRecord, PersistenceError> {
        self.vehicles
            .get(&vehicle_id)
            .cloned()
            .ok_or(PersistenceError::NotFound(vehicle_id))
    }

    fn update(&mut self, vehicle_id: i64, mut record: VehicleRecord) -> Result<(), PersistenceError> {
        if !self.vehicles.contains_key(&vehicle_id) {
            return Err(PersistenceError::NotFound(vehicle_id));
        }
        record.vehicle_id = Some(vehicle_id);
        self.vehicles.insert(vehicle_id, record);
        debug!(vehicle_id, "Replaced vehicle record");
        Ok(())
    }

    fn delete(&mut self, vehicle_id: i64) -> Result<(), PersistenceError> {
        if self.vehicles.remove(&vehicle_id).is_none() {
            return Err(PersistenceError::NotFound(vehicle_id));
        }
        debug!(vehicle_id, "Deleted vehicle record");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<VehicleRecord>, PersistenceError> {
        let mut records: Vec<VehicleRecord> = self.vehicles.values().cloned().collect();
        records.sort_by(|a, b| {
            a.date_added
                .cmp(&b.date_added)
                .then(a.vehicle_id.cmp(&b.vehicle_id))
        });
        Ok(records)
    }
}
