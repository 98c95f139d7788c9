// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON-file gateway, the development stand-in for the remote store.
//!
//! The whole inventory lives in one JSON document, loaded at open and
//! rewritten after every mutation. Good enough for a single-process
//! development server; the production deployment points the same trait
//! at the real remote store.

use crate::data_models::VehicleRecord;
use crate::error::PersistenceError;
use crate::gateway::VehicleGateway;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk document shape.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    next_id: i64,
    vehicles: Vec<VehicleRecord>,
}

/// A [`VehicleGateway`] backed by a single JSON file.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    next_id: i64,
    vehicles: BTreeMap<i64, VehicleRecord>,
}

impl JsonStore {
    /// Opens the store, loading the file when it already exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The JSON file to read and rewrite
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if a loaded record carries no id.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: PathBuf = path.as_ref().to_path_buf();

        if !path.exists() {
            info!(path = %path.display(), "Starting empty vehicle store");
            return Ok(Self {
                path,
                next_id: 1,
                vehicles: BTreeMap::new(),
            });
        }

        let contents: String = fs::read_to_string(&path)?;
        let file: StoreFile = serde_json::from_str(&contents)?;

        let mut vehicles: BTreeMap<i64, VehicleRecord> = BTreeMap::new();
        for record in file.vehicles {
            let vehicle_id: i64 =
                record
                    .vehicle_id
                    .ok_or_else(|| PersistenceError::CorruptRecord {
                        vehicle_id: None,
                        reason: String::from("stored record has no vehicle id"),
                    })?;
            vehicles.insert(vehicle_id, record);
        }

        info!(
            path = %path.display(),
            count = vehicles.len(),
            "Loaded vehicle store"
        );
        Ok(Self {
            path,
            next_id: file.next_id,
            vehicles,
        })
    }

    /// Rewrites the backing file from the in-memory state.
    fn persist(&self) -> Result<(), PersistenceError> {
        let file: StoreFile = StoreFile {
            next_id: self.next_id,
            vehicles: self.vehicles.values().cloned().collect(),
        };
        let contents: String = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Rewrote vehicle store");
        Ok(())
    }
}

impl VehicleGateway for JsonStore {
    fn create(&mut self, mut record: VehicleRecord) -> Result<i64, PersistenceError> {
        let vehicle_id: i64 = self.next_id;
        self.next_id += 1;
        record.vehicle_id = Some(vehicle_id);
        self.vehicles.insert(vehicle_id, record);
        self.persist()?;
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
        self.persist()?;
        debug!(vehicle_id, "Replaced vehicle record");
        Ok(())
    }

    fn delete(&mut self, vehicle_id: i64) -> Result<(), PersistenceError> {
        if self.vehicles.remove(&vehicle_id).is_none() {
            return Err(PersistenceError::NotFound(vehicle_id));
        }
        self.persist()?;
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
