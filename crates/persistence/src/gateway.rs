// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence gateway trait.
//!
//! The portal treats its remote store as a durable key-value store keyed
//! by vehicle id and ordered by date-added on listing. Updates are
//! full-record replaces resolved last-write-wins; there is no version
//! check. Isolating the store behind this trait keeps that policy
//! swappable without touching the assembly core.

use crate::data_models::VehicleRecord;
use crate::error::PersistenceError;

/// A durable store of vehicle records.
pub trait VehicleGateway: Send {
    /// Stores a new record and returns the identity assigned to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be stored.
    fn create(&mut self, record: VehicleRecord) -> Result<i64, PersistenceError>;

    /// Fetches a record by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no record has this id.
    fn get(&self, vehicle_id: i64) -> Result<VehicleRecord, PersistenceError>;

    /// Replaces the record stored under `vehicle_id`. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no record has this id.
    fn update(&mut self, vehicle_id: i64, record: VehicleRecord) -> Result<(), PersistenceError>;

    /// Removes the record stored under `vehicle_id`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no record has this id.
    fn delete(&mut self, vehicle_id: i64) -> Result<(), PersistenceError>;

    /// Lists every record, ordered by date-added then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_all(&self) -> Result<Vec<VehicleRecord>, PersistenceError>;
}
