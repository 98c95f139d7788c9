// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence gateway for the Lot Desk portal.
//!
//! The core never assumes anything about the store's transport; it hands
//! fully assembled records to a [`VehicleGateway`] and reads them back.
//! Two gateways ship here:
//!
//! - [`MemoryGateway`] — map-backed, used by tests and as the server
//!   default when no store path is given
//! - [`JsonStore`] — single-file JSON document, the development
//!   stand-in for the remote store
//!
//! Records are stored in the portal's historical document shape
//! ([`VehicleRecord`]), which duplicates the status string and the flat
//! addendum booleans; the conversion back to domain types verifies those
//! duplicates still agree and rejects records that drifted out-of-band.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod error;
mod gateway;
mod json_store;
mod memory;

#[cfg(test)]
mod tests;

pub use data_models::{
    ActorRecord, AdditionsRecord, AddendumItemRecord, DepositDetailsRecord, MetadataRecord,
    SearchIndexRecord, SoldDetailsRecord, StatusDataRecord, VehicleRecord,
};
pub use error::PersistenceError;
pub use gateway::VehicleGateway;
pub use json_store::JsonStore;
pub use memory::MemoryGateway;
