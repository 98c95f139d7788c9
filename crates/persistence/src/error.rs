// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the persistence gateway.

use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The requested vehicle was not found.
    #[error("Vehicle not found: {0}")]
    NotFound(i64),

    /// A stored record violates a documented invariant.
    ///
    /// Indicates a record edited out-of-band or a defect in whatever
    /// wrote it; never produced by user input.
    #[error("Corrupt vehicle record {vehicle_id:?}: {reason}")]
    CorruptRecord {
        /// The record's identity, when known.
        vehicle_id: Option<i64>,
        /// What was inconsistent about the record.
        reason: String,
    },

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store could not be read or written.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
