// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor identity, audit stamps, and the clock source.
//!
//! Every mutating operation in the portal is attributed to an actor and
//! stamped with the time it happened. This crate holds those types plus
//! the injectable clock the stamping uses, so tests can pin time.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// The identity performing a mutation.
///
/// Supplied verbatim by the caller on every mutating operation; the core
/// performs no authorization itself. Both the opaque id and the display
/// name are recorded so audit fields can be rendered without a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The human-readable name shown in audit fields.
    pub display_name: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `display_name` - The name shown in audit fields
    #[must_use]
    pub const fn new(id: String, display_name: String) -> Self {
        Self { id, display_name }
    }
}

/// A who/when pair recorded on a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    /// When the mutation happened, as an ISO-8601 string.
    pub at: String,
    /// Who performed the mutation.
    pub by: Actor,
}

impl AuditStamp {
    /// Creates a new `AuditStamp`.
    #[must_use]
    pub const fn new(at: String, by: Actor) -> Self {
        Self { at, by }
    }
}

/// The audit envelope carried on every vehicle record.
///
/// The creation stamp is set once and never changed; the update stamp is
/// refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// When and by whom the record was created.
    pub created: AuditStamp,
    /// When and by whom the record was last updated.
    pub last_updated: AuditStamp,
}

impl Metadata {
    /// Creates metadata for a freshly created record.
    ///
    /// Creation and last-update stamps start out identical.
    #[must_use]
    pub fn new(stamp: AuditStamp) -> Self {
        Self {
            created: stamp.clone(),
            last_updated: stamp,
        }
    }

    /// Returns a copy with the last-update stamp replaced.
    ///
    /// The creation stamp is preserved unchanged.
    #[must_use]
    pub fn refreshed(&self, stamp: AuditStamp) -> Self {
        Self {
            created: self.created.clone(),
            last_updated: stamp,
        }
    }
}

/// A source of "now" timestamps.
///
/// Injected wherever stamps are produced so tests can pin time. The
/// string form matches the persisted timestamp format used throughout.
pub trait Clock {
    /// Returns the current time as an ISO-8601 string.
    fn now(&self) -> String;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        // Formatting an in-range UTC timestamp as RFC 3339 cannot fail.
        OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_or_else(|_| String::from("1970-01-01T00:00:00Z"), |ts| ts)
    }
}
