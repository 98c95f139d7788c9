// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dealer-installed equipment ("addendum") aggregation.
//!
//! An addendum is a bag of optional line items (lift kit, wheels, tires,
//! paint match, leather, other) attached to a vehicle listing. The
//! aggregator is the only writer of the line items and the total; the
//! per-category UI flags are derived from line-item presence and can
//! never diverge from it.

use crate::error::DomainError;

/// A single dealer-installed equipment line item.
#[derive(Debug, Clone, PartialEq)]
pub struct AddendumItem {
    /// Free-text description of the equipment.
    pub description: String,
    /// The line-item price. Never negative.
    pub price: f64,
    /// Whether the install is complete.
    pub completed: bool,
}

impl AddendumItem {
    /// Creates a new line item.
    #[must_use]
    pub const fn new(description: String, price: f64, completed: bool) -> Self {
        Self {
            description,
            price,
            completed,
        }
    }

    /// A placeholder item recording only that the category is present.
    ///
    /// Categories other than lift are captured without pricing detail;
    /// the placeholder carries an empty description and zero price.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            description: String::new(),
            price: 0.0,
            completed: true,
        }
    }
}

/// Per-category booleans as presented by the view layer.
///
/// `has_addendum` is the master switch: turning it off clears every
/// category in one step regardless of the per-category values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddendumFlags {
    /// Master switch: the vehicle has any addendum at all.
    pub has_addendum: bool,
    /// A lift kit is installed.
    pub has_lift: bool,
    /// Aftermarket wheels are installed.
    pub has_wheels: bool,
    /// Aftermarket tires are installed.
    pub has_tires: bool,
    /// Paint match work was done.
    pub has_paint_match: bool,
    /// Leather was installed.
    pub has_leather: bool,
    /// Some other addendum item is present.
    pub has_other: bool,
}

/// The optional-line-item bag persisted on a vehicle record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Additions {
    /// Lift kit, with caller-supplied description and price.
    pub lift: Option<AddendumItem>,
    /// Wheels placeholder.
    pub wheels: Option<AddendumItem>,
    /// Tires placeholder.
    pub tires: Option<AddendumItem>,
    /// Paint match placeholder.
    pub paint_match: Option<AddendumItem>,
    /// Leather placeholder.
    pub leather: Option<AddendumItem>,
    /// Ordered list of other items.
    pub other: Vec<AddendumItem>,
    /// Sum of the prices of present line items.
    ///
    /// Only the lift item carries a price, so this equals the lift price
    /// when a lift is present and 0 otherwise.
    pub total_price: f64,
}

impl Additions {
    /// The empty addendum: no line items, zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lift: None,
            wheels: None,
            tires: None,
            paint_match: None,
            leather: None,
            other: Vec::new(),
            total_price: 0.0,
        }
    }

    /// Builds a fully-populated addendum from category flags.
    ///
    /// For each enabled category a line item is synthesized: the lift
    /// item uses the caller-supplied description and price, every other
    /// enabled category records a placeholder. When the master flag is
    /// off, everything is cleared and the total resets to zero.
    ///
    /// The total counts only the lift price. Other categories never
    /// contribute, matching how addendum pricing is captured on the lot.
    ///
    /// # Arguments
    ///
    /// * `flags` - The per-category booleans from the form
    /// * `lift_description` - Lift description, used when `has_lift` is set
    /// * `lift_price` - Lift price, used when `has_lift` is set
    #[must_use]
    pub fn aggregate(
        flags: &AddendumFlags,
        lift_description: Option<&str>,
        lift_price: Option<f64>,
    ) -> Self {
        if !flags.has_addendum {
            return Self::empty();
        }

        let lift: Option<AddendumItem> = flags.has_lift.then(|| {
            AddendumItem::new(
                lift_description.unwrap_or_default().to_string(),
                lift_price.unwrap_or(0.0),
                true,
            )
        });
        let total_price: f64 = lift.as_ref().map_or(0.0, |item| item.price);

        Self {
            lift,
            wheels: flags.has_wheels.then(AddendumItem::placeholder),
            tires: flags.has_tires.then(AddendumItem::placeholder),
            paint_match: flags.has_paint_match.then(AddendumItem::placeholder),
            leather: flags.has_leather.then(AddendumItem::placeholder),
            other: if flags.has_other {
                vec![AddendumItem::placeholder()]
            } else {
                Vec::new()
            },
            total_price,
        }
    }

    /// Derives the per-category flags from line-item presence.
    ///
    /// This is the single source of truth for the flat booleans the view
    /// layer prefers.
    #[must_use]
    pub fn flags(&self) -> AddendumFlags {
        let flags: AddendumFlags = AddendumFlags {
            has_addendum: false,
            has_lift: self.lift.is_some(),
            has_wheels: self.wheels.is_some(),
            has_tires: self.tires.is_some(),
            has_paint_match: self.paint_match.is_some(),
            has_leather: self.leather.is_some(),
            has_other: !self.other.is_empty(),
        };

        AddendumFlags {
            has_addendum: flags.has_lift
                || flags.has_wheels
                || flags.has_tires
                || flags.has_paint_match
                || flags.has_leather
                || flags.has_other,
            ..flags
        }
    }
}

/// Validates externally supplied flags against line-item presence.
///
/// The aggregator is the only component permitted to set these fields
/// together; input that violates the flag/line-item invariant (for
/// example a record edited out-of-band) is rejected with one error per
/// mismatched category.
///
/// # Errors
///
/// Returns an `AddendumFlagMismatch` for every category whose flag
/// disagrees with the presence of its line item.
pub fn validate_flag_consistency(
    flags: &AddendumFlags,
    additions: &Additions,
) -> Result<(), Vec<DomainError>> {
    let checks: [(&'static str, bool, bool); 6] = [
        ("lift", flags.has_lift, additions.lift.is_some()),
        ("wheels", flags.has_wheels, additions.wheels.is_some()),
        ("tires", flags.has_tires, additions.tires.is_some()),
        (
            "paint_match",
            flags.has_paint_match,
            additions.paint_match.is_some(),
        ),
        ("leather", flags.has_leather, additions.leather.is_some()),
        ("other", flags.has_other, !additions.other.is_empty()),
    ];

    let errors: Vec<DomainError> = checks
        .iter()
        .filter(|&&(_, flag, present)| flag != present)
        .map(|&(category, flag, _)| DomainError::AddendumFlagMismatch { category, flag })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
