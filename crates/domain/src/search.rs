// Copyright (C) 2026 Lot Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived search projections for vehicle listings.

/// Normalized, filterable fields derived from a vehicle's own attributes.
///
/// Read-only: always recomputed from the current attributes, never
/// supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    /// Lower-cased "make model".
    pub make_model: String,
    /// Lower-cased "year make model".
    pub year_make_model: String,
    /// Price bucket label, see [`price_range_label`].
    pub price_range: String,
}

impl SearchIndex {
    /// Builds the projection from the vehicle's descriptive attributes.
    ///
    /// Total for any input; a negative price is rejected upstream by the
    /// vehicle attribute constraints, not here.
    #[must_use]
    pub fn build(year: &str, make: &str, model: &str, total_price: f64) -> Self {
        Self {
            make_model: format!("{make} {model}").to_lowercase(),
            year_make_model: format!("{year} {make} {model}").to_lowercase(),
            price_range: price_range_label(total_price).to_string(),
        }
    }
}

/// Maps a total price onto its bucket label.
///
/// Buckets are half-open: `[0,20000)`, `[20000,30000)`, `[30000,40000)`,
/// `[40000,50000)`, `[50000,∞)`.
#[must_use]
pub fn price_range_label(total_price: f64) -> &'static str {
    if total_price < 20_000.0 {
        "Under $20k"
    } else if total_price < 30_000.0 {
        "$20k-$30k"
    } else if total_price < 40_000.0 {
        "$30k-$40k"
    } else if total_price < 50_000.0 {
        "$40k-$50k"
    } else {
        "Over $50k"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_model_is_lowercased() {
        let index = SearchIndex::build("2023", "Ford", "F-150", 45_000.0);

        assert_eq!(index.make_model, "ford f-150");
        assert_eq!(index.year_make_model, "2023 ford f-150");
    }

    #[test]
    fn test_price_buckets_are_half_open() {
        assert_eq!(price_range_label(0.0), "Under $20k");
        assert_eq!(price_range_label(19_999.0), "Under $20k");
        assert_eq!(price_range_label(20_000.0), "$20k-$30k");
        assert_eq!(price_range_label(29_999.99), "$20k-$30k");
        assert_eq!(price_range_label(30_000.0), "$30k-$40k");
        assert_eq!(price_range_label(40_000.0), "$40k-$50k");
        assert_eq!(price_range_label(49_999.99), "$40k-$50k");
        assert_eq!(price_range_label(50_000.0), "Over $50k");
        assert_eq!(price_range_label(75_000.0), "Over $50k");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let a = SearchIndex::build("2021", "RAM", "2500", 62_500.0);
        let b = SearchIndex::build("2021", "RAM", "2500", 62_500.0);

        assert_eq!(a, b);
        assert_eq!(a.price_range, "Over $50k");
    }
}
