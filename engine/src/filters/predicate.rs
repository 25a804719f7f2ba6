use serde::{Deserialize, Serialize};
use shared::models::ProductRecord;
use std::collections::BTreeSet;

// Added to the upper bound when every price in the data is the same.
pub const SINGLE_PRICE_WIDENING: f64 = 1.0;

/// Inclusive price interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    /// Bounds spanning every price in `records`, widened so that `min < max` always holds.
    /// No records gives `[0, 1]`.
    pub fn spanning<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductRecord>,
    {
        let bounds = records.into_iter().fold(None, |acc: Option<(f64, f64)>, r| match acc {
            None => Some((r.price, r.price)),
            Some((lo, hi)) => Some((lo.min(r.price), hi.max(r.price))),
        });
        let (min, max) = bounds.unwrap_or((0.0, 0.0));
        Self::new(min, max).widened()
    }

    /// Bumps a degenerate range (`min == max`) to `[min, min + 1]`.
    pub fn widened(self) -> Self {
        if self.min == self.max {
            PriceRange::new(self.min, self.max + SINGLE_PRICE_WIDENING)
        } else {
            self
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Optional restrictions on a table, AND-combined.
///
/// An empty category or location set means "no restriction" on that dimension,
/// not "nothing passes".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub price: Option<PriceRange>,
}

impl FilterPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price = Some(PriceRange::new(min, max));
        self
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        (self.categories.is_empty() || self.categories.contains(&record.category))
            && (self.locations.is_empty() || self.locations.contains(&record.location))
            && self.price.map_or(true, |range| range.contains(record.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: f64) -> ProductRecord {
        ProductRecord {
            price,
            ..ProductRecord::default()
        }
    }

    #[test]
    fn test_range_is_inclusive_at_both_ends() {
        let range = PriceRange::new(0.99, 1.49);
        assert!(range.contains(0.99));
        assert!(range.contains(1.49));
        assert!(!range.contains(0.98));
        assert!(!range.contains(1.50));
    }

    #[test]
    fn test_spanning_widens_single_price() {
        let records = vec![priced(2.5), priced(2.5)];
        let range = PriceRange::spanning(&records);
        assert_eq!(range, PriceRange::new(2.5, 3.5));
        assert!(range.min < range.max);
    }

    #[test]
    fn test_spanning_empty_and_mixed() {
        assert_eq!(PriceRange::spanning(std::iter::empty()), PriceRange::new(0.0, 1.0));
        let records = vec![priced(1.49), priced(0.29), priced(2.49)];
        assert_eq!(PriceRange::spanning(&records), PriceRange::new(0.29, 2.49));
    }

    #[test]
    fn test_empty_sets_do_not_restrict() {
        let record = ProductRecord {
            category: "Obst".to_string(),
            location: "A".to_string(),
            ..ProductRecord::default()
        };
        assert!(FilterPredicate::new().matches(&record));
        assert!(FilterPredicate::new().with_categories(["Obst"]).matches(&record));
        assert!(!FilterPredicate::new().with_locations(["B"]).matches(&record));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let predicate = FilterPredicate::new().with_price_range(5.0, 1.0);
        assert!(!predicate.matches(&priced(3.0)));
        assert!(!predicate.matches(&priced(5.0)));
    }
}
