use serde::Serialize;
use shared::models::InventoryTable;
use std::collections::BTreeSet;

use super::predicate::{FilterPredicate, PriceRange};

/// Choices offered by a filter sidebar for one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub price_bounds: PriceRange,
}

impl FilterOptions {
    pub fn from_table(table: &InventoryTable) -> Self {
        let categories: BTreeSet<&str> = table.iter().map(|r| r.category.as_str()).collect();
        let locations: BTreeSet<&str> = table.iter().map(|r| r.location.as_str()).collect();

        FilterOptions {
            categories: categories.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
            price_bounds: PriceRange::spanning(table),
        }
    }

    /// Everything selected, full price span: the state a view starts in.
    pub fn select_all(&self) -> FilterPredicate {
        FilterPredicate {
            categories: self.categories.iter().cloned().collect(),
            locations: self.locations.iter().cloned().collect(),
            price: Some(self.price_bounds),
        }
    }
}
