// Filter engine: predicate filtering, barcode lookup and the choices a filter UI is built from.
pub mod options;
pub mod predicate;

pub use options::FilterOptions;
pub use predicate::{FilterPredicate, PriceRange};

use shared::models::InventoryTable;

/// Records of `table` that satisfy `predicate`, in their original order.
pub fn filter(table: &InventoryTable, predicate: &FilterPredicate) -> InventoryTable {
    InventoryTable {
        extra_columns: table.extra_columns.clone(),
        records: table
            .iter()
            .filter(|record| predicate.matches(record))
            .cloned()
            .collect(),
    }
}

/// Every record whose barcode is exactly `barcode` (text comparison), in table order.
pub fn lookup_barcode(table: &InventoryTable, barcode: &str) -> InventoryTable {
    InventoryTable {
        extra_columns: table.extra_columns.clone(),
        records: table
            .iter()
            .filter(|record| record.barcode == barcode)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductRecord;

    fn product(name: &str, category: &str, price: f64, stock: u64, location: &str, barcode: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            category: category.to_string(),
            stock,
            price,
            barcode: barcode.to_string(),
            location: location.to_string(),
            ..ProductRecord::default()
        }
    }

    fn sample_table() -> InventoryTable {
        InventoryTable::from_records(vec![
            product("Apfel", "Obst", 0.99, 120, "A", "4001"),
            product("Milch", "Milchprodukte", 1.49, 60, "B", "4002"),
            product("Birne", "Obst", 1.49, 40, "B", "4003"),
            product("Apfel Bio", "Obst", 1.29, 15, "A", "4001"),
        ])
    }

    fn names(table: &InventoryTable) -> Vec<&str> {
        table.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_category_filter_picks_apfel() {
        let table = InventoryTable::from_records(vec![
            product("Apfel", "Obst", 0.99, 120, "A", ""),
            product("Milch", "Milchprodukte", 1.49, 60, "B", ""),
        ]);
        let predicate = FilterPredicate::new()
            .with_categories(["Obst"])
            .with_price_range(0.0, 100.0);

        let result = filter(&table, &predicate);
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0], table.records[0]);
    }

    #[test]
    fn test_filters_are_and_combined_and_order_preserving() {
        let table = sample_table();
        let predicate = FilterPredicate::new()
            .with_categories(["Obst"])
            .with_locations(["A", "B"])
            .with_price_range(1.0, 1.49);

        assert_eq!(names(&filter(&table, &predicate)), vec!["Birne", "Apfel Bio"]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let table = sample_table();
        let predicate = FilterPredicate::new().with_price_range(0.99, 1.29);
        assert_eq!(names(&filter(&table, &predicate)), vec!["Apfel", "Apfel Bio"]);
    }

    #[test]
    fn test_empty_predicate_keeps_everything() {
        let table = sample_table();
        assert_eq!(filter(&table, &FilterPredicate::new()), table);
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let table = sample_table();
        let predicate = FilterPredicate::new().with_categories(["Tiefkühl"]);
        assert!(filter(&table, &predicate).is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let table = sample_table();
        let before = table.clone();
        let _ = filter(&table, &FilterPredicate::new().with_locations(["B"]));
        assert_eq!(table, before);
    }

    #[test]
    fn test_lookup_returns_all_duplicates_in_order() {
        let table = sample_table();
        assert_eq!(names(&lookup_barcode(&table, "4001")), vec!["Apfel", "Apfel Bio"]);
    }

    #[test]
    fn test_lookup_is_exact_text_match() {
        let table = InventoryTable::from_records(vec![product("Tee", "Getränke", 2.5, 7, "A", "0042")]);
        assert!(lookup_barcode(&table, "42").is_empty());
        assert!(lookup_barcode(&table, "0042 ").is_empty());
        assert_eq!(lookup_barcode(&table, "0042").len(), 1);
    }

    #[test]
    fn test_lookup_missing_barcode_is_empty() {
        assert!(lookup_barcode(&sample_table(), "9999").is_empty());
        assert!(lookup_barcode(&InventoryTable::new(), "4001").is_empty());
    }
}
