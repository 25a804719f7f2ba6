use serde::Serialize;
use shared::models::InventoryTable;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPrice {
    pub category: String,
    pub average_price: f64,
    pub products: usize,
}

/// Mean price per category, ordered by category name.
pub fn average_price_by_category(table: &InventoryTable) -> Vec<CategoryPrice> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in table {
        let entry = totals.entry(record.category.as_str()).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(category, (sum, count))| CategoryPrice {
            category: category.to_string(),
            average_price: sum / count as f64,
            products: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ProductRecord;

    fn priced(category: &str, price: f64) -> ProductRecord {
        ProductRecord {
            category: category.to_string(),
            price,
            ..ProductRecord::default()
        }
    }

    #[test]
    fn test_average_per_category() {
        let table = InventoryTable::from_records(vec![
            priced("Obst", 1.0),
            priced("Milchprodukte", 1.49),
            priced("Obst", 2.0),
        ]);
        let averages = average_price_by_category(&table);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].category, "Milchprodukte");
        assert_eq!(averages[0].average_price, 1.49);
        assert_eq!(averages[1].category, "Obst");
        assert_eq!(averages[1].average_price, 1.5);
        assert_eq!(averages[1].products, 2);
    }

    #[test]
    fn test_empty_table() {
        assert!(average_price_by_category(&InventoryTable::new()).is_empty());
    }
}
