use serde::Serialize;
use shared::models::InventoryTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLevel {
    pub name: String,
    pub category: String,
    pub stock: u64,
}

/// One entry per record, highest stock first. Ties keep table order.
pub fn stock_by_product(table: &InventoryTable) -> Vec<StockLevel> {
    let mut levels: Vec<StockLevel> = table
        .iter()
        .map(|r| StockLevel {
            name: r.name.clone(),
            category: r.category.clone(),
            stock: r.stock,
        })
        .collect();
    levels.sort_by(|a, b| b.stock.cmp(&a.stock));
    levels
}
