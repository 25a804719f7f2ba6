// Aggregates behind the dashboard charts (stock per product, mean price per category)
pub mod category_prices;
pub mod stock_levels;

pub use category_prices::{average_price_by_category, CategoryPrice};
pub use stock_levels::{stock_by_product, StockLevel};
