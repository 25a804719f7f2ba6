// Inventory command line entry point
use anyhow::Context;
use clap::{Parser, Subcommand};
use engine::config::InventorySettings;
use engine::reports::{average_price_by_category, stock_by_product};
use engine::{filter, lookup_barcode, FilterOptions, InventoryError, InventoryStore};
use serde::Serialize;
use shared::models::{InventoryTable, NewProduct, DEFAULT_CATEGORY, DEFAULT_LOCATION};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Barcode & inventory management on a CSV file", long_about = None)]
struct Cli {
    /// Settings JSON (candidate files, delimiter, cache TTL). Embedded defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Inventory CSV. When omitted the first existing candidate file in the current directory is used.
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered. Repeat --category / --location to allow several values.
    List {
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long = "location")]
        locations: Vec<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
    },
    /// Find products by exact barcode
    Find { barcode: String },
    /// Append a product and save the file
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        stock: i64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        price: f64,
        #[arg(long, default_value = "")]
        barcode: String,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Show the available categories, locations and price bounds
    Options,
    /// Stock per product and average price per category
    Summary,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => InventorySettings::from_json_file(path)?,
        None => InventorySettings::load_default()?,
    };
    let source = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            settings.resolve_source(&cwd)
        }
    };
    info!(path = %source.display(), "Using inventory file");

    let mut store = InventoryStore::from_settings(&settings)?;
    let mut table = store.load(&source)?;

    match cli.command {
        Commands::List {
            categories,
            locations,
            min_price,
            max_price,
        } => {
            let bounds = FilterOptions::from_table(&table).price_bounds;
            let mut predicate = engine::FilterPredicate::new()
                .with_categories(categories)
                .with_locations(locations);
            if min_price.is_some() || max_price.is_some() {
                predicate = predicate.with_price_range(
                    min_price.unwrap_or(bounds.min),
                    max_price.unwrap_or(bounds.max),
                );
            }
            let filtered = filter(&table, &predicate);
            if filtered.is_empty() && !cli.json {
                println!("No products match the selected filters.");
            } else {
                emit(&filtered, cli.json, print_table)?;
            }
        }
        Commands::Find { barcode } => {
            let found = lookup_barcode(&table, &barcode);
            if found.is_empty() && !cli.json {
                println!("No product with barcode '{}'.", barcode);
            } else {
                emit(&found, cli.json, print_table)?;
            }
        }
        Commands::Add {
            name,
            category,
            stock,
            price,
            barcode,
            location,
        } => {
            if stock < 0 || price < 0.0 {
                warn!(stock, price, "Negative values are stored as 0");
            }
            let product = NewProduct {
                name: name.clone(),
                category,
                stock,
                price,
                barcode,
                location,
            };
            match store.append(&source, &mut table, product) {
                Ok(()) => println!("Product '{}' added and saved ({} products).", name, table.len()),
                Err(e @ InventoryError::PersistenceFailure { .. }) => {
                    error!("Product '{}' is only held in memory: {}", name, e);
                    return Err(e.into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Options => {
            let options = FilterOptions::from_table(&table);
            emit(&options, cli.json, |o| {
                println!("Categories: {}", o.categories.join(", "));
                println!("Locations:  {}", o.locations.join(", "));
                println!("Price:      {:.2} – {:.2}", o.price_bounds.min, o.price_bounds.max);
            })?;
        }
        Commands::Summary => {
            let stock = stock_by_product(&table);
            let prices = average_price_by_category(&table);
            emit(&(&stock, &prices), cli.json, |(stock, prices)| {
                println!("Stock per product:");
                for level in stock.iter() {
                    println!("  {:<30} {:<20} {:>8}", level.name, level.category, level.stock);
                }
                println!("Average price per category:");
                for entry in prices.iter() {
                    println!("  {:<20} {:>8.2} ({} products)", entry.category, entry.average_price, entry.products);
                }
            })?;
        }
    }

    Ok(())
}

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_table(table: &InventoryTable) {
    let mut header = format!(
        "{:<30} {:<20} {:>8} {:>10} {:<15} {:<15}",
        "name", "category", "stock", "price", "barcode", "location"
    );
    for extra in &table.extra_columns {
        header.push_str(&format!(" {:<15}", extra));
    }
    println!("{}", header);

    for r in table {
        let mut line = format!(
            "{:<30} {:<20} {:>8} {:>10.2} {:<15} {:<15}",
            r.name, r.category, r.stock, r.price, r.barcode, r.location
        );
        for extra in &table.extra_columns {
            let value = r.extras.get(extra).map(String::as_str).unwrap_or("");
            line.push_str(&format!(" {:<15}", value));
        }
        println!("{}", line);
    }
}
