use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use shared::models::{
    CanonicalField, InventoryTable, ProductRecord, DEFAULT_CATEGORY, DEFAULT_LOCATION,
};
use shared::utils::{parse_price, parse_stock, text_or_default};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tempfile::NamedTempFile;

use super::columns::ColumnMapping;
use crate::error::InventoryError;

/// Reads and writes inventory CSV files.
///
/// Headers are normalized through [`ColumnMapping`], short or long rows are tolerated
/// and bad cells fall back to field defaults. Only an unreadable source is an error.
#[derive(Debug, Clone, Copy)]
pub struct InventoryCsvParser {
    delimiter: u8,
}

impl Default for InventoryCsvParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

// Row shape on disk: canonical headers only, in canonical order.
#[derive(Serialize)]
struct CanonicalRow<'a> {
    name: &'a str,
    category: &'a str,
    stock: u64,
    price: f64,
    barcode: &'a str,
    location: &'a str,
}

impl<'a> From<&'a ProductRecord> for CanonicalRow<'a> {
    fn from(record: &'a ProductRecord) -> Self {
        CanonicalRow {
            name: &record.name,
            category: &record.category,
            stock: record.stock,
            price: record.price,
            barcode: &record.barcode,
            location: &record.location,
        }
    }
}

impl InventoryCsvParser {
    pub fn new(delimiter: u8) -> Self {
        InventoryCsvParser { delimiter }
    }

    /// Loads and normalizes the inventory at `path`.
    ///
    /// A file that does not exist yields an empty table with the canonical schema.
    pub fn load_table(&self, path: &Path) -> Result<InventoryTable, InventoryError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Inventory file not found, starting with an empty table");
                return Ok(InventoryTable::new());
            }
            Err(e) => return Err(InventoryError::unreadable(path, e)),
        };

        self.load_from_reader(BufReader::new(file))
            .map_err(|e| InventoryError::unreadable(path, e))
    }

    /// Normalizes CSV content from any reader. Errors are raw CSV errors (I/O, invalid UTF-8);
    /// [`load_table`](Self::load_table) attaches the source path.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<InventoryTable, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mapping = ColumnMapping::from_headers(&headers);
        let missing = mapping.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "Backfilling canonical columns with defaults");
        }

        let mut table = InventoryTable {
            extra_columns: mapping.extra_names(),
            records: Vec::new(),
        };
        let mut anomalies = 0usize;

        for result in rdr.records() {
            let record = result?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let (product, defaulted) = Self::normalize_record(&record, &mapping);
            anomalies += defaulted;
            table.push(product);
        }

        tracing::debug!(records = table.len(), defaulted_cells = anomalies, "Normalized inventory rows");
        Ok(table)
    }

    /// Builds one record; also returns how many present cells had to be replaced by defaults.
    fn normalize_record(record: &StringRecord, mapping: &ColumnMapping) -> (ProductRecord, usize) {
        let cell = |field: CanonicalField| mapping.position(field).and_then(|pos| record.get(pos));
        let stock_cell = cell(CanonicalField::Stock);
        let price_cell = cell(CanonicalField::Price);
        let stock = parse_stock(stock_cell);
        let price = parse_price(price_cell);

        // Blank cells are expected; only count values that were there but unusable.
        let anomalies = [(stock_cell, stock.defaulted), (price_cell, price.defaulted)]
            .iter()
            .filter(|(raw, defaulted)| *defaulted && raw.is_some_and(|s| !s.trim().is_empty()))
            .count();

        let extras: BTreeMap<String, String> = mapping
            .extras()
            .iter()
            .map(|(pos, name)| (name.clone(), record.get(*pos).unwrap_or_default().to_string()))
            .collect();

        let product = ProductRecord {
            name: text_or_default(cell(CanonicalField::Name), "").value,
            category: text_or_default(cell(CanonicalField::Category), DEFAULT_CATEGORY).value,
            stock: stock.value,
            price: price.value,
            barcode: text_or_default(cell(CanonicalField::Barcode), "").value,
            location: text_or_default(cell(CanonicalField::Location), DEFAULT_LOCATION).value,
            extras,
        };
        (product, anomalies)
    }

    /// Rewrites `path` in full with the canonical columns of `table`. Extra columns are not written.
    ///
    /// Rows go to a temporary file next to `path` which then replaces it, so a failed
    /// write leaves the previous file untouched.
    pub fn write_table(&self, path: &Path, table: &InventoryTable) -> Result<(), InventoryError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| InventoryError::persistence(path, e))?;

        self.write_to_writer(&mut tmp, table)
            .map_err(|e| InventoryError::persistence(path, e))?;
        // Keep the permissions of the file being replaced.
        if let Ok(meta) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| InventoryError::persistence(path, e))?;
        }
        tmp.persist(path)
            .map_err(|e| InventoryError::persistence(path, e.error))?;
        Ok(())
    }

    pub fn write_to_writer<W: io::Write>(&self, writer: W, table: &InventoryTable) -> Result<(), csv::Error> {
        let mut wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(CanonicalField::ALL.iter().map(|field| field.header()))?;
        for record in table {
            wtr.serialize(CanonicalRow::from(record))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
