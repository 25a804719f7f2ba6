use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{clamp_price, clamp_stock, text_or_default};

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_LOCATION: &str = "MainWarehouse";

/// The six attributes every inventory record is normalized to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Name,
    Category,
    Stock,
    Price,
    Barcode,
    Location,
}

impl CanonicalField {
    /// Canonical column order, also used for the header row when writing.
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Name,
        CanonicalField::Category,
        CanonicalField::Stock,
        CanonicalField::Price,
        CanonicalField::Barcode,
        CanonicalField::Location,
    ];

    pub fn header(self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::Category => "category",
            CanonicalField::Stock => "stock",
            CanonicalField::Price => "price",
            CanonicalField::Barcode => "barcode",
            CanonicalField::Location => "location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    pub stock: u64,
    pub price: f64,
    pub barcode: String, // Compared as text, never as a number
    pub location: String,
    // Non-canonical columns from the source file, keyed by their title-cased header.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl Default for ProductRecord {
    fn default() -> Self {
        ProductRecord {
            name: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            stock: 0,
            price: 0.0,
            barcode: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            extras: BTreeMap::new(),
        }
    }
}

/// Field values as entered by a user for a product that is about to be appended.
///
/// Numbers are signed on purpose: input widgets are expected to reject negatives,
/// but anything that slips through is clamped to zero by [`NewProduct::into_record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub barcode: String,
    pub location: String,
}

impl Default for NewProduct {
    fn default() -> Self {
        NewProduct {
            name: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            stock: 1,
            price: 0.0,
            barcode: String::new(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl NewProduct {
    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            name: text_or_default(Some(&self.name), "").value,
            category: text_or_default(Some(&self.category), DEFAULT_CATEGORY).value,
            stock: clamp_stock(self.stock),
            price: clamp_price(self.price),
            barcode: text_or_default(Some(&self.barcode), "").value,
            location: text_or_default(Some(&self.location), DEFAULT_LOCATION).value,
            extras: BTreeMap::new(),
        }
    }
}

/// Ordered inventory lines. Insertion order is kept and duplicates are allowed.
///
/// The canonical columns always exist; `extra_columns` lists any additional
/// columns the source carried, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryTable {
    pub extra_columns: Vec<String>,
    pub records: Vec<ProductRecord>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        InventoryTable {
            extra_columns: Vec::new(),
            records,
        }
    }

    /// Canonical headers followed by the extra columns.
    pub fn columns(&self) -> Vec<String> {
        CanonicalField::ALL
            .iter()
            .map(|field| field.header().to_string())
            .chain(self.extra_columns.iter().cloned())
            .collect()
    }

    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&ProductRecord> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a InventoryTable {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
