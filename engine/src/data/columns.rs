// Header normalization: maps arbitrary (German or English) column names onto the canonical schema.
use csv::StringRecord;
use shared::models::CanonicalField;
use shared::utils::title_case;

// Lower-cased, trimmed synonym -> canonical field.
const SYNONYMS: &[(&str, CanonicalField)] = &[
    ("name", CanonicalField::Name),
    ("product", CanonicalField::Name),
    ("productname", CanonicalField::Name),
    ("produkt", CanonicalField::Name),
    ("produktname", CanonicalField::Name),
    ("category", CanonicalField::Category),
    ("cat", CanonicalField::Category),
    ("kategorie", CanonicalField::Category),
    ("stock", CanonicalField::Stock),
    ("quantity", CanonicalField::Stock),
    ("menge", CanonicalField::Stock),
    ("bestand", CanonicalField::Stock),
    ("price", CanonicalField::Price),
    ("preis", CanonicalField::Price),
    ("barcode", CanonicalField::Barcode),
    ("ean", CanonicalField::Barcode),
    ("code", CanonicalField::Barcode),
    ("location", CanonicalField::Location),
    ("store", CanonicalField::Location),
    ("filiale", CanonicalField::Location),
    ("standort", CanonicalField::Location),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTarget {
    Canonical(CanonicalField),
    Extra(String),
}

pub fn canonical_field(header: &str) -> Option<CanonicalField> {
    let key = header.trim_start_matches('\u{feff}').trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|(_, field)| *field)
}

pub fn normalize_header(header: &str) -> ColumnTarget {
    match canonical_field(header) {
        Some(field) => ColumnTarget::Canonical(field),
        None => ColumnTarget::Extra(title_case(header.trim_start_matches('\u{feff}'))),
    }
}

/// Resolved position of every canonical field and extra column in a source header row.
///
/// When two source columns land on the same name, the first one wins and the
/// later one is dropped.
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    canonical: [Option<usize>; 6],
    extras: Vec<(usize, String)>,
}

impl ColumnMapping {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut mapping = ColumnMapping::default();

        for (idx, header) in headers.iter().enumerate() {
            match normalize_header(header) {
                ColumnTarget::Canonical(field) => {
                    let slot = &mut mapping.canonical[Self::slot(field)];
                    if slot.is_some() {
                        tracing::warn!(header, field = field.header(), "Duplicate column for canonical field, ignoring");
                    } else {
                        *slot = Some(idx);
                    }
                }
                ColumnTarget::Extra(name) if name.is_empty() => {
                    tracing::debug!(column = idx, "Dropping column with blank header");
                }
                ColumnTarget::Extra(name) => {
                    if mapping.extras.iter().any(|(_, existing)| *existing == name) {
                        tracing::warn!(header, "Duplicate extra column, ignoring");
                    } else {
                        mapping.extras.push((idx, name));
                    }
                }
            }
        }

        mapping
    }

    pub fn position(&self, field: CanonicalField) -> Option<usize> {
        self.canonical[Self::slot(field)]
    }

    /// Canonical fields the source did not provide; they get backfilled with defaults.
    pub fn missing_fields(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| self.position(*field).is_none())
            .collect()
    }

    pub fn extras(&self) -> &[(usize, String)] {
        &self.extras
    }

    pub fn extra_names(&self) -> Vec<String> {
        self.extras.iter().map(|(_, name)| name.clone()).collect()
    }

    fn slot(field: CanonicalField) -> usize {
        match field {
            CanonicalField::Name => 0,
            CanonicalField::Category => 1,
            CanonicalField::Stock => 2,
            CanonicalField::Price => 3,
            CanonicalField::Barcode => 4,
            CanonicalField::Location => 5,
        }
    }
}
