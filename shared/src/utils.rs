// Parse-with-default helpers used when coercing spreadsheet cells into typed fields.
// Every helper returns the value together with a flag telling whether it was substituted,
// so a genuine 0 can be told apart from a coerced one.

/// A typed value plus whether it came from a fallback rather than the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Coerced<T> {
    pub fn parsed(value: T) -> Self {
        Coerced { value, defaulted: false }
    }

    pub fn defaulted(value: T) -> Self {
        Coerced { value, defaulted: true }
    }
}

/// Parses a stock count. Integers are taken as-is, decimal notation ("12.0", "3.7")
/// is truncated, and empty, non-numeric or negative input becomes 0.
pub fn parse_stock(raw: Option<&str>) -> Coerced<u64> {
    let s = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Coerced::defaulted(0),
    };

    if let Ok(n) = s.parse::<i64>() {
        return if n < 0 {
            Coerced::defaulted(0)
        } else {
            Coerced::parsed(n as u64)
        };
    }

    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Coerced::parsed(f.trunc() as u64),
        _ => Coerced::defaulted(0),
    }
}

/// Parses a price. Empty, non-numeric, non-finite or negative input becomes 0.0.
pub fn parse_price(raw: Option<&str>) -> Coerced<f64> {
    let s = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Coerced::defaulted(0.0),
    };

    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Coerced::parsed(f),
        _ => Coerced::defaulted(0.0),
    }
}

/// Keeps a text cell unless it is missing or blank, in which case `default` is used.
pub fn text_or_default(raw: Option<&str>, default: &str) -> Coerced<String> {
    match raw {
        Some(s) if !s.trim().is_empty() => Coerced::parsed(s.to_string()),
        _ => Coerced::defaulted(default.to_string()),
    }
}

pub fn clamp_stock(n: i64) -> u64 {
    n.max(0) as u64
}

pub fn clamp_price(p: f64) -> f64 {
    if p.is_finite() && p > 0.0 {
        p
    } else {
        0.0
    }
}

/// "  supplier NOTES " -> "Supplier notes"
pub fn title_case(header: &str) -> String {
    let mut chars = header.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
