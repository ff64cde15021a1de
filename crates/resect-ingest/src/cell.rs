//! Dynamically typed cell values.
//!
//! Delimited-text exports arrive untyped. Cells that look like numbers or
//! booleans are promoted so downstream code sees `4.5` rather than `"4.5"`,
//! and blank cells become [`CellValue::Null`].

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Type a raw cell. Blank input is always `Null`; promotion to numbers and
    /// booleans only happens with `dynamic_typing`.
    pub fn parse(raw: &str, dynamic_typing: bool) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if dynamic_typing {
            if trimmed.eq_ignore_ascii_case("true") {
                return CellValue::Bool(true);
            }
            if trimmed.eq_ignore_ascii_case("false") {
                return CellValue::Bool(false);
            }
            if let Some(number) = parse_number(trimmed) {
                return CellValue::Number(number);
            }
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn is_populated(&self) -> bool {
        !matches!(self, CellValue::Null)
    }

    /// Empty, `false`, and zero are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(value) => *value,
            CellValue::Number(value) => *value != 0.0,
            CellValue::Text(value) => !value.is_empty(),
        }
    }

    /// String form of the cell; `Null` renders as an empty string.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(value) => value.to_string(),
            CellValue::Number(value) => format_numeric(*value),
            CellValue::Text(value) => value.clone(),
        }
    }
}

/// Formats a number without a trailing `.0` (`3.0` becomes `"3"`).
pub fn format_numeric(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{value}")
}

/// Accepts plain decimal notation with an optional exponent. Words such as
/// `inf` or `NaN` that `f64::from_str` would accept stay text.
fn parse_number(value: &str) -> Option<f64> {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in mantissa.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }
    if let Some(exponent) = exponent {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent.is_empty() || !exponent.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
    }
    value.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// One data row keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a cell; a repeated header keeps the last value.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Text of a column. Absent and falsy cells (blank, `false`, zero) read as empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column)
            .filter(|cell| cell.is_truthy())
            .map(CellValue::to_text)
            .unwrap_or_default()
    }

    pub fn populated_count(&self) -> usize {
        self.cells.values().filter(|cell| cell.is_populated()).count()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}
