//! Typed record validation, run as a separate pass over parsed rows.
//!
//! Parsing only checks row shape. Whether a value means anything is decided
//! here: required fields, numeric coercion and range checks. Validation is
//! fail-fast; the first offending row aborts the pass and nothing is returned
//! for the rows before it.
//!
//! Bindings implement [`FromRow`]. [`ValidatedProduct`] is the built-in one
//! used by product imports.

mod product;

pub use product::ValidatedProduct;

use core::str::FromStr;

use thiserror::Error;

use crate::row::Row;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("row {row}: missing required fields: {}", .fields.join(", "))]
    MissingFields { row: usize, fields: Vec<String> },

    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
    },
}

impl ValidationError {
    /// 1-based index of the offending row
    pub fn row(&self) -> usize {
        match self {
            ValidationError::MissingFields { row, .. }
            | ValidationError::InvalidField { row, .. } => *row,
        }
    }

    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingFields { fields, .. } => {
                fields.iter().map(String::as_str).collect()
            }
            ValidationError::InvalidField { field, .. } => vec![field.as_str()],
        }
    }
}

/// A record shape that can be built from one parsed row.
pub trait FromRow: Sized {
    /// `row_number` is 1-based and goes into any error raised.
    fn from_row(row: &Row, row_number: usize) -> Result<Self, ValidationError>;
}

pub fn validate_rows<T: FromRow>(rows: &[Row]) -> Result<Vec<T>, ValidationError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| T::from_row(row, i + 1))
        .collect()
}

/// A value is present when the column exists and is not blank.
pub fn present<'r>(row: &'r Row, name: &str) -> Option<&'r str> {
    row.get(name).map(str::trim).filter(|v| !v.is_empty())
}

pub fn require_fields(
    row: &Row,
    row_number: usize,
    names: &[&str],
) -> Result<(), ValidationError> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| present(row, name).is_none())
        .map(|name| name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields {
            row: row_number,
            fields: missing,
        })
    }
}

/// Parse a present field and check it with `accept`.
pub fn parse_field<T: FromStr>(
    row: &Row,
    row_number: usize,
    name: &str,
    accept: impl Fn(&T) -> bool,
) -> Result<T, ValidationError> {
    parse_field_with(row, row_number, name, |raw| raw.parse::<T>().ok(), accept)
}

/// Like [`parse_field`] with a custom conversion; `None` means unparseable.
pub fn parse_field_with<T>(
    row: &Row,
    row_number: usize,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
    accept: impl Fn(&T) -> bool,
) -> Result<T, ValidationError> {
    let raw = present(row, name).ok_or_else(|| ValidationError::MissingFields {
        row: row_number,
        fields: vec![name.to_string()],
    })?;
    match parse(raw) {
        Some(v) if accept(&v) => Ok(v),
        _ => Err(ValidationError::InvalidField {
            row: row_number,
            field: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Integer value of the leading digits, after an optional sign: `"3.0"` and
/// `"3 units"` are 3. `None` when no digit follows the sign or on overflow.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let n = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -n } else { n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        let row: Row = [("a", "  "), ("b", "x")].into_iter().collect();
        let err = require_fields(&row, 4, &["a", "b", "c"]).unwrap_err();
        assert_eq!(err.row(), 4);
        assert_eq!(err.fields(), vec!["a", "c"]);
        assert_eq!(err.to_string(), "row 4: missing required fields: a, c");
    }

    #[test]
    fn leading_integer_stops_at_first_non_digit() {
        assert_eq!(leading_integer("3.0"), Some(3));
        assert_eq!(leading_integer("2.5"), Some(2));
        assert_eq!(leading_integer(" 12 units"), Some(12));
        assert_eq!(leading_integer("-4"), Some(-4));
        assert_eq!(leading_integer("+7"), Some(7));
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("many"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn parse_field_trims_and_checks() {
        let row: Row = [("n", " 7 ")].into_iter().collect();
        assert_eq!(parse_field::<i64>(&row, 1, "n", |v| *v > 0), Ok(7));
        assert!(parse_field::<i64>(&row, 1, "n", |v| *v > 10).is_err());
    }
}
