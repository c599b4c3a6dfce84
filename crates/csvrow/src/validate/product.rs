#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    FromRow, ValidationError, leading_integer, parse_field, parse_field_with, present,
    require_fields,
};
use crate::row::Row;

const REQUIRED: [&str; 3] = ["name", "price", "stock"];

/// A product row that passed validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidatedProduct {
    pub name: String,
    pub price: f64,
    pub stock: u64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
}

impl FromRow for ValidatedProduct {
    fn from_row(row: &Row, row_number: usize) -> Result<Self, ValidationError> {
        require_fields(row, row_number, &REQUIRED)?;

        let price = parse_field::<f64>(row, row_number, "price", |p| {
            p.is_finite() && *p >= 0.0
        })?;
        // Only the leading integer counts, so "3.0" is 3 and "2.5" is 2.
        let stock = parse_field_with(
            row,
            row_number,
            "stock",
            |raw| leading_integer(raw).and_then(|n| u64::try_from(n).ok()),
            |_| true,
        )?;

        Ok(ValidatedProduct {
            name: present(row, "name").unwrap_or_default().to_string(),
            price,
            stock,
            description: present(row, "description").map(str::to_string),
            category: present(row, "category").map(str::to_string),
        })
    }
}
