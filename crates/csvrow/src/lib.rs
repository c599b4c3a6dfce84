#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod row;
pub mod validate;

pub use crate::decode::parser::{MalformedRow, Table};
pub use crate::encode::Record;
pub use crate::error::{Error, Result};
pub use crate::options::{Delimiter, Options};
pub use crate::row::Row;
pub use crate::validate::{FromRow, ValidatedProduct, ValidationError};

use std::borrow::Cow;
use std::io::{Read, Write};

#[cfg(feature = "json")]
use serde::Serialize;

/// Tokenize a single line into fields.
pub fn parse_line(line: &str, delimiter: char, trim: bool) -> Vec<String> {
    crate::decode::tokenizer::tokenize(line, delimiter, trim)
}

/// Parse a whole document into rows. Lines whose field count does not match
/// the header are skipped and logged; use [`parse_table`] to inspect them.
pub fn parse_str(s: &str, options: &Options) -> Result<Vec<Row>> {
    Ok(parse_table(s, options)?.into_rows())
}

pub fn parse_table(s: &str, options: &Options) -> Result<Table> {
    crate::decode::parser::parse_to_table(s, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Vec<Row>> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_str(&s, options)
}

/// Quote `value` for output if it contains the delimiter, a quote or a line break.
pub fn escape_value(value: &str, delimiter: char) -> Cow<'_, str> {
    crate::encode::primitives::format_field(value, delimiter)
}

pub fn to_string<R: Record>(rows: &[R], options: &Options) -> Result<String> {
    options.check()?;
    Ok(crate::encode::encode_rows(rows, options))
}

pub fn encode_to_writer<W: Write, R: Record>(
    mut writer: W,
    rows: &[R],
    options: &Options,
) -> Result<()> {
    let s = to_string(rows, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
pub fn encode_records<T: Serialize>(records: &[T], options: &Options) -> Result<String> {
    crate::encode::records::encode_records(records, options)
}

pub fn validate_products(
    rows: &[Row],
) -> core::result::Result<Vec<ValidatedProduct>, ValidationError> {
    crate::validate::validate_rows(rows)
}
