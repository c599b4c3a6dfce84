//! Encoding pipeline: row records → escaped, delimited text

pub mod primitives;
#[cfg(feature = "json")]
pub mod records;
pub mod writer;

use std::borrow::Cow;

use crate::{options::Options, row::Row};

/// An ordered name → value mapping the serializer can emit.
pub trait Record {
    /// Column names in output order.
    fn column_names(&self) -> Vec<&str>;

    /// The value for column `index` named `name`, or `None` when the record
    /// has no such column.
    fn field(&self, index: usize, name: &str) -> Option<Cow<'_, str>>;
}

impl Record for Row {
    fn column_names(&self) -> Vec<&str> {
        self.keys().collect()
    }

    fn field(&self, index: usize, name: &str) -> Option<Cow<'_, str>> {
        // Positional match first so repeated header names keep their own values.
        match self.get_index(index) {
            Some((k, v)) if k == name => Some(Cow::Borrowed(v)),
            _ => self.get(name).map(Cow::Borrowed),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn column_names(&self) -> Vec<&str> {
        (**self).column_names()
    }

    fn field(&self, index: usize, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(index, name)
    }
}

/// Serialize records into one document.
///
/// The header comes from the first record's column order; later records are
/// looked up by those names and missing values become empty fields.
pub fn encode_rows<R: Record>(rows: &[R], options: &Options) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<String> = first
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let mut w = writer::LineWriter::new(options.delimiter.as_char());

    if options.include_headers {
        w.line(headers.iter().map(String::as_str));
    }
    for row in rows {
        for (i, name) in headers.iter().enumerate() {
            let value = row.field(i, name);
            w.field(value.as_deref().unwrap_or(""));
        }
        w.end_line();
    }
    w.into_string()
}
