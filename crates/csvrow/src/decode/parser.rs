use core::fmt;

use tracing::{debug, warn};

use crate::Result;
use crate::decode::scanner::{self, LineIter, SourceLine};
use crate::decode::tokenizer::tokenize_line;
use crate::options::Options;
use crate::row::{Row, positional_headers};

/// A data line dropped because its field count did not match the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based physical line number in the document
    pub line: usize,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} has {} fields but the header has {}",
            self.line, self.actual, self.expected
        )
    }
}

/// Everything one parse produced: the resolved header, the accepted rows in
/// document order, and the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub skipped: Vec<MalformedRow>,
}

impl Table {
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    fn push(&mut self, line: usize, fields: Vec<String>) {
        if fields.len() != self.headers.len() {
            let bad = MalformedRow {
                line,
                expected: self.headers.len(),
                actual: fields.len(),
            };
            warn!(
                line = bad.line,
                expected = bad.expected,
                actual = bad.actual,
                "skipping row with mismatched field count"
            );
            self.skipped.push(bad);
            return;
        }
        self.rows.push(Row::from_columns(&self.headers, fields));
    }
}

pub struct Parser<'a> {
    lines: LineIter<'a>,
    delimiter: char,
    has_headers: bool,
    trim: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &Options) -> Result<Self> {
        options.check()?;
        Ok(Self {
            lines: scanner::iter(input),
            delimiter: options.delimiter.as_char(),
            has_headers: options.has_headers,
            trim: options.trim,
        })
    }

    fn fields(&self, line: SourceLine<'_>) -> Vec<String> {
        let t = tokenize_line(line.text, self.delimiter, self.trim);
        if t.unterminated {
            debug!(
                line = line.number,
                "unterminated quoted field closed at end of line"
            );
        }
        t.fields
    }

    pub fn parse(mut self) -> Table {
        let mut table = Table::default();
        let Some(first) = self.lines.next() else {
            return table;
        };

        let first_fields = self.fields(first);
        if self.has_headers {
            table.headers = first_fields;
        } else {
            table.headers = positional_headers(first_fields.len());
            table.push(first.number, first_fields);
        }

        while let Some(line) = self.lines.next() {
            table.push(line.number, self.fields(line));
        }

        debug!(
            rows = table.rows.len(),
            skipped = table.skipped.len(),
            "parsed table"
        );
        table
    }
}

pub fn parse_to_table(input: &str, options: &Options) -> Result<Table> {
    Ok(Parser::new(input, options)?.parse())
}
