#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The quote character. Fixed; only the delimiter is configurable.
pub const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    /// Any other single character
    Other(char),
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
            Delimiter::Other(c) => c,
        }
    }

    /// A delimiter is usable when it cannot be confused with quoting or line breaks.
    pub fn is_usable(self) -> bool {
        !matches!(self.as_char(), QUOTE | '\n' | '\r')
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            '\t' => Delimiter::Tab,
            '|' => Delimiter::Pipe,
            ';' => Delimiter::Semicolon,
            other => Delimiter::Other(other),
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub delimiter: Delimiter,
    /// Treat the first usable line as the header (parse only)
    pub has_headers: bool,
    /// Strip surrounding whitespace from every field after unquoting (parse only)
    pub trim: bool,
    /// Emit a header line derived from the first row (serialize only)
    pub include_headers: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            has_headers: true,
            trim: true,
            include_headers: true,
        }
    }
}

impl Options {
    pub fn with_delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_include_headers(mut self, include_headers: bool) -> Self {
        self.include_headers = include_headers;
        self
    }

    pub fn check(&self) -> Result<()> {
        if self.delimiter.is_usable() {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "delimiter {:?} cannot be the quote character or a line break",
                self.delimiter.as_char()
            )))
        }
    }
}
