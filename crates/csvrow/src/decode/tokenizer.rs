//! Single-line field tokenizer.
//!
//! Each line is scanned once, left to right, by a two-state machine. A quote
//! opens a quoted section; inside it a doubled quote is a literal quote and
//! the delimiter is plain content. Lines are independent: a quoted section
//! still open at the end of the line is closed with whatever it holds, so
//! fields spanning a line break are not supported.

use crate::options::QUOTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub fields: Vec<String>,
    /// The line ended inside a quoted section
    pub unterminated: bool,
}

/// Split one line into fields. A zero-length line yields one empty field.
pub fn tokenize(line: &str, delimiter: char, trim: bool) -> Vec<String> {
    tokenize_line(line, delimiter, trim).fields
}

pub fn tokenize_line(line: &str, delimiter: char, trim: bool) -> Tokenized {
    let mut fields = Vec::new();
    let mut buf = String::with_capacity(line.len());
    let mut state = State::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        state = match (state, ch) {
            (State::Quoted, QUOTE) if chars.peek() == Some(&QUOTE) => {
                chars.next();
                buf.push(QUOTE);
                State::Quoted
            }
            (State::Quoted, QUOTE) => State::Unquoted,
            (State::Unquoted, QUOTE) => State::Quoted,
            (State::Unquoted, c) if c == delimiter => {
                fields.push(flush(&mut buf, trim));
                State::Unquoted
            }
            (s, c) => {
                buf.push(c);
                s
            }
        };
    }
    fields.push(flush(&mut buf, trim));

    Tokenized {
        fields,
        unterminated: state == State::Quoted,
    }
}

/// Strip surrounding whitespace, counting a stray byte-order mark as whitespace.
pub(crate) fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// Trimming happens after unquoting, so quoted padding is trimmed too.
fn flush(buf: &mut String, trim: bool) -> String {
    let field = std::mem::take(buf);
    if trim {
        let t = trim_field(&field);
        if t.len() == field.len() {
            field
        } else {
            t.to_string()
        }
    } else {
        field
    }
}
