//! Splits a document into its usable lines.
//!
//! Lines are cut on `\n` (a trailing `\r` is dropped) and numbered from 1 by
//! their physical position. Empty and whitespace-only lines are skipped. A
//! leading byte-order mark is not part of the first line.

use crate::decode::tokenizer::trim_field;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
}

pub fn iter(input: &str) -> LineIter<'_> {
    LineIter {
        rest: input.strip_prefix(BOM).unwrap_or(input),
        number: 0,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let raw = match self.rest.find('\n') {
                Some(pos) => {
                    let (raw, remaining) = self.rest.split_at(pos + 1);
                    self.rest = remaining;
                    &raw[..pos]
                }
                None => core::mem::take(&mut self.rest),
            };
            self.number += 1;
            let text = raw.strip_suffix('\r').unwrap_or(raw);
            if trim_field(text).is_empty() {
                continue;
            }
            return Some(SourceLine {
                number: self.number,
                text,
            });
        }
        None
    }
}
