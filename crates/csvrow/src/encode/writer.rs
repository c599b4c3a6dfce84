use crate::encode::primitives;

/// Accumulates delimited lines. Lines are separated by `\n`; the last one has
/// no terminator.
pub struct LineWriter {
    out: String,
    delimiter: char,
    at_line_start: bool,
    lines: usize,
}

impl LineWriter {
    pub fn new(delimiter: char) -> Self {
        Self {
            out: String::new(),
            delimiter,
            at_line_start: true,
            lines: 0,
        }
    }

    pub fn field(&mut self, value: &str) {
        if self.at_line_start {
            if self.lines > 0 {
                self.out.push('\n');
            }
            self.lines += 1;
            self.at_line_start = false;
        } else {
            self.out.push(self.delimiter);
        }
        if primitives::needs_quotes(value, self.delimiter) {
            primitives::escape_and_quote_into(&mut self.out, value);
        } else {
            self.out.push_str(value);
        }
    }

    pub fn end_line(&mut self) {
        // A line with no fields still occupies a line.
        if self.at_line_start {
            self.field("");
        }
        self.at_line_start = true;
    }

    pub fn line<'v, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'v str>,
    {
        for v in values {
            self.field(v);
        }
        self.end_line();
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
