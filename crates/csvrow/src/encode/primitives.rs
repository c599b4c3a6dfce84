use std::borrow::Cow;

use crate::options::QUOTE;

/// A field must be quoted when it holds the delimiter, a quote or a line break.
pub fn needs_quotes(s: &str, delimiter: char) -> bool {
    s.chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\n' || c == '\r')
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s);
    out
}

pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.push(QUOTE);
    for ch in s.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
}

/// Emit `s` verbatim, or quoted with inner quotes doubled when required.
pub fn format_field(s: &str, delimiter: char) -> Cow<'_, str> {
    if needs_quotes(s, delimiter) {
        Cow::Owned(escape_and_quote(s))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert!(matches!(format_field("abc", ','), Cow::Borrowed("abc")));
        assert_eq!(format_field("", ','), "");
        assert_eq!(format_field("a;b", ','), "a;b");
    }

    #[test]
    fn special_values_are_quoted() {
        assert_eq!(format_field("a,b", ','), "\"a,b\"");
        assert_eq!(format_field("a;b", ';'), "\"a;b\"");
        assert_eq!(format_field("say \"hi\"", ','), "\"say \"\"hi\"\"\"");
        assert_eq!(format_field("x\ny", ','), "\"x\ny\"");
    }
}
