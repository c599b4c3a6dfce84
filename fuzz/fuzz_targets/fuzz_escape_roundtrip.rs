#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (char, String)| {
    let (delimiter, value) = input;
    if delimiter == '"' {
        return;
    }
    let escaped = csvrow::escape_value(&value, delimiter);
    let fields = csvrow::parse_line(&escaped, delimiter, false);
    if fields != [value.clone()] {
        panic!(
            "escape roundtrip mismatch!\nValue: {:?}\nDelimiter: {:?}\nEscaped: {:?}\nFields: {:?}",
            value, delimiter, escaped, fields
        );
    }
});
