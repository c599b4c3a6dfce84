#![no_main]
use libfuzzer_sys::fuzz_target;
use csvrow::Options;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for has_headers in [true, false] {
            let opts = Options::default().with_headers(has_headers);
            let table = csvrow::parse_table(input, &opts).unwrap();
            for row in &table.rows {
                if row.len() != table.headers.len() {
                    panic!(
                        "row width {} does not match header width {}\nInput: {:?}",
                        row.len(),
                        table.headers.len(),
                        input
                    );
                }
            }
            let _ = csvrow::validate_products(&table.rows);
        }
    }
});
