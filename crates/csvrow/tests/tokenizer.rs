use csvrow::{escape_value, parse_line};

#[test]
fn quoted_delimiter_stays_in_field() {
    assert_eq!(parse_line("a,\"b,c\",d", ',', true), vec!["a", "b,c", "d"]);
}

#[test]
fn doubled_quote_is_literal_quote() {
    assert_eq!(parse_line("a,\"b\"\"c\",d", ',', true), vec!["a", "b\"c", "d"]);
}

#[test]
fn trailing_delimiter_yields_empty_last_field() {
    assert_eq!(parse_line("a,b,", ',', true), vec!["a", "b", ""]);
    assert_eq!(parse_line(",", ',', true), vec!["", ""]);
}

#[test]
fn other_delimiters_ignore_commas() {
    assert_eq!(parse_line("a,b\tc", '\t', false), vec!["a,b", "c"]);
    assert_eq!(parse_line("x | \"y|z\" ", '|', true), vec!["x", "y|z"]);
}

#[test]
fn untrimmed_fields_keep_whitespace() {
    assert_eq!(parse_line(" a , b ", ',', false), vec![" a ", " b "]);
}

#[test]
fn escaped_values_tokenize_back_to_themselves() {
    let values = [
        "",
        "plain",
        " padded ",
        "a,b",
        "\"",
        "\"\"",
        "say \"hi\", then leave",
        "line\nbreak",
        "carriage\rreturn",
        "tab\tand|pipe;semi",
        "ünïcödé, ok",
        ",,,",
    ];
    for d in [',', '\t', '|', ';', ':'] {
        for v in values {
            let escaped = escape_value(v, d);
            assert_eq!(
                parse_line(&escaped, d, false),
                vec![v.to_string()],
                "value {:?} with delimiter {:?} escaped as {:?}",
                v,
                d,
                escaped
            );
        }
    }
}
