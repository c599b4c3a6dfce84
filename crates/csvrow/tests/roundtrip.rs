use csvrow::{Options, Row};

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().copied().collect()
}

#[test]
fn serialize_then_parse_preserves_rows() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![
        row(&[("sku", "A-1"), ("name", "Lamp"), ("price", "12.50")]),
        row(&[("sku", "B-2"), ("name", "Desk"), ("price", "80")]),
        row(&[("sku", "C-3"), ("name", "Chair"), ("price", "45.99")]),
    ];
    let options = Options::default();

    let encoded = csvrow::to_string(&rows, &options)?;
    let decoded = csvrow::parse_str(&encoded, &options)?;

    assert_eq!(rows, decoded);
    Ok(())
}

#[test]
fn roundtrip_with_special_characters_and_tabs() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![
        row(&[("title", "a, b and \"c\""), ("note", "tab\there")]),
        row(&[("title", "plain"), ("note", "")]),
    ];
    for options in [
        Options::default().with_trim(false),
        Options::default().with_delimiter('\t').with_trim(false),
    ] {
        let encoded = csvrow::to_string(&rows, &options)?;
        assert_eq!(csvrow::parse_str(&encoded, &options)?, rows);
    }
    Ok(())
}

#[test]
fn empty_input_serializes_to_empty_string() -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<Row> = Vec::new();
    assert_eq!(csvrow::to_string(&rows, &Options::default())?, "");
    let no_headers = Options::default().with_include_headers(false);
    assert_eq!(csvrow::to_string(&rows, &no_headers)?, "");
    Ok(())
}

#[test]
fn header_comes_from_first_row_only() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![
        row(&[("a", "1"), ("b", "2")]),
        row(&[("b", "4"), ("c", "9")]),
    ];
    let s = csvrow::to_string(&rows, &Options::default())?;
    assert_eq!(s, "a,b\n1,2\n,4");
    Ok(())
}

#[test]
fn header_names_are_escaped_and_parse_back() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![row(&[("size, cm", "40"), ("the \"best\" pick", "yes")])];
    let options = Options::default();

    let s = csvrow::to_string(&rows, &options)?;
    assert_eq!(s, "\"size, cm\",\"the \"\"best\"\" pick\"\n40,yes");

    let table = csvrow::parse_table(&s, &options)?;
    assert_eq!(table.headers, vec!["size, cm", "the \"best\" pick"]);
    assert_eq!(table.rows, rows);
    Ok(())
}

#[test]
fn headers_can_be_omitted() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![row(&[("a", "x,y")])];
    let s = csvrow::to_string(&rows, &Options::default().with_include_headers(false))?;
    assert_eq!(s, "\"x,y\"");
    Ok(())
}

#[test]
fn duplicate_columns_serialize_positionally() -> Result<(), Box<dyn std::error::Error>> {
    let rows = csvrow::parse_str("a,a\n1,2", &Options::default())?;
    assert_eq!(csvrow::to_string(&rows, &Options::default())?, "a,a\n1,2");
    Ok(())
}

#[test]
fn writer_front_end() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![row(&[("k", "v")])];
    let mut out = Vec::new();
    csvrow::encode_to_writer(&mut out, &rows, &Options::default())?;
    assert_eq!(String::from_utf8(out)?, "k\nv");
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn serializable_records_encode_through_json() -> Result<(), Box<dyn std::error::Error>> {
    #[derive(serde::Serialize)]
    struct Item {
        name: &'static str,
        price: f64,
        tags: Vec<&'static str>,
        note: Option<&'static str>,
    }

    let items = [
        Item {
            name: "Lamp",
            price: 12.5,
            tags: vec!["home"],
            note: None,
        },
        Item {
            name: "Desk, oak",
            price: 80.0,
            tags: vec![],
            note: Some("heavy"),
        },
    ];
    let s = csvrow::encode_records(&items, &Options::default())?;
    assert_eq!(
        s,
        "name,price,tags,note\nLamp,12.5,\"[\"\"home\"\"]\",\n\"Desk, oak\",80.0,[],heavy"
    );
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn non_object_records_are_rejected() {
    let err = csvrow::encode_records(&[1, 2], &Options::default()).unwrap_err();
    assert!(matches!(err, csvrow::Error::InvalidInput(_)));
}
