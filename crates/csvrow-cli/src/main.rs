use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

#[derive(Parser, Debug)]
#[command(
    name = "csvrow-cli",
    about = "CLI for CSV ↔ JSON conversion",
    version
)]
struct Args {
    /// Encode a JSON array of objects to CSV (default decodes CSV to JSON)
    #[arg(short, long)]
    encode: bool,

    /// Field delimiter
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Input has no header line; columns are named col1..colN
    #[arg(long, default_value_t = false)]
    no_headers: bool,

    /// Keep surrounding whitespace in fields
    #[arg(long, default_value_t = false)]
    no_trim: bool,

    /// Do not write a header line when encoding
    #[arg(long, default_value_t = false)]
    omit_headers: bool,

    /// Validate decoded rows as products and print the typed records
    #[arg(long, default_value_t = false)]
    validate_products: bool,

    /// Pretty-print JSON on output (when decoding)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let delimiter = match args.delimiter {
        DelimArg::Comma => csvrow::Delimiter::Comma,
        DelimArg::Tab => csvrow::Delimiter::Tab,
        DelimArg::Pipe => csvrow::Delimiter::Pipe,
        DelimArg::Semicolon => csvrow::Delimiter::Semicolon,
    };
    let options = csvrow::Options {
        delimiter,
        has_headers: !args.no_headers,
        trim: !args.no_trim,
        include_headers: !args.omit_headers,
    };

    if args.encode {
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        let records = csvrow::encode::records::objects_from_value(value)?;
        println!("{}", csvrow::to_string(&records, &options)?);
        return Ok(());
    }

    let table = csvrow::parse_table(&buf, &options)?;
    let value = if args.validate_products {
        let products = csvrow::validate_products(&table.rows)?;
        serde_json::to_value(&products)?
    } else {
        serde_json::Value::Array(table.rows.iter().map(serde_json::Value::from).collect())
    };
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
