use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_ubjson::{DecodeOptions, DuplicateKeys, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ubjson", version, about = "UBJSON to JSON decoder")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// JSON indentation size; 0 prints compact JSON (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Reject trailing bytes after the root value.
    #[arg(long)]
    strict: bool,

    /// Duplicate object keys: reject, last-wins (default: reject).
    #[arg(long = "duplicate-keys", value_enum, value_name = "mode", default_value_t = DuplicateKeysArg::Reject)]
    duplicate_keys: DuplicateKeysArg,

    /// Maximum container nesting depth (default: 256).
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,

    /// Read `I`/`l`/`L` string lengths as 2/4/8-byte integers.
    #[arg(long = "wide-lengths")]
    wide_lengths: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DuplicateKeysArg {
    Reject,
    LastWins,
}

impl From<DuplicateKeysArg> for DuplicateKeys {
    fn from(value: DuplicateKeysArg) -> Self {
        match value {
            DuplicateKeysArg::Reject => DuplicateKeys::Reject,
            DuplicateKeysArg::LastWins => DuplicateKeys::LastWins,
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;

    let mut options = DecodeOptions::new()
        .with_strict(args.strict)
        .with_duplicate_keys(args.duplicate_keys.into())
        .with_wide_lengths(args.wide_lengths);
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let value = serde_ubjson::decode_with_options(&input, &options)?;
    tracing::debug!(bytes = input.len(), "decoded input");

    with_output_writer(args.output.as_deref(), |writer| {
        write_json(writer, &value, args.indent)
    })
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read(path)?),
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
