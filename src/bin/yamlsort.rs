//! yamlsort - canonical YAML re-serializer CLI.
//!
//! Reads YAML (or JSON) text from a file or stdin, re-emits it with
//! deterministically sorted mapping keys to a file or stdout, optionally
//! deep-merging an override document into every section first.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yamlsort::{document, Config, Error, OutputMode, Value};

/// yaml sorter. read yaml text from stdin or file, output map key sorted
/// text to stdout or file.
#[derive(Debug, Parser)]
#[command(name = "yamlsort", version)]
struct Cli {
    /// Path to input/output file name
    #[arg(short = 'f', long = "input-output-file", value_name = "FILE")]
    input_output_file: Option<PathBuf>,

    /// Path to input file name (default: stdin)
    #[arg(short = 'i', long = "input-file", value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Path to output file name (default: stdout)
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Path to override input file name, deep-merged into every section
    #[arg(long = "override-file", value_name = "FILE")]
    override_file: Option<PathBuf>,

    /// Read JSON data
    #[arg(long = "jsoninput")]
    json_input: bool,

    /// String values are always quoted in output
    #[arg(long = "quote-string")]
    quote_string: bool,

    /// Use the stock serde_yaml marshaler
    #[arg(long = "normal", conflicts_with = "json_output")]
    normal: bool,

    /// Use JSON output with 2-space indent
    #[arg(long = "jsonoutput")]
    json_output: bool,

    /// Output array indent + 2 in yaml format
    #[arg(long = "array-indent-plus-2")]
    array_indent_plus_2: bool,

    /// Set prior key name in sort (repeatable; default: name)
    #[arg(long = "key", value_name = "NAME")]
    prior_keys: Vec<String>,

    /// Skip key path in marshal output (repeatable)
    #[arg(long = "skip-key", value_name = "PATH")]
    skip_keys: Vec<String>,

    /// Select key path in marshal output (repeatable)
    #[arg(long = "select-key", value_name = "PATH")]
    select_keys: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    // -f sets both ends unless a specific flag overrides it.
    let input_file = cli.input_file.or_else(|| cli.input_output_file.clone());
    let output_file = cli.output_file.or(cli.input_output_file);

    let mode = if cli.normal {
        OutputMode::Normal
    } else if cli.json_output {
        OutputMode::Json
    } else {
        OutputMode::Sorted
    };

    let config = Config {
        prior_keys: if cli.prior_keys.is_empty() {
            vec!["name".to_string()]
        } else {
            cli.prior_keys
        },
        skip_keys: cli.skip_keys,
        select_keys: cli.select_keys,
        quote_strings: cli.quote_string,
        array_indent_plus_2: cli.array_indent_plus_2,
        json_input: cli.json_input,
        mode,
    };

    let input = match &input_file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let overlay: Option<Value> = match &cli.override_file {
        Some(path) => Some(document::decode(
            &fs::read_to_string(path)?,
            config.json_input,
        )?),
        None => None,
    };

    let source_name = input_file.as_ref().map(|p| p.display().to_string());
    let out = document::process_input(&input, source_name.as_deref(), overlay.as_ref(), &config)?;

    // Output is only written once every section has succeeded.
    match &output_file {
        Some(path) => fs::write(path, out)?,
        None => io::stdout().write_all(out.as_bytes())?,
    }

    Ok(())
}
