use anyhow::Result;
use clap::Parser;
use json_schema_infer::generate::{self, Config};
use json_schema_infer::{parse_json_pointer, AdditionalProperties, HintSet, Hints, Inferrer};
use std::path::PathBuf;

/// Generates a JSON Schema document from each example JSON file
#[derive(Parser)]
#[command(name = "json-schema-infer", version)]
struct Cli {
    /// Example files or directories to read. Added to any --source-path values.
    paths: Vec<PathBuf>,

    /// Directory to read examples from, recursively. Takes precedence over
    /// any source paths.
    #[arg(long)]
    source_directory: Option<PathBuf>,

    /// A file or directory to read examples from. May be repeated.
    #[arg(long = "source-path")]
    source_paths: Vec<PathBuf>,

    /// Directory to write the generated `<name>-schema.json` files into.
    #[arg(short, long, default_value = ".")]
    output_directory: PathBuf,

    /// Emit "additionalProperties": false on every inferred object.
    #[arg(long)]
    deny_additional_properties: bool,

    /// Describe the value at this JSON Pointer by the values seen there rather
    /// than by type. `-` matches any key or index. May be repeated.
    #[arg(long = "enum-hint")]
    enum_hints: Vec<String>,

    /// Treat the object at this JSON Pointer as a map with values of one
    /// shape. `-` matches any key or index. May be repeated.
    #[arg(long = "values-hint")]
    values_hints: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut source_paths = cli.source_paths;
    source_paths.extend(cli.paths);
    let config = Config::from_locations(cli.source_directory, source_paths, cli.output_directory)?;

    let enum_hints = cli
        .enum_hints
        .iter()
        .map(|s| parse_json_pointer(s))
        .collect::<Result<Vec<_>, _>>()?;
    let values_hints = cli
        .values_hints
        .iter()
        .map(|s| parse_json_pointer(s))
        .collect::<Result<Vec<_>, _>>()?;

    let additional_properties = if cli.deny_additional_properties {
        AdditionalProperties::Denied
    } else {
        AdditionalProperties::Allowed
    };

    let inferrer = Inferrer::new(Hints::new(
        additional_properties,
        HintSet::new(enum_hints.iter().map(|p| &p[..]).collect()),
        HintSet::new(values_hints.iter().map(|p| &p[..]).collect()),
    ));

    let written = generate::generate(&config, &inferrer)?;
    log::info!("wrote {} schema(s)", written.len());

    Ok(())
}
