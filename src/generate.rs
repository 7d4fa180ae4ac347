//! Writing one schema file per example file.
//!
//! Inputs are files or directories. Directories are walked recursively, and
//! every file found is treated as an example document. Each schema is written
//! to `<output directory>/<input name without .json>-schema.json`.

use crate::{serialize, Error, Inferrer};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where to read examples from and where to write schemas to.
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<PathBuf>,
    pub output_directory: PathBuf,
}

impl Config {
    /// Builds a config from a source directory and a list of source paths.
    ///
    /// If `source_directory` is given, `source_paths` is ignored. Fails if
    /// neither is given.
    pub fn from_locations(
        source_directory: Option<PathBuf>,
        source_paths: Vec<PathBuf>,
        output_directory: PathBuf,
    ) -> Result<Self, Error> {
        let sources = match source_directory {
            Some(dir) => vec![dir],
            None if !source_paths.is_empty() => source_paths,
            None => {
                return Err(Error::Configuration(
                    "one of source directory or source paths must be provided".to_string(),
                ))
            }
        };

        Ok(Config {
            sources,
            output_directory,
        })
    }
}

/// Lists the readable example files under `sources`, in a stable order.
///
/// Anything that cannot be opened, including a source that does not exist,
/// is skipped with a warning.
pub fn collect_inputs(sources: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for source in sources {
        for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if let Err(e) = fs::File::open(entry.path()) {
                        warn!("skipping {}: {}", entry.path().display(), e);
                        continue;
                    }

                    inputs.push(entry.into_path());
                }
                Ok(entry) if entry.file_type().is_dir() => {}
                Ok(entry) => warn!("skipping {}: not a regular file", entry.path().display()),
                Err(e) => warn!("skipping unreadable entry: {}", e),
            }
        }
    }

    inputs
}

/// The name of the schema file generated for `input`.
///
/// ```
/// use json_schema_infer::generate::output_file_name;
/// use std::path::Path;
///
/// assert_eq!("orders-schema.json", output_file_name(Path::new("in/orders.json")));
/// assert_eq!("notes.txt-schema.json", output_file_name(Path::new("notes.txt")));
/// ```
pub fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    format!("{}-schema.json", name.replace(".json", ""))
}

/// Infers and writes a schema for every input in `config`.
///
/// Returns the paths written, in order. Stops at the first failure; files
/// written before it are left in place.
pub fn generate(config: &Config, inferrer: &Inferrer) -> Result<Vec<PathBuf>, Error> {
    let inputs = collect_inputs(&config.sources);
    debug!("found {} input file(s)", inputs.len());

    fs::create_dir_all(&config.output_directory).map_err(|e| Error::Io {
        path: config.output_directory.clone(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(inputs.len());
    for input in inputs {
        info!("generating schema for {}", input.display());

        let out = config.output_directory.join(output_file_name(&input));
        generate_one(&input, &out, inferrer)?;

        debug!("wrote {}", out.display());
        written.push(out);
    }

    Ok(written)
}

fn generate_one(input: &Path, out: &Path, inferrer: &Inferrer) -> Result<(), Error> {
    let bytes = fs::read(input).map_err(|e| Error::Io {
        path: input.to_path_buf(),
        source: e,
    })?;

    let mut rendered = inferrer
        .infer_slice(&bytes)
        .and_then(|schema| serialize::serialize(&schema))
        .map_err(|e| Error::Document {
            path: input.to_path_buf(),
            source: Box::new(e),
        })?;
    rendered.push('\n');

    fs::write(out, rendered).map_err(|e| Error::Io {
        path: out.to_path_buf(),
        source: e,
    })
}
