use std::path::PathBuf;

/// Errors produced while inferring, serializing, or generating schemas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not valid JSON.
    #[error("malformed JSON: {message}")]
    Parse {
        /// One-based line of the offending input.
        line: usize,
        /// One-based column of the offending input.
        column: usize,
        /// The parser's description, including the location.
        message: String,
    },

    /// The schema contains a value that has no JSON representation.
    #[error("cannot serialize schema: {0}")]
    Serialization(String),

    /// The run was misconfigured: no input location, or a malformed hint
    /// pointer.
    #[error("{0}")]
    Configuration(String),

    /// Reading an input, writing an output, or creating the output
    /// directory failed at `path`.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An engine error attributed to a particular input file.
    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
