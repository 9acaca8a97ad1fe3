use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors raised while generating tables or bundling text files.
///
/// Every variant is fatal for the run that produced it. Nothing is retried
/// and no partial output is written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bundle root {0} does not exist or is not a directory")]
    MissingRoot(PathBuf),
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{path} is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("path {0} cannot be represented as UTF-8")]
    NonUtf8Path(PathBuf),
    #[error("failed to serialize bundle: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
