use std::fmt;

use thiserror::Error;

/// Result type local to wrangle-operators.
pub type Result<T> = std::result::Result<T, Error>;

/// Which input table of a merge an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Some keys of a composite key are not columns of `side`. Sorted.
    #[error("{side} table doesn't have all keys passed. Missing keys: {keys:?}")]
    MissingKeys { side: Side, keys: Vec<String> },

    /// The key of a single key pair is not a column of `side`.
    #[error("{side} table doesn't have passed key. Missing key: {key}")]
    MissingKey { side: Side, key: String },

    #[error(transparent)]
    Engine(#[from] wrangle_engine::OpError),

    #[error(transparent)]
    Io(#[from] wrangle_io::Error),
}

impl Error {
    /// True for the missing-join-key errors raised before any join runs.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::MissingKeys { .. } | Error::MissingKey { .. })
    }

    /// The missing key names, for key errors.
    pub fn missing_keys(&self) -> Vec<&str> {
        match self {
            Error::MissingKeys { keys, .. } => keys.iter().map(String::as_str).collect(),
            Error::MissingKey { key, .. } => vec![key.as_str()],
            _ => Vec::new(),
        }
    }
}
