//! Supported file formats and their names.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Delimited text.
    #[default]
    Csv,
    /// Checksummed serialized table (see `frame`).
    Binary,
    /// Excel workbook.
    Spreadsheet,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Binary => "binary",
            Format::Spreadsheet => "spreadsheet",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Ok(Format::Csv),
            "bin" | "pkl" | "pickle" | "wrtb" => Ok(Format::Binary),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(Format::Spreadsheet),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(Format::Csv),
            "binary" | "pickle" | "bin" => Ok(Format::Binary),
            "spreadsheet" | "xlsx" => Ok(Format::Spreadsheet),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Anything that names a format: a `Format` value or its string name.
pub trait IntoFormat {
    fn into_format(self) -> Result<Format>;
}

impl IntoFormat for Format {
    fn into_format(self) -> Result<Format> {
        Ok(self)
    }
}

impl IntoFormat for &str {
    fn into_format(self) -> Result<Format> {
        self.parse()
    }
}

impl IntoFormat for String {
    fn into_format(self) -> Result<Format> {
        self.parse()
    }
}

impl IntoFormat for &String {
    fn into_format(self) -> Result<Format> {
        self.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases() {
        assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("pickle".parse::<Format>().unwrap(), Format::Binary);
        assert_eq!("xlsx".parse::<Format>().unwrap(), Format::Spreadsheet);
        assert_eq!(Format::Binary.to_string(), "binary");
    }

    #[test]
    fn unknown_format_is_named_in_error() {
        let err = "json".into_format().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "json"));
        assert_eq!(err.to_string(), "format json isn't compatible.");
    }

    #[test]
    fn from_extension() {
        assert_eq!(Format::from_path("a/b.CSV").unwrap(), Format::Csv);
        assert_eq!(Format::from_path("t.pkl").unwrap(), Format::Binary);
        assert_eq!(Format::from_path("t.xlsx").unwrap(), Format::Spreadsheet);
        assert!(Format::from_path("t.json").is_err());
        assert!(Format::from_path("noext").is_err());
    }
}
