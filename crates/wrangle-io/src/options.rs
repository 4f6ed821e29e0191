//! Per-call reader/writer options, seeded from `IoConfig`.

use serde::{Deserialize, Serialize};
use wrangle_core::config::{BinaryCodec, IoConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// CSV field delimiter.
    pub delimiter: u8,
    /// First record (CSV) or first row (spreadsheet) holds column names.
    pub has_header: bool,
    /// Cell texts treated as missing.
    pub null_values: Vec<String>,
    /// Infer column types from cell values; otherwise read text as strings.
    pub infer_types: bool,
    /// Keep only these columns, in this order.
    pub columns: Option<Vec<String>>,
    /// Worksheet to read; the first sheet when `None`.
    pub sheet_name: Option<String>,
}

impl LoadOptions {
    pub fn from_config(cfg: &IoConfig) -> Self {
        Self {
            delimiter: cfg.csv_delimiter,
            has_header: cfg.csv_has_header,
            null_values: cfg.null_values.clone(),
            infer_types: true,
            columns: None,
            sheet_name: cfg.sheet_name.clone(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.columns = Some(columns.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    pub fn with_infer_types(mut self, infer: bool) -> Self {
        self.infer_types = infer;
        self
    }

    pub(crate) fn is_null(&self, text: &str) -> bool {
        self.null_values.iter().any(|n| n == text)
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_config(&IoConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// CSV field delimiter.
    pub delimiter: u8,
    /// Write column names as the first record/row.
    pub include_header: bool,
    /// Worksheet name; `Sheet1` when `None`.
    pub sheet_name: Option<String>,
    /// Payload compression for the binary format.
    pub codec: BinaryCodec,
}

impl WriteOptions {
    pub fn from_config(cfg: &IoConfig) -> Self {
        Self {
            delimiter: cfg.csv_delimiter,
            include_header: cfg.csv_has_header,
            sheet_name: cfg.sheet_name.clone(),
            codec: cfg.binary_codec,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    pub fn with_codec(mut self, codec: BinaryCodec) -> Self {
        self.codec = codec;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::from_config(&IoConfig::default())
    }
}
