//! Codec defaults that downstream crates can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Payload compression used by the binary table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BinaryCodec {
    #[default]
    None = 0,
    Zstd = 1,
    Lz4 = 2,
}

impl BinaryCodec {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(BinaryCodec::None),
            1 => Some(BinaryCodec::Zstd),
            2 => Some(BinaryCodec::Lz4),
            _ => None,
        }
    }
}

impl FromStr for BinaryCodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BinaryCodec::None),
            "zstd" => Ok(BinaryCodec::Zstd),
            "lz4" => Ok(BinaryCodec::Lz4),
            other => Err(Error::Config(format!("unknown binary codec '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Field delimiter for CSV files.
    pub csv_delimiter: u8,

    /// Whether the first CSV record is a header row.
    pub csv_has_header: bool,

    /// Cell texts read as missing values (CSV and spreadsheet string cells).
    pub null_values: Vec<String>,

    /// Worksheet to read/write. `None` reads the first sheet and writes `Sheet1`.
    pub sheet_name: Option<String>,

    /// Compression for the binary table format.
    pub binary_codec: BinaryCodec,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            csv_delimiter: b',',
            csv_has_header: true,
            null_values: ["", "NA", "NaN", "null", "NULL"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sheet_name: None,
            binary_codec: BinaryCodec::None,
        }
    }
}

impl IoConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `WRANGLE_CSV_DELIMITER`: single-byte delimiter (`\t` accepted)
    /// - `WRANGLE_CSV_HAS_HEADER`: `true`/`false`
    /// - `WRANGLE_NULL_VALUES`: comma-separated null tokens
    /// - `WRANGLE_SHEET_NAME`: worksheet name
    /// - `WRANGLE_BINARY_CODEC`: `none`, `zstd` or `lz4`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("WRANGLE_CSV_DELIMITER") {
            if let Some(b) = parse_delimiter(&s) {
                cfg.csv_delimiter = b;
            }
        }

        if let Ok(s) = std::env::var("WRANGLE_CSV_HAS_HEADER") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.csv_has_header = v;
            }
        }

        if let Ok(s) = std::env::var("WRANGLE_NULL_VALUES") {
            cfg.null_values = s.split(',').map(|t| t.to_string()).collect();
        }

        if let Ok(s) = std::env::var("WRANGLE_SHEET_NAME") {
            if !s.is_empty() {
                cfg.sheet_name = Some(s);
            }
        }

        if let Ok(s) = std::env::var("WRANGLE_BINARY_CODEC") {
            if let Ok(v) = s.parse::<BinaryCodec>() {
                cfg.binary_codec = v;
            }
        }

        cfg
    }
}

fn parse_delimiter(s: &str) -> Option<u8> {
    match s {
        "\\t" | "\t" => Some(b'\t'),
        _ if s.len() == 1 => s.bytes().next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_csv_conventions() {
        let cfg = IoConfig::default();
        assert_eq!(cfg.csv_delimiter, b',');
        assert!(cfg.csv_has_header);
        assert!(cfg.null_values.iter().any(|v| v.is_empty()));
        assert_eq!(cfg.binary_codec, BinaryCodec::None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: IoConfig = serde_json::from_str(r#"{"binary_codec":"zstd"}"#).unwrap();
        assert_eq!(cfg.binary_codec, BinaryCodec::Zstd);
        assert_eq!(cfg.csv_delimiter, b',');
    }

    #[test]
    fn delimiter_parsing() {
        assert_eq!(parse_delimiter(";"), Some(b';'));
        assert_eq!(parse_delimiter("\\t"), Some(b'\t'));
        assert_eq!(parse_delimiter("ab"), None);
    }

    #[test]
    fn codec_names() {
        assert_eq!("LZ4".parse::<BinaryCodec>().unwrap(), BinaryCodec::Lz4);
        assert!("gzip".parse::<BinaryCodec>().is_err());
        assert_eq!(BinaryCodec::from_u8(1), Some(BinaryCodec::Zstd));
        assert_eq!(BinaryCodec::from_u8(9), None);
    }
}
