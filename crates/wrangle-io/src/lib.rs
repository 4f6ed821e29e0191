#![forbid(unsafe_code)]
//! wrangle-io: file codecs and format dispatch.
//!
//! Three formats are supported:
//! - `csv`: delimited text via polars' CSV reader and writer, with
//!   per-column type inference;
//! - `binary`: a checksummed, optionally compressed Arrow IPC payload that
//!   round-trips every column type and value exactly;
//! - `spreadsheet`: xlsx workbooks via `calamine` (read) and
//!   `rust_xlsxwriter` (write).
//!
//! `load`/`write` pick the codec for a `Format`; format names that are not
//! recognized fail with `Error::UnsupportedFormat`.

pub mod codec;
pub mod error;
pub mod format;
pub mod frame;
pub mod options;
pub mod readers;
pub mod writers;

use std::path::Path;

use polars::prelude::DataFrame;

pub use error::{Error, Result};
pub use format::{Format, IntoFormat};
pub use options::{LoadOptions, WriteOptions};

/// Read a table from `path` using the codec for `format`.
pub fn load(
    path: impl AsRef<Path>,
    format: impl IntoFormat,
    opts: &LoadOptions,
) -> Result<DataFrame> {
    let format = format.into_format()?;
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    tracing::trace!(path = %path.display(), %format, "loading table");

    let table = match format {
        Format::Csv => readers::csv::read_path(path, opts)?,
        Format::Binary => readers::binary::read_path(path)?,
        Format::Spreadsheet => readers::spreadsheet::read_path(path, opts)?,
    };
    select_columns(table, opts)
}

/// Write `table` to `path` using the codec for `format`, creating or
/// overwriting the file.
pub fn write(
    table: &DataFrame,
    path: impl AsRef<Path>,
    format: impl IntoFormat,
    opts: &WriteOptions,
) -> Result<()> {
    let format = format.into_format()?;
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    tracing::trace!(path = %path.display(), %format, rows = table.height(), "writing table");

    match format {
        Format::Csv => writers::csv::write_path(table, path, opts),
        Format::Binary => writers::binary::write_path(table, path, opts.codec),
        Format::Spreadsheet => writers::spreadsheet::write_path(table, path, opts),
    }
}

/// Apply `LoadOptions::columns`, keeping the requested order.
fn select_columns(table: DataFrame, opts: &LoadOptions) -> Result<DataFrame> {
    let Some(wanted) = &opts.columns else {
        return Ok(table);
    };
    if let Some(missing) = wanted.iter().find(|c| table.get_column_index(c).is_none()) {
        return Err(Error::ColumnNotFound(missing.clone()));
    }
    Ok(table.select(wanted.iter().map(String::as_str))?)
}
