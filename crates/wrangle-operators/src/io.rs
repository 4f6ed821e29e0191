//! Load/write operators over the `wrangle-io` codecs.

use std::path::Path;

use tracing::debug;
use wrangle_core::Table;
use wrangle_io::{IntoFormat, LoadOptions, WriteOptions};

use crate::error::Result;

/// Load a table from a local file.
///
/// `format` is a `Format` or one of its names (`"csv"`, `"binary"`/`"pickle"`,
/// `"spreadsheet"`/`"xlsx"`). Any other name fails with
/// `wrangle_io::Error::UnsupportedFormat`.
pub fn load_table(
    path: impl AsRef<Path>,
    format: impl IntoFormat,
    opts: &LoadOptions,
) -> Result<Table> {
    let path = path.as_ref();
    let format = format.into_format()?;
    let table = wrangle_io::load(path, format, opts)?;
    debug!(
        path = %path.display(),
        %format,
        rows = table.height(),
        columns = table.width(),
        "loaded table"
    );
    Ok(table)
}

/// Write a table to a local file, creating or overwriting it.
pub fn write_table(
    table: &Table,
    path: impl AsRef<Path>,
    format: impl IntoFormat,
    opts: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let format = format.into_format()?;
    wrangle_io::write(table, path, format, opts)?;
    debug!(
        path = %path.display(),
        %format,
        rows = table.height(),
        "wrote table"
    );
    Ok(())
}
