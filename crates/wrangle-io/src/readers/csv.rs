//! CSV reader built on the polars CSV parser.

use std::path::Path;

use polars::io::mmap::MmapBytesReader;
use polars::prelude::{CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::Result;
use crate::options::LoadOptions;

pub fn read_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<DataFrame> {
    let file = std::fs::File::open(path)?;
    read(file, opts)
}

/// Read a whole CSV document.
///
/// With `infer_types` the whole file is scanned to pick each column's type
/// (integer, float, boolean, else string); without it every column is read
/// as strings. Headerless files get polars' `column_1`, `column_2`, ...
/// names.
pub fn read<R: MmapBytesReader>(reader: R, opts: &LoadOptions) -> Result<DataFrame> {
    let separator = opts.delimiter;
    let null_values = NullValues::AllColumns(
        opts.null_values
            .iter()
            .map(|v| v.as_str().into())
            .collect(),
    );
    let infer_schema_length = if opts.infer_types { None } else { Some(0) };

    let df = CsvReadOptions::default()
        .with_has_header(opts.has_header)
        .with_infer_schema_length(infer_schema_length)
        .map_parse_options(|parse| {
            parse
                .with_separator(separator)
                .with_null_values(Some(null_values.clone()))
        })
        .into_reader_with_file_handle(reader)
        .finish()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(columns = df.width(), rows = df.height(), "csv read");

    Ok(df)
}
