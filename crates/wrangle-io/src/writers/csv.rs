//! CSV writer built on the polars CSV serializer.

use std::io::Write;
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};

use crate::error::Result;
use crate::options::WriteOptions;

pub fn write_path(table: &DataFrame, path: impl AsRef<Path>, opts: &WriteOptions) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write(table, file, opts)
}

/// Write the header (optional) and one record per row. Missing values are
/// written as empty fields.
pub fn write<W: Write>(table: &DataFrame, writer: W, opts: &WriteOptions) -> Result<()> {
    let mut df = table.clone();
    CsvWriter::new(writer)
        .include_header(opts.include_header)
        .with_separator(opts.delimiter)
        .finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn writes_nulls_as_empty_fields() {
        let t = df!(
            "a" => [Some(1i64), None],
            "b" => ["x,y", "z"],
        )
        .unwrap();
        let mut buf = Vec::new();
        write(&t, &mut buf, &WriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n1,\"x,y\"\n,z\n");
    }

    #[test]
    fn header_can_be_skipped() {
        let t = df!("a" => [true]).unwrap();
        let mut buf = Vec::new();
        write(&t, &mut buf, &WriteOptions::default().with_header(false)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "true\n");
    }

    #[test]
    fn custom_delimiter() {
        let t = df!("a" => [1i64], "b" => [2i64]).unwrap();
        let mut buf = Vec::new();
        write(&t, &mut buf, &WriteOptions::default().with_delimiter(b'\t')).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\tb\n1\t2\n");
    }
}
