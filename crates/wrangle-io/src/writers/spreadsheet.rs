//! Spreadsheet writer built on `rust_xlsxwriter`.

use std::path::Path;

use polars::prelude::{DataFrame, DataType, Series};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::{Error, Result};
use crate::options::WriteOptions;

pub const DEFAULT_SHEET: &str = "Sheet1";

/// Write the table to a single-sheet workbook. Missing values (and NaN) are
/// left as empty cells; numbers are stored as floats (the only numeric cell
/// type). Columns of any other type are written as their text form.
pub fn write_path(table: &DataFrame, path: impl AsRef<Path>, opts: &WriteOptions) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(opts.sheet_name.as_deref().unwrap_or(DEFAULT_SHEET))?;

    let offset = u32::from(opts.include_header);
    for (c, column) in table.get_columns().iter().enumerate() {
        let col = u16::try_from(c)
            .map_err(|_| Error::Spreadsheet(format!("too many columns ({})", c + 1)))?;
        if opts.include_header {
            sheet.write_string(0, col, column.name().as_str())?;
        }
        write_column(sheet, col, offset, column.as_materialized_series())?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_column(sheet: &mut Worksheet, col: u16, offset: u32, series: &Series) -> Result<()> {
    let row = |r: usize| {
        u32::try_from(r)
            .ok()
            .and_then(|r| r.checked_add(offset))
            .ok_or_else(|| Error::Spreadsheet(format!("too many rows ({})", r + 1)))
    };

    match series.dtype() {
        DataType::Boolean => {
            for (r, v) in series.bool()?.into_iter().enumerate() {
                if let Some(b) = v {
                    sheet.write_boolean(row(r)?, col, b)?;
                }
            }
        }
        dtype if dtype.is_primitive_numeric() => {
            let floats = series.cast(&DataType::Float64)?;
            for (r, v) in floats.f64()?.into_iter().enumerate() {
                match v {
                    Some(f) if !f.is_nan() => {
                        sheet.write_number(row(r)?, col, f)?;
                    }
                    _ => {}
                }
            }
        }
        _ => {
            let text = series.cast(&DataType::String)?;
            for (r, v) in text.str()?.into_iter().enumerate() {
                if let Some(s) = v {
                    sheet.write_string(row(r)?, col, s)?;
                }
            }
        }
    }
    Ok(())
}
