//! Spreadsheet reader built on `calamine`.

use std::collections::HashSet;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::{Error, Result};
use crate::options::LoadOptions;

/// Read one worksheet (the first one unless `sheet_name` is set).
///
/// Empty cells, error cells and null-token strings are missing. With
/// `infer_types` a column of booleans becomes `Boolean`, a numeric column
/// whose values are all integral becomes `Int64`, any other numeric column
/// `Float64`, and everything else `String`.
///
/// Only calamine's used range is read. Trailing empty rows are not part of
/// it, and neither are leading columns that are empty in every row: such a
/// column is dropped entirely, header cell included, so the first returned
/// column is the first one holding any cell.
pub fn read_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = match &opts.sheet_name {
        Some(name) => name.clone(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| Error::Spreadsheet("workbook has no sheets".into()))?,
    };
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let width = range.width();
    let names = if opts.has_header {
        let header = rows.next().unwrap_or(&[]);
        dedup_names(
            (0..width)
                .map(|i| match header.get(i) {
                    Some(Data::String(s)) => s.clone(),
                    Some(Data::Empty) | None => String::new(),
                    Some(other) => other.to_string(),
                })
                .collect(),
        )
    } else {
        (0..width).map(default_name).collect()
    };

    let mut cells: Vec<Vec<&Data>> = vec![Vec::new(); width];
    for row in rows {
        for (col, cell) in cells.iter_mut().zip(row) {
            col.push(cell);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(sheet = %sheet, columns = width, "spreadsheet read");

    let columns: Vec<Column> = names
        .iter()
        .zip(&cells)
        .map(|(name, col)| column_series(name, col, opts).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn is_missing(cell: &Data, opts: &LoadOptions) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => opts.is_null(s),
        _ => false,
    }
}

/// Type one worksheet column. Workbooks store every number as a float, so
/// integral columns are recovered here.
fn column_series(name: &str, cells: &[&Data], opts: &LoadOptions) -> Series {
    let mut present = cells.iter().filter(|c| !is_missing(c, opts)).peekable();
    let infer = opts.infer_types && present.peek().is_some();

    if infer && present.clone().all(|c| matches!(c, Data::Bool(_))) {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                Data::Bool(b) => Some(*b),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    if infer && present.clone().all(|c| matches!(c, Data::Int(_) | Data::Float(_))) {
        let integral = present.all(|c| match c {
            Data::Float(f) => is_integral(*f),
            _ => true,
        });
        if integral {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|c| match c {
                    Data::Int(i) => Some(*i),
                    Data::Float(f) => Some(*f as i64),
                    _ => None,
                })
                .collect();
            return Series::new(name.into(), values);
        }
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|c| match c {
                Data::Int(i) => Some(*i as f64),
                Data::Float(f) => Some(*f),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|c| match c {
            c if is_missing(c, opts) => None,
            Data::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .collect();
    Series::new(name.into(), values)
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15
}

/// Make header names unique: a repeated `name` becomes `name.1`, `name.2`, ...
/// Blank names get the positional default.
fn dedup_names(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            default_name(idx)
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{n}");
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Positional column name, numbered from 1 like polars' headerless CSV.
fn default_name(idx: usize) -> String {
    format!("column_{}", idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn series(cells: &[Data]) -> Series {
        let refs: Vec<&Data> = cells.iter().collect();
        column_series("c", &refs, &LoadOptions::default())
    }

    #[test]
    fn integral_floats_narrow_to_ints() {
        let s = series(&[Data::Float(1.0), Data::Empty, Data::Float(3.0)]);
        assert_eq!(s.dtype(), &DataType::Int64);
        let values: Vec<Option<i64>> = s.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn fractional_columns_stay_float() {
        let s = series(&[Data::Int(1), Data::Float(2.5)]);
        assert_eq!(s.dtype(), &DataType::Float64);
    }

    #[test]
    fn mixed_columns_become_text() {
        let s = series(&[Data::Float(1.0), Data::String("x".into())]);
        let values: Vec<Option<&str>> = s.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("1"), Some("x")]);
    }

    #[test]
    fn null_tokens_and_booleans() {
        let s = series(&[Data::Bool(true), Data::String("NA".into()), Data::Empty]);
        assert_eq!(s.dtype(), &DataType::Boolean);
        assert_eq!(s.null_count(), 2);
    }

    #[test]
    fn dedups_header_names() {
        let names = dedup_names(
            ["a", "b", "a", "", "a"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(names, vec!["a", "b", "a.1", "column_4", "a.2"]);
    }
}
