//! Missing-value filling.

use polars::prelude::Literal;
use tracing::debug;
use wrangle_core::Table;
use wrangle_engine::{FillNull, Operator};

use crate::error::Result;

/// Fill missing values per column: nulls, and NaN in float columns.
///
/// Each `(column, value)` pair fills only that column; columns that are not
/// listed are copied unchanged. The input table is not modified. Values are
/// polars literals (`i64`, `f64`, `bool`, `&str`, ...); a map whose values
/// differ in type can use `LiteralValue`. Naming a column the table does not
/// have fails with `wrangle_engine::OpError::ColumnNotFound`.
pub fn fill_missing<I, K, V>(data: &Table, fills: I) -> Result<Table>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Literal,
{
    let mut out = data.clone();
    for (column, value) in fills {
        let op = FillNull::new(column, value);
        debug!(column = %op.column, value = ?op.value, "filling missing values");
        out = op.eval(&[&out])?;
    }
    Ok(out)
}
