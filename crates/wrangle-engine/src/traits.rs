//! Operator trait + common interfaces.

use polars::prelude::{DataFrame, PolarsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid operator arguments: {0}")]
    InvalidArgs(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("duplicate column '{0}' in output")]
    DuplicateColumn(String),

    #[error("invalid join type '{0}', expected one of: inner, left, right")]
    InvalidJoinType(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Trait that all engine operators implement.
///
/// Invariants:
/// - Inputs are borrowed and never mutated.
/// - `eval` must be deterministic given the same inputs.
pub trait Operator: Send + Sync {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Evaluate the operator. Unary operators read `inputs[0]`; joins read
    /// `inputs[0]` (left) and `inputs[1]` (right).
    fn eval(&self, inputs: &[&DataFrame]) -> Result<DataFrame, OpError>;
}

pub(crate) fn expect_inputs<'a, T>(op: &str, inputs: &'a [T], n: usize) -> Result<&'a [T], OpError> {
    if inputs.len() != n {
        return Err(OpError::InvalidArgs(format!(
            "{op} expects {n} input(s), got {}",
            inputs.len()
        )));
    }
    Ok(inputs)
}

/// Fail with `ColumnNotFound` unless `df` has a column called `name`.
pub(crate) fn require_column(df: &DataFrame, name: &str) -> Result<(), OpError> {
    match df.get_column_index(name) {
        Some(_) => Ok(()),
        None => Err(OpError::ColumnNotFound(name.to_string())),
    }
}
