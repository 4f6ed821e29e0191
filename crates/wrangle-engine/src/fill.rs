//! Column-scoped missing-value fill.

use polars::prelude::{col, lit, DataFrame, Expr, IntoLazy, Literal};

use crate::traits::{expect_inputs, require_column, OpError, Operator};

/// Replace missing values in one column with `value`: nulls always, and NaN
/// too when the column is floating point. Every other column is passed
/// through untouched.
///
/// The value is a polars literal, so the filled column takes the supertype of
/// its own type and the value's (an integer column filled with `0.5` becomes
/// a float column).
#[derive(Debug, Clone)]
pub struct FillNull {
    pub column: String,
    pub value: Expr,
}

impl FillNull {
    pub fn new(column: impl Into<String>, value: impl Literal) -> Self {
        Self {
            column: column.into(),
            value: lit(value),
        }
    }
}

impl Operator for FillNull {
    fn name(&self) -> &'static str {
        "fill_null"
    }

    fn eval(&self, inputs: &[&DataFrame]) -> Result<DataFrame, OpError> {
        let input = expect_inputs(self.name(), inputs, 1)?[0];
        require_column(input, &self.column)?;

        let mut filled = col(self.column.as_str());
        if input.column(&self.column)?.dtype().is_float() {
            filled = filled.fill_nan(self.value.clone());
        }
        filled = filled.fill_null(self.value.clone());

        Ok(input.clone().lazy().with_column(filled).collect()?)
    }
}
