//! Projection to an ordered subset of columns.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::traits::{expect_inputs, require_column, OpError, Operator};

#[derive(Debug, Clone, Default)]
pub struct Project {
    /// Output columns, in output order.
    pub columns: Vec<String>,
}

impl Project {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }
}

impl Operator for Project {
    fn name(&self) -> &'static str {
        "project"
    }

    fn eval(&self, inputs: &[&DataFrame]) -> Result<DataFrame, OpError> {
        let input = expect_inputs(self.name(), inputs, 1)?[0];
        let mut seen = HashSet::with_capacity(self.columns.len());
        for name in &self.columns {
            require_column(input, name)?;
            if !seen.insert(name.as_str()) {
                return Err(OpError::DuplicateColumn(name.clone()));
            }
        }
        Ok(input.select(self.columns.iter().map(String::as_str))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn table() -> DataFrame {
        df!("a" => [1i64], "b" => ["x"], "c" => [true]).unwrap()
    }

    #[test]
    fn keeps_requested_order() {
        let out = Project::new(&["c", "a"]).eval(&[&table()]).unwrap();
        assert_eq!(out.get_column_names_str(), vec!["c", "a"]);
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn unknown_column_is_reported() {
        let err = Project::new(&["a", "zzz"]).eval(&[&table()]).unwrap_err();
        assert!(matches!(err, OpError::ColumnNotFound(ref c) if c == "zzz"));
    }

    #[test]
    fn repeated_column_is_reported() {
        let err = Project::new(&["b", "b"]).eval(&[&table()]).unwrap_err();
        assert!(matches!(err, OpError::DuplicateColumn(ref c) if c == "b"));
    }
}
