//! Merge operator: key validation in front of the engine's equi-join.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wrangle_core::Table;
use wrangle_engine::{EquiJoin, JoinOptions, JoinType, Operator, Project};

use crate::error::{Error, Result, Side};
use crate::keys::KeySpec;

/// `keep_columns` value for [`merge`] that keeps every column.
pub const KEEP_ALL: &[&str] = &[];

/// A reusable merge step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOperator {
    pub keys: KeySpec,
    #[serde(default)]
    pub how: JoinType,
    /// Columns to keep after the join, in output order. Empty keeps all.
    #[serde(default)]
    pub keep_columns: Vec<String>,
    #[serde(default)]
    pub options: JoinOptions,
}

impl MergeOperator {
    pub fn new(keys: impl Into<KeySpec>) -> Self {
        Self {
            keys: keys.into(),
            how: JoinType::Inner,
            keep_columns: Vec::new(),
            options: JoinOptions::default(),
        }
    }

    pub fn how(mut self, how: JoinType) -> Self {
        self.how = how;
        self
    }

    pub fn keep_columns<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.keep_columns = columns.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    pub fn options(mut self, options: JoinOptions) -> Self {
        self.options = options;
        self
    }

    /// Check that every key column exists on its side.
    pub fn validate(&self, left: &Table, right: &Table) -> Result<()> {
        match &self.keys {
            KeySpec::Composite(_) => {
                let missing_left = missing_columns(left, &self.keys.left_keys());
                if !missing_left.is_empty() {
                    return Err(Error::MissingKeys {
                        side: Side::Left,
                        keys: missing_left,
                    });
                }
                let missing_right = missing_columns(right, &self.keys.right_keys());
                if !missing_right.is_empty() {
                    return Err(Error::MissingKeys {
                        side: Side::Right,
                        keys: missing_right,
                    });
                }
            }
            KeySpec::Single(l, r) => {
                if !has_column(left, l) {
                    return Err(Error::MissingKey {
                        side: Side::Left,
                        key: l.clone(),
                    });
                }
                if !has_column(right, r) {
                    return Err(Error::MissingKey {
                        side: Side::Right,
                        key: r.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate keys, join, then project to `keep_columns` if any were given.
    pub fn apply(&self, left: &Table, right: &Table) -> Result<Table> {
        self.validate(left, right)?;

        debug!(
            how = %self.how,
            keys = ?self.keys.pairs(),
            left_rows = left.height(),
            right_rows = right.height(),
            "merging tables"
        );

        let join = EquiJoin::new(self.keys.pairs(), self.how, self.options.clone());
        let joined = join.eval(&[left, right])?;

        let out = if self.keep_columns.is_empty() {
            joined
        } else {
            Project::new(&self.keep_columns).eval(&[&joined])?
        };

        debug!(
            rows = out.height(),
            columns = out.width(),
            "merge complete"
        );
        Ok(out)
    }
}

/// Join `left` and `right` on `keys`.
///
/// Fails with `Error::MissingKeys` / `Error::MissingKey` before joining if a
/// key column is absent. A non-empty `keep_columns` projects the result to
/// exactly those columns, in that order. Engine errors are passed through.
pub fn merge<S: AsRef<str>>(
    left: &Table,
    right: &Table,
    keys: impl Into<KeySpec>,
    how: JoinType,
    keep_columns: &[S],
    options: &JoinOptions,
) -> Result<Table> {
    MergeOperator::new(keys)
        .how(how)
        .keep_columns(keep_columns)
        .options(options.clone())
        .apply(left, right)
}

/// Names in `keys` that are not columns of `table`, sorted and de-duplicated.
fn missing_columns(table: &Table, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter(|k| !has_column(table, k))
        .map(|k| k.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn has_column(table: &Table, name: &str) -> bool {
    table.get_column_index(name).is_some()
}
