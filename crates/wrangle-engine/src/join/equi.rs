//! Equi-join over polars' `DataFrame::join`.
//!
//! polars matches the rows; this operator decides the output names. Both
//! inputs are joined on hidden, type-aligned copies of their key columns and
//! the right input's columns are renamed to hidden aliases first, so polars
//! never applies its own suffixes. The final `select` restores the layout:
//! left columns, then emitted right columns, then the optional indicator.
//! Rows whose key contains a null never match.

use std::collections::HashSet;

use polars::prelude::{
    col, lit, when, Column, DataFrame, DataFrameJoinOps, DataType, Expr, IntoLazy, JoinArgs,
    JoinCoalesce, JoinType as PlJoinType, MaintainOrderJoin, PlSmallStr, SortMultipleOptions,
};

use super::{JoinOptions, JoinType, INDICATOR_COLUMN};
use crate::traits::{expect_inputs, OpError, Operator};

const LEFT_ROW: &str = "__wrangle_left_row";
const RIGHT_ROW: &str = "__wrangle_right_row";

fn left_key(k: usize) -> String {
    format!("__wrangle_left_key_{k}")
}

fn right_key(k: usize) -> String {
    format!("__wrangle_right_key_{k}")
}

fn right_alias(ri: usize) -> String {
    format!("__wrangle_right_{ri}")
}

#[derive(Debug, Clone, Default)]
pub struct EquiJoin {
    /// Key pairs `(left column, right column)`, matched positionally.
    pub on: Vec<(String, String)>,
    pub join_type: JoinType,
    pub options: JoinOptions,
}

/// Where every output column comes from.
#[derive(Debug)]
struct JoinLayout {
    /// Output name of each left column.
    left_names: Vec<String>,
    /// For a left key column whose right partner has the same name: the
    /// position in `on` of that key pair.
    coalesce: Vec<Option<usize>>,
    /// Emitted right columns as `(index, output name)`.
    right_cols: Vec<(usize, String)>,
}

impl EquiJoin {
    pub fn new(on: Vec<(String, String)>, join_type: JoinType, options: JoinOptions) -> Self {
        Self {
            on,
            join_type,
            options,
        }
    }

    fn layout(&self, left: &[&str], right: &[&str]) -> Result<JoinLayout, OpError> {
        if self.on.is_empty() {
            return Err(OpError::InvalidArgs(
                "join requires at least one key pair".into(),
            ));
        }

        let position = |names: &[&str], key: &str| {
            names
                .iter()
                .position(|n| *n == key)
                .ok_or_else(|| OpError::ColumnNotFound(key.to_string()))
        };
        let mut coalesce = vec![None; left.len()];
        let mut dropped = HashSet::new();
        for (k, (l, r)) in self.on.iter().enumerate() {
            let li = position(left, l.as_str())?;
            let ri = position(right, r.as_str())?;
            if l == r {
                coalesce[li] = Some(k);
                dropped.insert(ri);
            }
        }

        let emitted: Vec<usize> = (0..right.len()).filter(|ri| !dropped.contains(ri)).collect();
        let emitted_names: HashSet<&str> = emitted.iter().map(|&ri| right[ri]).collect();
        let left_set: HashSet<&str> = left.iter().copied().collect();
        let (lsuffix, rsuffix) = &self.options.suffixes;

        let left_names: Vec<String> = left
            .iter()
            .map(|name| {
                if emitted_names.contains(name) {
                    format!("{name}{lsuffix}")
                } else {
                    name.to_string()
                }
            })
            .collect();
        let right_cols: Vec<(usize, String)> = emitted
            .into_iter()
            .map(|ri| {
                let name = right[ri];
                if left_set.contains(&name) {
                    (ri, format!("{name}{rsuffix}"))
                } else {
                    (ri, name.to_string())
                }
            })
            .collect();

        let mut seen = HashSet::new();
        let indicator = self.options.indicator.then_some(INDICATOR_COLUMN);
        let all_names = left_names
            .iter()
            .map(String::as_str)
            .chain(right_cols.iter().map(|(_, n)| n.as_str()))
            .chain(indicator);
        for name in all_names {
            if !seen.insert(name) {
                return Err(OpError::DuplicateColumn(name.to_string()));
            }
        }

        Ok(JoinLayout {
            left_names,
            coalesce,
            right_cols,
        })
    }

    /// Copies of the inputs carrying row numbers and aligned key columns.
    /// Right columns are renamed to their hidden aliases.
    fn keyed_inputs(
        &self,
        left: &DataFrame,
        right: &DataFrame,
    ) -> Result<(DataFrame, DataFrame), OpError> {
        let aliased: Vec<Column> = right
            .get_columns()
            .iter()
            .enumerate()
            .map(|(ri, c)| c.clone().with_name(right_alias(ri).into()))
            .collect();

        let mut left_keyed = left.with_row_index(LEFT_ROW.into(), None)?;
        let mut right_keyed = DataFrame::new(aliased)?.with_row_index(RIGHT_ROW.into(), None)?;

        for (k, (l, r)) in self.on.iter().enumerate() {
            let lk = left.column(l)?.clone();
            let rk = right.column(r)?.clone();
            let (lk, rk) = match key_dtype(lk.dtype(), rk.dtype()) {
                Some(dtype) => (lk.cast(&dtype)?, rk.cast(&dtype)?),
                None => (lk, rk),
            };
            left_keyed.with_column(lk.with_name(left_key(k).into()))?;
            right_keyed.with_column(rk.with_name(right_key(k).into()))?;
        }
        Ok((left_keyed, right_keyed))
    }

    fn polars_args(&self) -> JoinArgs {
        let (how, order) = match self.join_type {
            JoinType::Inner => (PlJoinType::Inner, MaintainOrderJoin::LeftRight),
            JoinType::Left => (PlJoinType::Left, MaintainOrderJoin::LeftRight),
            JoinType::Right => (PlJoinType::Right, MaintainOrderJoin::RightLeft),
        };
        let mut args = JoinArgs::new(how).with_coalesce(JoinCoalesce::KeepColumns);
        args.maintain_order = order;
        args
    }
}

/// A shared type for a key pair whose sides differ, when polars would
/// otherwise refuse to compare them. Mixed integer widths compare as `Int64`;
/// any float on either side compares as `Float64`. Other mismatches are left
/// alone so polars reports them.
fn key_dtype(left: &DataType, right: &DataType) -> Option<DataType> {
    if left == right || !(left.is_primitive_numeric() && right.is_primitive_numeric()) {
        return None;
    }
    if left.is_float() || right.is_float() {
        Some(DataType::Float64)
    } else {
        Some(DataType::Int64)
    }
}

impl Operator for EquiJoin {
    fn name(&self) -> &'static str {
        "equi_join"
    }

    fn eval(&self, inputs: &[&DataFrame]) -> Result<DataFrame, OpError> {
        let inputs = expect_inputs(self.name(), inputs, 2)?;
        let (left, right) = (inputs[0], inputs[1]);
        let left_names = left.get_column_names_str();
        let layout = self.layout(&left_names, &right.get_column_names_str())?;

        let (left_keyed, right_keyed) = self.keyed_inputs(left, right)?;
        let left_on: Vec<String> = (0..self.on.len()).map(left_key).collect();
        let right_on: Vec<String> = (0..self.on.len()).map(right_key).collect();
        let mut joined = left_keyed.join(&right_keyed, left_on, right_on, self.polars_args(), None)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            join_type = %self.join_type,
            left_rows = left.height(),
            right_rows = right.height(),
            out_rows = joined.height(),
            "equi join evaluated"
        );

        if self.options.sort {
            // A right join reads its key values from the right side.
            let by: Vec<PlSmallStr> = (0..self.on.len())
                .map(|k| match self.join_type {
                    JoinType::Right => right_key(k).into(),
                    _ => left_key(k).into(),
                })
                .collect();
            joined = joined.sort(by, SortMultipleOptions::default().with_maintain_order(true))?;
        }

        let left_missing = col(LEFT_ROW).is_null();
        let mut exprs: Vec<Expr> = Vec::with_capacity(left.width() + layout.right_cols.len() + 1);
        for (li, name) in left_names.iter().enumerate() {
            let expr = match layout.coalesce[li] {
                Some(k) => when(left_missing.clone())
                    .then(col(right_key(k)))
                    .otherwise(col(left_key(k))),
                None => col(*name),
            };
            exprs.push(expr.alias(layout.left_names[li].as_str()));
        }
        for (ri, name) in &layout.right_cols {
            exprs.push(col(right_alias(*ri)).alias(name.as_str()));
        }
        if self.options.indicator {
            exprs.push(
                when(left_missing)
                    .then(lit("right_only"))
                    .when(col(RIGHT_ROW).is_null())
                    .then(lit("left_only"))
                    .otherwise(lit("both"))
                    .alias(INDICATOR_COLUMN),
            );
        }

        Ok(joined.lazy().select(exprs).collect()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn people() -> DataFrame {
        df!(
            "id" => [1i64, 2, 3],
            "name" => ["ann", "bob", "cid"],
        )
        .unwrap()
    }

    fn orders() -> DataFrame {
        df!(
            "person" => [3i64, 1, 9],
            "name" => ["o1", "o2", "o4"],
        )
        .unwrap()
    }

    fn join(how: JoinType) -> EquiJoin {
        EquiJoin::new(
            vec![("id".into(), "person".into())],
            how,
            JoinOptions::default(),
        )
    }

    fn strs<'a>(df: &'a DataFrame, name: &str) -> Vec<Option<&'a str>> {
        df.column(name).unwrap().str().unwrap().into_iter().collect()
    }

    fn ints(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        df.column(name).unwrap().i64().unwrap().into_iter().collect()
    }

    #[test]
    fn inner_follows_left_order() {
        let out = join(JoinType::Inner).eval(&[&people(), &orders()]).unwrap();
        assert_eq!(out.get_column_names_str(), vec!["id", "name_x", "person", "name_y"]);
        assert_eq!(strs(&out, "name_y"), vec![Some("o2"), Some("o1")]);
    }

    #[test]
    fn left_keeps_unmatched_with_nulls() {
        let out = join(JoinType::Left).eval(&[&people(), &orders()]).unwrap();
        assert_eq!(out.height(), 3);
        assert_eq!(strs(&out, "name_x"), vec![Some("ann"), Some("bob"), Some("cid")]);
        assert_eq!(ints(&out, "person"), vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn right_follows_right_order() {
        let out = join(JoinType::Right).eval(&[&people(), &orders()]).unwrap();
        assert_eq!(out.get_column_names_str(), vec!["id", "name_x", "person", "name_y"]);
        assert_eq!(ints(&out, "person"), vec![Some(3), Some(1), Some(9)]);
        assert_eq!(ints(&out, "id"), vec![Some(3), Some(1), None]);
    }

    #[test]
    fn same_name_keys_are_coalesced() {
        let left = df!("k" => [1i64]).unwrap();
        let right = df!("k" => [2i64], "v" => [true]).unwrap();
        let j = EquiJoin::new(
            vec![("k".into(), "k".into())],
            JoinType::Right,
            JoinOptions::default(),
        );
        let out = j.eval(&[&left, &right]).unwrap();
        assert_eq!(out.get_column_names_str(), vec!["k", "v"]);
        assert_eq!(ints(&out, "k"), vec![Some(2)]);
    }

    #[test]
    fn mixed_integer_widths_still_match() {
        let left = df!("k" => [1i32, 2], "a" => ["x", "y"]).unwrap();
        let right = df!("k" => [2i64, 1], "b" => ["p", "q"]).unwrap();
        let j = EquiJoin::new(
            vec![("k".into(), "k".into())],
            JoinType::Inner,
            JoinOptions::default(),
        );
        let out = j.eval(&[&left, &right]).unwrap();
        assert_eq!(strs(&out, "b"), vec![Some("q"), Some("p")]);
    }

    #[test]
    fn empty_suffixes_collide() {
        let j = EquiJoin::new(
            vec![("id".into(), "person".into())],
            JoinType::Inner,
            JoinOptions::default().with_suffixes("", ""),
        );
        let err = j.eval(&[&people(), &orders()]).unwrap_err();
        assert!(matches!(err, OpError::DuplicateColumn(ref c) if c == "name"));
    }

    #[test]
    fn no_keys_is_rejected() {
        let j = EquiJoin::default();
        assert!(matches!(
            j.eval(&[&people(), &orders()]),
            Err(OpError::InvalidArgs(_))
        ));
    }

    #[test]
    fn null_keys_never_match() {
        let left = df!("k" => [None::<i64>, Some(1)]).unwrap();
        let right = df!("k" => [None::<i64>, Some(1)]).unwrap();
        let j = EquiJoin::new(
            vec![("k".into(), "k".into())],
            JoinType::Inner,
            JoinOptions::default(),
        );
        assert_eq!(j.eval(&[&left, &right]).unwrap().height(), 1);
    }

    #[test]
    fn indicator_and_sort() {
        let j = EquiJoin::new(
            vec![("id".into(), "person".into())],
            JoinType::Right,
            JoinOptions::default().with_indicator(true).with_sort(true),
        );
        let out = j.eval(&[&people(), &orders()]).unwrap();
        assert_eq!(ints(&out, "person"), vec![Some(1), Some(3), Some(9)]);
        assert_eq!(
            strs(&out, INDICATOR_COLUMN),
            vec![Some("both"), Some("both"), Some("right_only")]
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let (l, r) = (people(), orders());
        join(JoinType::Left).eval(&[&l, &r]).unwrap();
        assert!(l.equals_missing(&people()));
        assert!(r.equals_missing(&orders()));
    }
}
