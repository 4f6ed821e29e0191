//! Join modes, join options and the equi-join operator.

mod equi;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::traits::OpError;

pub use equi::EquiJoin;

/// Name of the column added when `JoinOptions::indicator` is set.
pub const INDICATOR_COLUMN: &str = "_merge";

/// Which unmatched rows a join keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    /// Matched rows only.
    #[default]
    Inner,
    /// Every left row; right columns are null where nothing matched.
    Left,
    /// Every right row; left columns are null where nothing matched.
    Right,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "inner",
            JoinType::Left => "left",
            JoinType::Right => "right",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinType {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inner" => Ok(JoinType::Inner),
            "left" => Ok(JoinType::Left),
            "right" => Ok(JoinType::Right),
            other => Err(OpError::InvalidJoinType(other.to_string())),
        }
    }
}

/// Engine-specific join options passed through by the merge operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    /// Suffixes for overlapping non-key column names, `(left, right)`.
    pub suffixes: (String, String),

    /// Sort the output by the join key columns.
    pub sort: bool,

    /// Append an `_merge` column telling where each row came from.
    pub indicator: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            suffixes: ("_x".to_string(), "_y".to_string()),
            sort: false,
            indicator: false,
        }
    }
}

impl JoinOptions {
    pub fn with_suffixes(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.suffixes = (left.into(), right.into());
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_indicator(mut self, indicator: bool) -> Self {
        self.indicator = indicator;
        self
    }
}
