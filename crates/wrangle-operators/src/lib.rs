#![forbid(unsafe_code)]
//! wrangle-operators: the helper functions pipelines are composed from.
//!
//! - [`merge`]: check that the join keys exist on both sides, join, and
//!   optionally project the result;
//! - [`load_table`] / [`write_table`]: read or write a table in one of the
//!   supported file formats;
//! - [`fill_missing`]: replace missing values column by column.
//!
//! Every operator returns a new table. The join, projection, fill and codec
//! work is delegated to `wrangle-engine` and `wrangle-io`; their errors reach
//! the caller unchanged.

pub mod error;
pub mod impute;
pub mod io;
pub mod keys;
pub mod merge;

pub use error::{Error, Result, Side};
pub use impute::fill_missing;
pub use io::{load_table, write_table};
pub use keys::KeySpec;
pub use merge::{merge, MergeOperator, KEEP_ALL};

pub use wrangle_engine::{JoinOptions, JoinType};
pub use wrangle_io::{Format, LoadOptions, WriteOptions};
