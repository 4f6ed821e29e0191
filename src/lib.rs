#![forbid(unsafe_code)]
//! wrangle: composable tabular pipeline operators.
//!
//! Re-exports the operator layer together with the table type it works on.
//! See `wrangle-operators` for `merge`, `load_table`, `write_table` and
//! `fill_missing`.

pub use wrangle_core as core;
pub use wrangle_engine as engine;
pub use wrangle_io as io;
pub use wrangle_operators as operators;

pub use wrangle_core::Table;
pub use wrangle_operators::{
    fill_missing, load_table, merge, write_table, Format, JoinOptions, JoinType, KeySpec,
    LoadOptions, WriteOptions, KEEP_ALL,
};
