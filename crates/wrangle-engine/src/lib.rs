#![forbid(unsafe_code)]
//! wrangle-engine: the tabular engine behind the pipeline operators.
//!
//! Every operator here is a thin adapter over polars: row matching, column
//! selection and null filling are polars' own `join`, `select` and
//! `fill_null`. What lives in this crate is the naming policy around them
//! (coalesced same-name keys, overlap suffixes, the `_merge` indicator).
//!
//! - Pure and synchronous; every operator returns a fresh `DataFrame`.
//! - The operator layer in `wrangle-operators` validates user input and then
//!   delegates here; nothing in this crate formats user-facing key errors.

pub mod fill;
pub mod join;
pub mod project;
pub mod traits;

pub use fill::FillNull;
pub use join::{EquiJoin, JoinOptions, JoinType, INDICATOR_COLUMN};
pub use project::Project;
pub use traits::{OpError, Operator};
