#![forbid(unsafe_code)]
//! wrangle-core: the table type and shared configuration.
//!
//! Tables are polars `DataFrame`s. This crate does no file IO and has no
//! operators; the engine crate joins, projects and fills tables, and the IO
//! crate converts them to and from files.

pub mod config;
pub mod error;

pub use error::{Error, Result};

/// In-memory table passed between operators.
pub type Table = polars::prelude::DataFrame;
