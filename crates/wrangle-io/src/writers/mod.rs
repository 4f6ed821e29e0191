//! Format-specific writers.

pub mod binary;
pub mod csv;
pub mod spreadsheet;
