//! Format-specific readers producing a whole `Table`.

pub mod binary;
pub mod csv;
pub mod spreadsheet;
