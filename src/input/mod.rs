//! Input module
//!
//! Handles CSV export loading into name-keyed raw rows.

pub mod csv_file;

pub use csv_file::{read_rows, LoadError, LoadResult, RawRow};
