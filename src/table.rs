//! Columnar access to stage tables.
//!
//! Plotting and export collaborators consume tables as ordered, named
//! channels of equal length. Each stage's table exposes exactly its own
//! column set, in pipeline order.

use alloc::vec::Vec;

/// A named channel: column name and its samples.
pub type Column<'a> = (&'static str, &'a [f64]);

/// A time-indexed table of equal-length numeric channels.
pub trait Table {
    /// Number of samples (rows).
    fn len(&self) -> usize;

    /// All channels in column order.
    fn columns(&self) -> Vec<Column<'_>>;

    /// Check if the table has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a channel by name.
    fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    /// Column names in order.
    fn column_names(&self) -> Vec<&'static str> {
        self.columns().into_iter().map(|(n, _)| n).collect()
    }
}
