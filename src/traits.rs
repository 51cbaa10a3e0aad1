//! Core trait for row-by-row dynamic programs.
//!
//! To run a recurrence through [`DpEngine`](crate::engine::DpEngine),
//! implement [`LayeredProblem`] for a struct that captures the instance data.
//!
//! The engine only relies on these primitives:
//! - Layered structure: rows 0..=T, each row derived from the previous one.
//! - Fixed width: every row has `last_column() + 1` cells.
//! - Extraction: the answer is read off the final row.
//!
//! Because every row depends only on its predecessor, the engine is free to
//! keep the whole table or just two rows; implementations must not care which.

/// A dynamic program whose table is filled one row at a time.
///
/// Semantics:
/// - There are `T = num_layers()` transitions, so `T + 1` rows.
/// - `init_row` writes row 0.
/// - `fill_row(i, prev, next)` writes row `i + 1` from row `i`.
/// - `extract` maps row `T` to the result.
pub trait LayeredProblem {
    /// Element type stored in each table cell.
    type Cell: Copy + Default;

    /// Result extracted from the final row.
    type Output;

    /// Number of transitions `T` (the table has `T + 1` rows).
    fn num_layers(&self) -> usize;

    /// Index of the last column; rows have `last_column() + 1` cells.
    fn last_column(&self) -> usize;

    /// Write the base row. `row0.len() == last_column() + 1`.
    fn init_row(&self, row0: &mut [Self::Cell]);

    /// Compute row `layer + 1` from row `layer`.
    ///
    /// Requirements:
    /// - Must only read `prev` and fixed problem data.
    /// - Must overwrite every cell of `next`; its prior contents are
    ///   unspecified.
    fn fill_row(&self, layer: usize, prev: &[Self::Cell], next: &mut [Self::Cell]);

    /// Read the answer from row `T`.
    fn extract(&self, last_row: &[Self::Cell]) -> Self::Output;
}
