//! Assorted sizing helpers.

/// Default upper bound on DP table cells (2 GiB of `f64`).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 28;

/// Number of cells in a `rows × columns` table, or `None` on overflow.
#[inline]
pub fn table_cells(rows: usize, columns: usize) -> Option<usize> {
    rows.checked_mul(columns)
}

/// Table shape `(rows, columns)` for `items` items and `capacity`.
///
/// `None` when either dimension overflows `usize`.
#[inline]
pub fn table_shape(items: usize, capacity: usize) -> Option<(usize, usize)> {
    Some((items.checked_add(1)?, capacity.checked_add(1)?))
}
