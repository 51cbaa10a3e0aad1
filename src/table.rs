//! Contiguous row-major DP table.
//!
//! A single `Vec<T>` holds all `rows × columns` cells; row `i` starts at
//! offset `i * columns`. Allocation is fallible and bounded so oversized
//! requests surface as [`KnapsackError::ResourceExhausted`] instead of an
//! allocator abort.

use crate::error::{KnapsackError, Result};
use crate::utils::table_cells;

/// Flat `rows × columns` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DpTable<T> {
    cells: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Copy> DpTable<T> {
    /// Allocate a table filled with `fill`.
    ///
    /// Fails when the cell count overflows, exceeds `max_cells`, or the
    /// allocator refuses the reservation.
    pub fn allocate(rows: usize, columns: usize, max_cells: usize, fill: T) -> Result<Self> {
        let exhausted = || KnapsackError::ResourceExhausted {
            rows,
            columns,
            limit: max_cells,
        };
        let cells = table_cells(rows, columns).ok_or_else(exhausted)?;
        if cells > max_cells {
            #[cfg(feature = "tracing")]
            tracing::warn!(rows, columns, cells, max_cells, "DP table exceeds cell limit");
            return Err(exhausted());
        }

        let mut buf = Vec::new();
        if buf.try_reserve_exact(cells).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!(rows, columns, cells, "DP table allocation refused");
            return Err(exhausted());
        }
        buf.resize(cells, fill);

        Ok(Self {
            cells: buf,
            rows,
            columns,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell `(row, column)`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> T {
        assert!(column < self.columns, "column {column} out of range");
        self.cells[row * self.columns + column]
    }

    /// Borrow row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.columns;
        &self.cells[start..start + self.columns]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.columns;
        &mut self.cells[start..start + self.columns]
    }

    /// Borrow row `src` immutably and row `dst` mutably.
    ///
    /// # Panics
    /// Panics if `src == dst` or either row is out of range.
    #[inline]
    pub fn rows_pair_mut(&mut self, src: usize, dst: usize) -> (&[T], &mut [T]) {
        assert!(src != dst, "row {src} cannot feed itself");
        assert!(src < self.rows && dst < self.rows, "row out of range");
        let cols = self.columns;
        if src < dst {
            let (head, tail) = self.cells.split_at_mut(dst * cols);
            (&head[src * cols..(src + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.cells.split_at_mut(src * cols);
            (&tail[..cols], &mut head[dst * cols..(dst + 1) * cols])
        }
    }

    /// The final row.
    #[inline]
    pub fn last_row(&self) -> &[T] {
        self.row(self.rows - 1)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}
