//! 0/1 knapsack as a layered DP.
//!
//! Layers are items: row `i` holds, for every budget `j` in `0..=capacity`,
//! the best value reachable with the first `i` items. Row 0 and column 0 are
//! zero; for `j >= 1`
//!
//! ```text
//! T[i][j] = T[i-1][j]                                   if w[i-1] > j
//! T[i][j] = max(T[i-1][j], v[i-1] + T[i-1][j - w[i-1]]) otherwise
//! ```
//!
//! and the answer is `T[n][capacity]`.

use crate::marshal::ItemBuffers;
use crate::traits::LayeredProblem;

/// Knapsack instance borrowed from validated buffers.
#[derive(Clone, Copy, Debug)]
pub struct KnapsackProblem<'a> {
    pub items: &'a ItemBuffers,
}

impl<'a> KnapsackProblem<'a> {
    pub fn new(items: &'a ItemBuffers) -> Self {
        Self { items }
    }
}

impl<'a> LayeredProblem for KnapsackProblem<'a> {
    type Cell = f64;
    type Output = f64;

    fn num_layers(&self) -> usize {
        self.items.len()
    }

    fn last_column(&self) -> usize {
        self.items.capacity()
    }

    fn init_row(&self, row0: &mut [f64]) {
        row0.fill(0.0);
    }

    fn fill_row(&self, layer: usize, prev: &[f64], next: &mut [f64]) {
        let value = self.items.values()[layer];
        let weight = self.items.weights()[layer];
        let columns = next.len();

        // Column 0 is the zero budget and never changes.
        next[0] = prev[0];

        // Columns 1..fit are the `weight > j` branch: carry forward.
        let fit = weight.clamp(1, columns);
        next[1..fit].copy_from_slice(&prev[1..fit]);

        for j in fit..columns {
            let take = value + prev[j - weight];
            let skip = prev[j];
            next[j] = if take > skip { take } else { skip };
        }
    }

    fn extract(&self, last_row: &[f64]) -> f64 {
        last_row.last().copied().unwrap_or(0.0)
    }
}
