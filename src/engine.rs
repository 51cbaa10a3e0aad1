//! Generic bottom-up DP engine.
//!
//! The engine allocates a table sized by the problem, writes the base row and
//! then fills rows in order. All sizing checks happen before the first row is
//! computed; the only thing observed between rows is the optional cancel flag.
//!
//! The engine is completely generic over implementations of [`LayeredProblem`].

use std::sync::atomic::Ordering;

use crate::config::{SolverConfig, TableMode};
use crate::error::{KnapsackError, Result};
use crate::table::DpTable;
use crate::traits::LayeredProblem;
use crate::utils::table_shape;

/// Bottom-up DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{DpEngine, ItemBuffers, problems::knapsack::KnapsackProblem};
///
/// let items = ItemBuffers::new(vec![60.0, 100.0, 120.0], vec![10, 20, 30], 50).unwrap();
/// let engine = DpEngine::new(KnapsackProblem::new(&items));
/// assert_eq!(engine.run().unwrap(), 220.0);
/// ```
pub struct DpEngine<P: LayeredProblem> {
    problem: P,
    config: SolverConfig,
}

impl<P: LayeredProblem> DpEngine<P> {
    /// Create an engine with the default configuration.
    pub fn new(problem: P) -> Self {
        Self::with_config(problem, SolverConfig::default())
    }

    pub fn with_config(problem: P, config: SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the recurrence in the configured [`TableMode`] and extract the result.
    pub fn run(&self) -> Result<P::Output> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "dp_run",
            layers = self.problem.num_layers(),
            mode = self.config.mode.as_str()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match self.config.mode {
            TableMode::Full => {
                let table = self.run_table()?;
                Ok(self.problem.extract(table.last_row()))
            }
            TableMode::Rolling => self.run_rolling(),
        }
    }

    /// Fill and return the complete table, regardless of the configured mode.
    pub fn run_table(&self) -> Result<DpTable<P::Cell>> {
        let (rows, columns) = self.shape()?;
        let mut table = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("allocate_table", rows, columns);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            DpTable::allocate(rows, columns, self.config.max_cells, P::Cell::default())?
        };

        self.problem.init_row(table.row_mut(0));
        for layer in 0..self.problem.num_layers() {
            self.check_cancelled(layer)?;
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_row", layer);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let (prev, next) = table.rows_pair_mut(layer, layer + 1);
            self.problem.fill_row(layer, prev, next);
        }
        Ok(table)
    }

    /// Two-row variant: same recurrence, O(width) memory.
    ///
    /// Rows alternate between the two slots, so row `i` lives in slot `i % 2`.
    fn run_rolling(&self) -> Result<P::Output> {
        let (_rows, columns) = self.shape()?;
        let mut slots = DpTable::allocate(2, columns, self.config.max_cells, P::Cell::default())?;

        self.problem.init_row(slots.row_mut(0));
        let layers = self.problem.num_layers();
        for layer in 0..layers {
            self.check_cancelled(layer)?;
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_row", layer);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let (prev, next) = slots.rows_pair_mut(layer % 2, (layer + 1) % 2);
            self.problem.fill_row(layer, prev, next);
        }
        Ok(self.problem.extract(slots.row(layers % 2)))
    }

    fn shape(&self) -> Result<(usize, usize)> {
        let layers = self.problem.num_layers();
        let last = self.problem.last_column();
        table_shape(layers, last).ok_or(KnapsackError::ResourceExhausted {
            rows: layers.saturating_add(1),
            columns: last.saturating_add(1),
            limit: self.config.max_cells,
        })
    }

    #[inline]
    fn check_cancelled(&self, completed_rows: usize) -> Result<()> {
        match &self.config.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(completed_rows, "dp run cancelled");
                Err(KnapsackError::Cancelled { completed_rows })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    /// Row `i` holds `i * j` in column `j`.
    struct Ramp {
        t: usize,
        w: usize,
    }

    impl LayeredProblem for Ramp {
        type Cell = u64;
        type Output = u64;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn last_column(&self) -> usize {
            self.w
        }
        fn init_row(&self, row0: &mut [u64]) {
            row0.fill(0);
        }
        fn fill_row(&self, _layer: usize, prev: &[u64], next: &mut [u64]) {
            for (j, (n, p)) in next.iter_mut().zip(prev).enumerate() {
                *n = p + j as u64;
            }
        }
        fn extract(&self, last_row: &[u64]) -> u64 {
            last_row.iter().sum()
        }
    }

    fn rolling() -> SolverConfig {
        SolverConfig {
            mode: TableMode::Rolling,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn full_table_shape_and_contents() {
        let engine = DpEngine::new(Ramp { t: 3, w: 2 });
        let table = engine.run_table().unwrap();
        assert_eq!(table.rows(), 4);
        assert_eq!(table.columns(), 3);
        assert_eq!(table.row(3), &[0, 3, 6]);
        assert_eq!(engine.run().unwrap(), 9);
    }

    #[test]
    fn rolling_matches_full_for_odd_and_even_layers() {
        for t in 0..6 {
            let full = DpEngine::new(Ramp { t, w: 4 }).run().unwrap();
            let roll = DpEngine::with_config(Ramp { t, w: 4 }, rolling()).run().unwrap();
            assert_eq!(full, roll, "t={t}");
        }
    }

    #[test]
    fn zero_layers_extracts_base_row() {
        let engine = DpEngine::new(Ramp { t: 0, w: 5 });
        assert_eq!(engine.run().unwrap(), 0);
        assert_eq!(engine.run_table().unwrap().rows(), 1);
    }

    #[test]
    fn preset_cancel_flag_stops_before_first_row() {
        let flag = Arc::new(AtomicBool::new(true));
        let config = SolverConfig {
            cancel: Some(flag),
            ..SolverConfig::default()
        };
        let err = DpEngine::with_config(Ramp { t: 3, w: 2 }, config).run().unwrap_err();
        assert_eq!(err, KnapsackError::Cancelled { completed_rows: 0 });
    }

    #[test]
    fn unset_cancel_flag_is_ignored() {
        let config = SolverConfig {
            cancel: Some(Arc::new(AtomicBool::new(false))),
            ..rolling()
        };
        assert_eq!(DpEngine::with_config(Ramp { t: 3, w: 2 }, config).run().unwrap(), 9);
    }

    #[test]
    fn cell_limit_applies_per_mode() {
        let tight = SolverConfig {
            max_cells: 6,
            ..SolverConfig::default()
        };
        let err = DpEngine::with_config(Ramp { t: 3, w: 2 }, tight.clone())
            .run()
            .unwrap_err();
        assert!(err.is_resource_exhausted());

        let tight_rolling = SolverConfig {
            mode: TableMode::Rolling,
            ..tight
        };
        assert_eq!(
            DpEngine::with_config(Ramp { t: 3, w: 2 }, tight_rolling).run().unwrap(),
            9
        );
    }

    #[test]
    fn unrepresentable_width_is_exhausted() {
        let err = DpEngine::new(Ramp { t: 1, w: usize::MAX }).run().unwrap_err();
        assert!(err.is_resource_exhausted());
    }
}
