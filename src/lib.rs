//! Bottom-up 0/1 knapsack solver
//!
//! This crate computes the maximum total value obtainable by choosing a subset
//! of items, each at most once, whose total weight stays within a capacity.
//!
//! ## Core idea
//! 1. Marshal caller data into fixed-width buffers with [`ItemBuffers`]:
//!    `f64` values, `usize` weights, `usize` capacity. All validation lives
//!    here.
//! 2. Run the row-by-row recurrence with [`DpEngine`] over a flat contiguous
//!    table ([`table::DpTable`]) of `(items + 1) × (capacity + 1)` cells.
//! 3. Read the answer from the last cell of the last row.
//!
//! Each call allocates its own table and drops it on return; there is no
//! shared state, so concurrent callers need no coordination.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{solve, KnapsackError};
//!
//! let best = solve(&[60.0, 100.0, 120.0], &[10, 20, 30], 50).unwrap();
//! assert_eq!(best, 220.0);
//!
//! let err = solve(&[1.0, 2.0, 3.0], &[1, 2], 5).unwrap_err();
//! assert!(matches!(err, KnapsackError::InvalidArgument { .. }));
//! ```
//!
//! ## Cargo features
//! - `parallel`: [`batch::solve_batch`] fans out over rayon.
//! - `tracing`: spans around runs, allocations and rows.
//! - `heavy`: enables long-running stress tests.

pub mod batch;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod marshal;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::config::{SolverConfig, TableMode};
pub use crate::engine::DpEngine;
pub use crate::error::{KnapsackError, Result};
pub use crate::marshal::ItemBuffers;
pub use crate::traits::LayeredProblem;

use num_traits::ToPrimitive;

use crate::problems::knapsack::KnapsackProblem;

/// Maximum total value of a subset of items fitting in `capacity`.
///
/// `values` and `weights` are parallel sequences of any primitive numeric
/// type. Fails with [`KnapsackError::InvalidArgument`] on mismatched lengths
/// or a negative/fractional weight or capacity, and with
/// [`KnapsackError::ResourceExhausted`] when the table is too large.
pub fn solve<V, W, C>(values: &[V], weights: &[W], capacity: C) -> Result<f64>
where
    V: ToPrimitive,
    W: ToPrimitive,
    C: ToPrimitive,
{
    let items = ItemBuffers::marshal(values, weights, capacity)?;
    solve_with(&items, &SolverConfig::default())
}

/// Solve already-marshaled buffers under an explicit configuration.
pub fn solve_with(items: &ItemBuffers, config: &SolverConfig) -> Result<f64> {
    DpEngine::with_config(KnapsackProblem::new(items), config.clone()).run()
}
