//! Independent solves over many instances.
//!
//! Each instance gets its own engine and table, so instances never share
//! state. With the `parallel` feature the instances fan out over rayon's
//! pool; results always come back in input order.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::marshal::ItemBuffers;
use crate::solve_with;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Solve every instance with the same configuration.
#[cfg(feature = "parallel")]
pub fn solve_batch(instances: &[ItemBuffers], config: &SolverConfig) -> Vec<Result<f64>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_batch", instances = instances.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    instances
        .par_iter()
        .map(|items| solve_with(items, config))
        .collect()
}

/// Solve every instance with the same configuration.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch(instances: &[ItemBuffers], config: &SolverConfig) -> Vec<Result<f64>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_batch", instances = instances.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    instances
        .iter()
        .map(|items| solve_with(items, config))
        .collect()
}
