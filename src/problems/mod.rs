//! Problem implementations for the DP engine.
//!
//! These modules show how to implement [`LayeredProblem`](crate::traits::LayeredProblem)
//! for concrete dynamic programs:
//! - [`knapsack`] : 0/1 knapsack over marshaled item buffers.

pub mod knapsack;
