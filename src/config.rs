//! Solver configuration.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::utils::DEFAULT_MAX_TABLE_CELLS;

/// How much of the DP table the engine keeps live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    /// Materialise all `(T + 1) × (W + 1)` cells.
    #[default]
    Full,
    /// Keep only the previous and current row.
    Rolling,
}

impl TableMode {
    /// Parse `full` / `rolling`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(TableMode::Full),
            "rolling" => Some(TableMode::Rolling),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TableMode::Full => "full",
            TableMode::Rolling => "rolling",
        }
    }
}

/// Knobs for a single engine run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Table layout.
    pub mode: TableMode,
    /// Largest number of cells the engine may allocate.
    pub max_cells: usize,
    /// Checked between rows; when set the run ends with `Cancelled`.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: TableMode::Full,
            max_cells: DEFAULT_MAX_TABLE_CELLS,
            cancel: None,
        }
    }
}
