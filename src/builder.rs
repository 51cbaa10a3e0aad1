use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::config::{SolverConfig, TableMode};
use crate::{DpEngine, LayeredProblem};

pub struct DpEngineBuilder<P: LayeredProblem> {
    problem: P,
    config: SolverConfig,
}

impl<P: LayeredProblem> DpEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            config: SolverConfig::default(),
        }
    }
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_table_mode(mut self, mode: TableMode) -> Self {
        self.config.mode = mode;
        self
    }
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.config.max_cells = max_cells;
        self
    }
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.config.cancel = Some(flag);
        self
    }
    pub fn build(self) -> DpEngine<P> {
        DpEngine::with_config(self.problem, self.config)
    }
}
