//! Configuration for parallel search execution.

/// Configuration for a parallel search call.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of worker threads to spawn (treated as at least 1).
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    /// Set the number of workers, clamped to at least 1.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}
