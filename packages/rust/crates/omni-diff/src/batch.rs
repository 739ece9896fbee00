//! Batch diffing - parallel evaluation of independent document pairs.
//!
//! Each request is diffed on the rayon pool. Requests share nothing, so a
//! failure in one (a limit exceeded) is recorded and the rest still run.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::engine::LineDiffEngine;
use crate::error::DiffError;
use crate::types::{DiffRequest, LineDiffResult};

/// Outcome of a batch diff.
#[derive(Debug, Default)]
pub struct BatchDiffReport {
    /// Number of requests processed
    pub processed: usize,
    /// Number of requests whose documents differ
    pub changed: usize,
    /// Successful results in request order (id, result)
    pub results: Vec<(String, LineDiffResult)>,
    /// Errors encountered (id -> error message)
    pub errors: HashMap<String, String>,
}

impl BatchDiffReport {
    /// Look up the result for a request id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineDiffResult> {
        self.results
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, result)| result)
    }
}

impl LineDiffEngine {
    /// Diff many document pairs in parallel.
    ///
    /// Uses a dedicated pool of `config.workers` threads when that is
    /// non-zero, otherwise the rayon global pool.
    #[must_use]
    pub fn compute_batch(&self, requests: &[DiffRequest]) -> BatchDiffReport {
        let outcomes = if self.config().workers > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.config().workers)
                .build()
            {
                Ok(pool) => pool.install(|| self.run_all(requests)),
                Err(e) => {
                    log::warn!("Falling back to global rayon pool: {e}");
                    self.run_all(requests)
                }
            }
        } else {
            self.run_all(requests)
        };

        let mut report = BatchDiffReport {
            processed: outcomes.len(),
            ..Default::default()
        };

        for (id, outcome) in outcomes {
            match outcome {
                Ok(result) => {
                    if result.has_changes() {
                        report.changed += 1;
                    }
                    report.results.push((id, result));
                }
                Err(e) => {
                    report.errors.insert(id, e.to_string());
                }
            }
        }

        log::debug!(
            "Batch diff: {} processed, {} changed, {} failed",
            report.processed,
            report.changed,
            report.errors.len()
        );

        report
    }

    fn run_all(&self, requests: &[DiffRequest]) -> Vec<(String, Result<LineDiffResult, DiffError>)> {
        requests
            .par_iter()
            .map(|req| (req.id.clone(), self.compute(&req.original, &req.modified)))
            .collect()
    }
}
