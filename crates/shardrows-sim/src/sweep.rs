//! Sweep controller: one depth per page, assembled into the lookup table.

use std::time::Instant;

use rayon::prelude::*;
use shardrows_core::errors::SimulationError;
use shardrows_core::tracing::metrics;
use shardrows_core::traits::{Cancellable, CancellationToken};
use shardrows_core::types::{DepthResult, ShardFactorTable, SimulationConfig};
use tracing::{debug, info, info_span};

use crate::evaluator::{DepthEvaluator, TrialSource};
use crate::rng;

/// Builds a [`ShardFactorTable`] for a configuration.
///
/// Depths are evaluated in parallel; rows come back in page order. Any
/// failing depth fails the whole build.
#[derive(Debug)]
pub struct SweepController<'a> {
    config: &'a SimulationConfig,
    cancellation: Option<CancellationToken>,
}

impl<'a> SweepController<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    /// Abort the build with `Cancelled` once `token` is cancelled. Checked
    /// before each depth starts.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Build the table from random trials.
    pub fn run(&self) -> Result<ShardFactorTable, SimulationError> {
        self.config.validate()?;
        let master_seed = rng::resolve_master_seed(self.config.seed)?;
        debug!(
            { metrics::MASTER_SEED } = master_seed,
            seeded = self.config.seed.is_some(),
            "resolved master seed"
        );
        let evaluator = DepthEvaluator::random(self.config, master_seed)?;
        self.run_with(&evaluator)
    }

    /// Build the table with a caller-supplied evaluator.
    ///
    /// The table records the controller's configuration, so the evaluator
    /// must sample with the same trial count, accuracy and rounding.
    pub fn run_with<S>(
        &self,
        evaluator: &DepthEvaluator<S>,
    ) -> Result<ShardFactorTable, SimulationError>
    where
        S: TrialSource + Sync,
    {
        self.config.validate()?;
        self.check_evaluator(evaluator)?;
        let depths = self.depths()?;

        let _span = info_span!(
            "build_table",
            { metrics::SHARD_COUNT } = self.config.shard_count,
            { metrics::PAGES } = self.config.page_count,
            { metrics::TRIALS } = self.config.trial_count,
            { metrics::ACCURACY } = self.config.accuracy
        )
        .entered();
        let started = Instant::now();

        let rows = match self.config.effective_threads() {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        SimulationError::SimulationFailure(format!("worker pool: {e}"))
                    })?;
                pool.install(|| self.evaluate_all(evaluator, &depths))?
            }
            None => self.evaluate_all(evaluator, &depths)?,
        };

        info!(
            { metrics::ROWS } = rows.len(),
            { metrics::ELAPSED_MS } = started.elapsed().as_millis() as u64,
            "built shard factor table"
        );
        Ok(ShardFactorTable::new(self.config, rows))
    }

    fn check_evaluator<S: TrialSource>(&self, evaluator: &DepthEvaluator<S>) -> Result<(), SimulationError> {
        if evaluator.trial_count() != self.config.trial_count {
            return Err(SimulationError::invalid(
                "trial_count",
                format!(
                    "evaluator samples {} trials, table declares {}",
                    evaluator.trial_count(),
                    self.config.trial_count
                ),
            ));
        }
        if evaluator.accuracy() != self.config.accuracy {
            return Err(SimulationError::invalid(
                "accuracy",
                format!(
                    "evaluator targets {}%, table declares {}%",
                    evaluator.accuracy(),
                    self.config.accuracy
                ),
            ));
        }
        if evaluator.rounding() != self.config.rounding {
            return Err(SimulationError::invalid(
                "rounding",
                format!(
                    "evaluator rounds {:?}, table declares {:?}",
                    evaluator.rounding(),
                    self.config.rounding
                ),
            ));
        }
        Ok(())
    }

    /// `page * rows_per_page` for pages `1..=page_count`.
    fn depths(&self) -> Result<Vec<u64>, SimulationError> {
        (1..=self.config.page_count)
            .map(|page| {
                self.config.depth_for_page(page).ok_or_else(|| {
                    SimulationError::invalid(
                        "rows_per_page",
                        format!("depth of page {page} overflows"),
                    )
                })
            })
            .collect()
    }

    fn evaluate_all<S>(
        &self,
        evaluator: &DepthEvaluator<S>,
        depths: &[u64],
    ) -> Result<Vec<DepthResult>, SimulationError>
    where
        S: TrialSource + Sync,
    {
        depths
            .par_iter()
            .map(|&depth| {
                self.check_cancelled()?;
                evaluator.evaluate_result(depth)
            })
            .collect()
    }

    fn check_cancelled(&self) -> Result<(), SimulationError> {
        match &self.cancellation {
            Some(token) => token.check(),
            None => Ok(()),
        }
    }
}

/// Build the full table for `config` with random trials.
pub fn build_table(config: &SimulationConfig) -> Result<ShardFactorTable, SimulationError> {
    SweepController::new(config).run()
}
