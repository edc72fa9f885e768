//! Depth evaluator: the statistical core.
//!
//! For one depth, collect `trial_count` max occupancies from a
//! [`TrialSource`], take the confidence order statistic, and convert it to a
//! shard factor under the configured [`RoundingPolicy`].

use std::num::NonZeroU32;
use std::time::Instant;

use rayon::prelude::*;
use shardrows_core::constants::TRIAL_CHUNK_SIZE;
use shardrows_core::errors::SimulationError;
use shardrows_core::types::{DepthResult, RoundingPolicy, SimulationConfig};
use shardrows_core::tracing::metrics;
use tracing::debug;

use crate::rng;
use crate::sample::DepthSample;
use crate::trial::TrialSimulator;

/// Produces the max occupancies of `trial_count` trials at `depth`.
///
/// The production source is [`RandomTrials`]; [`FixedTrials`] replays known
/// outcomes.
pub trait TrialSource {
    fn sample(&self, depth: u64, trial_count: u32) -> Result<DepthSample, SimulationError>;
}

/// Random trials split into fixed-size chunks, one ChaCha stream per chunk,
/// simulated in parallel on the current rayon pool.
#[derive(Debug, Clone)]
pub struct RandomTrials {
    shard_count: NonZeroU32,
    master_seed: u64,
}

impl RandomTrials {
    pub fn new(shard_count: u32, master_seed: u64) -> Result<Self, SimulationError> {
        let shard_count = NonZeroU32::new(shard_count)
            .ok_or_else(|| SimulationError::invalid("shard_count", "must be at least 1"))?;
        Ok(Self {
            shard_count,
            master_seed,
        })
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }
}

impl TrialSource for RandomTrials {
    fn sample(&self, depth: u64, trial_count: u32) -> Result<DepthSample, SimulationError> {
        let depth_seed = rng::depth_seed(self.master_seed, depth);
        let chunks = trial_count.div_ceil(TRIAL_CHUNK_SIZE);

        let per_chunk: Vec<Vec<u64>> = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let start = chunk * TRIAL_CHUNK_SIZE;
                let len = TRIAL_CHUNK_SIZE.min(trial_count - start);
                let mut stream = rng::stream_rng(depth_seed, u64::from(chunk));
                let mut simulator = TrialSimulator::new(self.shard_count);
                (0..len)
                    .map(|_| simulator.run(&mut stream, depth))
                    .collect::<Vec<u64>>()
            })
            .collect();

        Ok(DepthSample::new(depth, per_chunk.into_iter().flatten().collect()))
    }
}

/// Replays recorded max occupancies instead of simulating.
///
/// Asking for more trials than were recorded is a `SimulationFailure`, the
/// same way an exhausted random source would be.
#[derive(Debug, Clone, Default)]
pub struct FixedTrials {
    occupancies: Vec<u64>,
}

impl FixedTrials {
    pub fn new(occupancies: Vec<u64>) -> Self {
        Self { occupancies }
    }

    /// Build from shard factors observed at `depth`
    /// (`occupancy = round(factor * depth)`).
    pub fn from_factors(factors: &[f64], depth: u64) -> Self {
        let depth = depth as f64;
        Self::new(factors.iter().map(|f| (f * depth).round() as u64).collect())
    }
}

impl TrialSource for FixedTrials {
    fn sample(&self, depth: u64, trial_count: u32) -> Result<DepthSample, SimulationError> {
        let wanted = trial_count as usize;
        if wanted > self.occupancies.len() {
            return Err(SimulationError::SimulationFailure(format!(
                "fixed trial source exhausted: {wanted} trials requested, {} recorded",
                self.occupancies.len()
            )));
        }
        Ok(DepthSample::new(depth, self.occupancies[..wanted].to_vec()))
    }
}

/// Evaluates depths against one configuration.
#[derive(Debug, Clone)]
pub struct DepthEvaluator<S = RandomTrials> {
    source: S,
    trial_count: u32,
    accuracy: f64,
    rounding: RoundingPolicy,
}

impl DepthEvaluator<RandomTrials> {
    /// Random trials seeded from `master_seed`.
    pub fn random(config: &SimulationConfig, master_seed: u64) -> Result<Self, SimulationError> {
        let source = RandomTrials::new(config.shard_count, master_seed)?;
        Self::with_source(config, source)
    }
}

impl<S: TrialSource> DepthEvaluator<S> {
    pub fn with_source(config: &SimulationConfig, source: S) -> Result<Self, SimulationError> {
        SimulationConfig::validate_sampling(config.trial_count, config.accuracy)?;
        Ok(Self {
            source,
            trial_count: config.trial_count,
            accuracy: config.accuracy,
            rounding: config.rounding,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn trial_count(&self) -> u32 {
        self.trial_count
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Minimum shard factor that covered `accuracy%` of the trials at `depth`.
    pub fn evaluate(&self, depth: u64) -> Result<f64, SimulationError> {
        if depth == 0 {
            return Err(SimulationError::invalid("depth", "must be at least 1"));
        }
        let started = Instant::now();

        let sample = self.source.sample(depth, self.trial_count)?;
        if sample.len() != self.trial_count as usize {
            return Err(SimulationError::SimulationFailure(format!(
                "expected {} trials at depth {depth}, got {}",
                self.trial_count,
                sample.len()
            )));
        }
        let max_occupancy = sample.order_statistic(self.accuracy)?;
        let shard_factor = self.rounding.apply(max_occupancy, depth);

        debug!(
            { metrics::DEPTH } = depth,
            { metrics::MAX_OCCUPANCY } = max_occupancy,
            { metrics::SHARD_FACTOR } = shard_factor,
            { metrics::ELAPSED_MS } = started.elapsed().as_millis() as u64,
            "evaluated depth"
        );
        Ok(shard_factor)
    }

    pub fn evaluate_result(&self, depth: u64) -> Result<DepthResult, SimulationError> {
        Ok(DepthResult::new(depth, self.evaluate(depth)?))
    }
}

/// Evaluate a single depth with random trials.
///
/// Seeded configs give reproducible output; otherwise a fresh seed is drawn.
pub fn evaluate_depth(depth: u64, config: &SimulationConfig) -> Result<f64, SimulationError> {
    if config.shard_count == 0 {
        return Err(SimulationError::invalid("shard_count", "must be at least 1"));
    }
    let master_seed = rng::resolve_master_seed(config.seed)?;
    DepthEvaluator::random(config, master_seed)?.evaluate(depth)
}
