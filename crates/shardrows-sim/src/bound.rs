//! Sampling-free upper estimate of the shard factor via `statrs`.
//!
//! Each shard's occupancy is Binomial(depth, 1/shards). By the union bound,
//! P(max > m) <= shards * P(Bin > m). The smallest `m` that pushes the
//! right-hand side to `1 - accuracy/100` therefore covers at least
//! `accuracy%` of assignments, so `m / depth` upper-bounds the Monte Carlo
//! answer. The bound is tight when shards are few and depth is large.

use statrs::distribution::{Binomial, DiscreteCDF};

use shardrows_core::errors::SimulationError;
use shardrows_core::types::SimulationConfig;

/// Union-bound shard factor for `depth` documents over `shard_count` shards.
pub fn union_bound_factor(
    depth: u64,
    shard_count: u32,
    accuracy: f64,
) -> Result<f64, SimulationError> {
    if depth == 0 {
        return Err(SimulationError::invalid("depth", "must be at least 1"));
    }
    if shard_count == 0 {
        return Err(SimulationError::invalid("shard_count", "must be at least 1"));
    }
    SimulationConfig::validate_sampling(1, accuracy)?;

    // Subtract before scaling so confidences near 100% keep their digits.
    let miss_budget = (100.0 - accuracy) / 100.0;
    if shard_count == 1 || miss_budget <= 0.0 {
        return Ok(1.0);
    }

    let shards = f64::from(shard_count);
    let occupancy = Binomial::new(1.0 / shards, depth)
        .map_err(|e| SimulationError::SimulationFailure(format!("binomial model: {e}")))?;

    let even_split = depth.div_ceil(u64::from(shard_count));
    for m in even_split..depth {
        // sf is P(Bin > m) evaluated directly; `1 - cdf` rounds tails below
        // ~1e-16 to zero.
        if shards * occupancy.sf(m) <= miss_budget {
            return Ok(m as f64 / depth as f64);
        }
    }
    Ok(1.0)
}
