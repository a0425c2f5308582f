//! Rejection-sampling scatter of markers into a region.
//!
//! The focus-map screen calls [`scatter_positions`] once per layout with
//! the roster size. Candidates are drawn uniformly from the region and any
//! candidate closer than `min_distance` to an already-accepted marker is
//! discarded, so no two markers on screen overlap. A shared attempt budget
//! bounds the loop; when it runs out the call reports
//! [`ScatterError::AttemptsExhausted`] instead of spinning.

use crate::{
    config::ScatterConfig, error::ScatterError, position::PositionSet, region::Region,
};
use glam::Vec2;
use rand::Rng;
use tracing::{debug, trace};

/// Scatters `count` markers into `region`, pairwise separated by at least
/// `cfg.min_distance`.
///
/// Accepted markers are returned in acceptance order. `count = 0` returns
/// an empty set without touching the RNG; a single marker is accepted on
/// the first draw since there is nothing to collide with.
///
/// ### Parameters
/// - `count` - Number of markers to place.
/// - `region` - Band the markers must land in.
/// - `cfg` - Separation distance and attempt budget.
/// - `rng` - Randomness source; pass a seeded RNG for reproducible layouts.
///
/// ### Returns
/// A [`PositionSet`] of exactly `count` markers, or
/// [`ScatterError::AttemptsExhausted`] when `cfg.max_attempts` draws were
/// not enough to seat them all.
pub fn scatter_positions(
    count: usize,
    region: &Region,
    cfg: &ScatterConfig,
    rng: &mut impl Rng,
) -> Result<PositionSet, ScatterError> {
    // Squared separation distance for candidate comparison.
    let min_d2 = cfg.min_distance * cfg.min_distance;

    let mut accepted: Vec<Vec2> = Vec::with_capacity(count);
    let mut attempts: u32 = 0;

    while accepted.len() < count {
        if attempts == cfg.max_attempts {
            debug!(
                requested = count,
                placed = accepted.len(),
                attempts,
                "scatter gave up"
            );
            return Err(ScatterError::AttemptsExhausted {
                requested: count,
                placed: accepted.len(),
                attempts,
            });
        }
        attempts += 1;

        let candidate = region.sample(rng);

        if accepted
            .iter()
            .any(|p| (*p - candidate).length_squared() < min_d2)
        {
            trace!(attempt = attempts, "candidate too close, rejected");
            continue;
        }

        accepted.push(candidate);
    }

    debug!(count, attempts, "scatter complete");
    Ok(PositionSet::from_positions(accepted))
}

/// Places one more marker against an existing layout.
///
/// This is the incremental form of [`scatter_positions`]: the candidate
/// loop runs with its own `cfg.max_attempts` budget and the accepted point
/// keeps at least `cfg.min_distance` to every point in `existing`.
pub fn place_one(
    existing: &[Vec2],
    region: &Region,
    cfg: &ScatterConfig,
    rng: &mut impl Rng,
) -> Result<Vec2, ScatterError> {
    let min_d2 = cfg.min_distance * cfg.min_distance;

    let mut attempts: u32 = 0;
    while attempts < cfg.max_attempts {
        attempts += 1;

        let candidate = region.sample(rng);
        if existing
            .iter()
            .all(|p| (*p - candidate).length_squared() >= min_d2)
        {
            return Ok(candidate);
        }
        trace!(attempt = attempts, "candidate too close, rejected");
    }

    Err(ScatterError::AttemptsExhausted {
        requested: existing.len() + 1,
        placed: existing.len(),
        attempts,
    })
}
