//! Socle scan and stability scoring.
//!
//! [`examine`] discovers the socles around a ritual center and turns their
//! layout into a [`RitualConfiguration`]:
//!
//! 1. Query socle markers within the search radius on the center's
//!    elevation.
//! 2. Unless empty socles are requested, drop markers whose actor is gone
//!    or holds nothing. Dropped socles take no part in any distance.
//! 3. Per socle, record the mean and minimum distance to the other
//!    retained socles and the distance to the center.
//! 4. Over every pairwise distance (seeded with a single `0` when there
//!    are none), compute mean and population standard deviation.
//! 5. Start from the base stability, subtract the spread penalty, then
//!    scale by `min(mean / 75 + 1.5 / sd, 1.25)`. A zero deviation makes
//!    the scale its ceiling.
//! 6. Per socle, in order: halve stability if it sits on the center,
//!    shave it if crowded, otherwise move it toward 100 by the socle
//!    type's modifier.
//!
//! The scan is a pure function of world state. Socle order is the order
//! returned by the spatial index; shuffling happens only at ritual start.

use ritual_types::{BlockPos, RitualConfiguration, SocleEntry, SocleType};
use ritual_world::geometry;
use ritual_world::{ActorResolver, SpatialIndex};
use tracing::debug;

use crate::config::ScanConfig;

/// Upper bound that the per-socle type modifiers approach.
const MAX_STABILITY: f64 = 100.0;

/// Scan the socles around `center` and score their layout.
///
/// With `include_empty` set, every marker counts as a socle, including
/// markers whose actor is missing. Otherwise only socles holding content
/// are retained.
pub fn examine<W>(
    world: &W,
    center: BlockPos,
    include_empty: bool,
    config: &ScanConfig,
) -> RitualConfiguration
where
    W: SpatialIndex + ActorResolver + ?Sized,
{
    let candidates = world.query_markers(center, config.search_radius, config.same_elevation_only);
    let candidate_count = candidates.len();

    let retained: Vec<BlockPos> = if include_empty {
        candidates
    } else {
        candidates
            .into_iter()
            .filter(|position| {
                world
                    .resolve(*position)
                    .is_some_and(|socle| socle.has_content())
            })
            .collect()
    };

    let (socles, mut all_distances) = measure(&retained, center);
    if all_distances.is_empty() {
        all_distances.push(0.0);
    }

    let mean = geometry::mean(&all_distances).unwrap_or(0.0);
    let standard_deviation = geometry::standard_deviation(mean, &all_distances).unwrap_or(0.0);

    let mut stability = config.base_stability;
    if mean > config.distance_penalty_threshold {
        stability -= (mean - config.distance_penalty_threshold) * config.distance_penalty_factor;
    }
    stability *= spread_scale(mean, standard_deviation, config);

    for socle in &socles {
        stability = adjust_for_placement(stability, socle, world.socle_type(socle.position), config);
    }

    let length = ritual_length(socles.len(), config);

    debug!(
        %center,
        candidates = candidate_count,
        retained = socles.len(),
        mean,
        standard_deviation,
        stability,
        length,
        "Socle configuration examined"
    );

    RitualConfiguration::new(stability, length, socles)
}

/// Ritual length in ticks for `socle_count` socles.
pub fn ritual_length(socle_count: usize, config: &ScanConfig) -> u32 {
    let count = u32::try_from(socle_count).unwrap_or(u32::MAX);
    config
        .base_length
        .saturating_add(config.ticks_per_socle.saturating_mul(count))
}

/// Build the socle entries and collect every ordered pairwise distance.
fn measure(retained: &[BlockPos], center: BlockPos) -> (Vec<SocleEntry>, Vec<f64>) {
    let mut socles = Vec::with_capacity(retained.len());
    let mut all_distances =
        Vec::with_capacity(retained.len().saturating_mul(retained.len().saturating_sub(1)));

    for (index, &position) in retained.iter().enumerate() {
        let mut total = 0.0;
        let mut others: u32 = 0;
        let mut min_distance = f64::MAX;

        for (other_index, &other) in retained.iter().enumerate() {
            if other_index == index {
                continue;
            }
            let distance = geometry::distance(position, other);
            total += distance;
            others = others.saturating_add(1);
            all_distances.push(distance);
            min_distance = min_distance.min(distance);
        }

        // A lone socle has no neighbours to average over.
        let mean_distance = if others == 0 {
            0.0
        } else {
            total / f64::from(others)
        };

        socles.push(SocleEntry {
            position,
            mean_distance,
            min_distance,
            core_distance: geometry::distance(position, center),
        });
    }

    (socles, all_distances)
}

/// The multiplier rewarding a moderate spread, capped at
/// `config.spread_scale_cap`.
fn spread_scale(mean: f64, standard_deviation: f64, config: &ScanConfig) -> f64 {
    if standard_deviation <= 0.0 || !standard_deviation.is_finite() {
        return config.spread_scale_cap;
    }
    (mean / config.mean_scale_divisor + config.spread_numerator / standard_deviation)
        .min(config.spread_scale_cap)
}

/// Apply the placement rule for a single socle.
fn adjust_for_placement(
    stability: f64,
    socle: &SocleEntry,
    socle_type: Option<SocleType>,
    config: &ScanConfig,
) -> f64 {
    if socle.core_distance < config.core_proximity_threshold {
        stability * config.core_proximity_factor
    } else if socle.min_distance < config.crowding_threshold {
        stability * config.crowding_factor
    } else {
        let modifier = socle_type.map_or(0.0, SocleType::stability_modifier);
        (MAX_STABILITY - stability).mul_add(modifier, stability)
    }
}
