//! Nearest living entities around a location.

use super::{TargetQuery, TargetingError, rank_by_distance};
use crate::entity::{ActorRef, Location};
use crate::env::SpatialEnv;
use crate::geometry::{Vector3, distance_squared};

/// Returns up to `query.cap()` living entities within `query.range` of
/// `center`, nearest first.
///
/// The oracle's box lookup is re-checked against the exact sphere. The cone
/// and occlusion settings of the query are not used. A detached location
/// yields no targets.
///
/// # Errors
///
/// Returns `OracleError::EntitiesNotAvailable` if the environment lacks an
/// entity oracle.
pub fn nearest(
    env: &SpatialEnv<'_>,
    center: &Location,
    query: &TargetQuery,
) -> Result<Vec<ActorRef>, TargetingError> {
    let Some(world) = center.world else {
        tracing::debug!("nearest: location has no world, no targets");
        return Ok(Vec::new());
    };
    let entities = env.entities()?;
    if !query.has_valid_range() {
        tracing::warn!(range = query.range, "nearest: invalid search radius");
        return Ok(Vec::new());
    }

    let radius_sq = query.range * query.range;
    let candidates =
        entities.entities_near(world, center.position, Vector3::repeat(query.range));
    let candidate_count = candidates.len();

    let scored: Vec<_> = candidates
        .into_iter()
        .filter(|candidate| query.admits(candidate))
        .filter_map(|candidate| {
            let distance_sq = distance_squared(&candidate.position, &center.position);
            (distance_sq <= radius_sq).then_some((distance_sq, candidate))
        })
        .collect();

    let targets = rank_by_distance(scored, query.cap());
    tracing::debug!(
        %world,
        candidates = candidate_count,
        selected = targets.len(),
        "nearest: selected targets"
    );
    Ok(targets)
}

/// Single nearest living entity, if any.
///
/// # Errors
///
/// Same as [`nearest`].
pub fn nearest_one(
    env: &SpatialEnv<'_>,
    center: &Location,
    query: &TargetQuery,
) -> Result<Option<ActorRef>, TargetingError> {
    let query = query.clone().with_count(1);
    Ok(nearest(env, center, &query)?.into_iter().next())
}
