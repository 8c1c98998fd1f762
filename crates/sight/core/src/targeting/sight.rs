//! View-cone targeting and line-of-sight tests.

use super::{TargetQuery, TargetingError, rank_by_distance};
use crate::entity::{ActorRef, WorldId};
use crate::env::{OracleError, SpatialEnv, TerrainOracle};
use crate::geometry::{Ray, Vector3, angle_cosine, distance_squared};

/// Returns up to `query.cap()` living entities inside the viewer's view cone.
///
/// Candidates are aimed at through the centre of their bounding box from the
/// viewer's eye. A candidate is kept when it lies within `query.range`, its
/// angle to the facing direction is strictly below half of
/// `query.fov_degrees` (no cone test when unset), and, unless
/// `query.ignore_blocked`, no terrain surface lies strictly between the eye
/// and the target point. Results are sorted by squared feet-to-feet distance
/// from the viewer.
///
/// # Errors
///
/// Returns an `OracleError` when the entity oracle, or the terrain oracle
/// for an occlusion-checked query, is missing.
pub fn in_sight(
    env: &SpatialEnv<'_>,
    viewer: &ActorRef,
    query: &TargetQuery,
) -> Result<Vec<ActorRef>, TargetingError> {
    let entities = env.entities()?;
    let terrain = if query.ignore_blocked {
        None
    } else {
        Some(env.terrain()?)
    };
    if !query.has_valid_range() {
        tracing::warn!(range = query.range, "in_sight: invalid search radius");
        return Ok(Vec::new());
    }

    let eye = viewer.eye_position();
    let facing = viewer.facing.vector();
    let cos_threshold = query
        .fov_degrees
        .map(|fov| (fov.to_radians() / 2.0).cos());
    let radius_sq = query.range * query.range;
    let pass_through = env.config().pass_through_entities;

    let candidates = entities.entities_near(viewer.world, eye, Vector3::repeat(query.range));
    let candidate_count = candidates.len();
    let mut scored = Vec::new();

    for candidate in candidates {
        if candidate.id == viewer.id || !query.admits(&candidate) {
            continue;
        }

        let target = candidate.center();
        let to_target = target - eye;
        if to_target.norm_squared() > radius_sq {
            tracing::trace!(target = %candidate.id, "in_sight: outside radius");
            continue;
        }

        // A target at the eye itself has no bearing and cannot be in the cone.
        let Ok(cosine) = angle_cosine(&to_target, &facing) else {
            continue;
        };
        if cos_threshold.is_some_and(|threshold| cosine <= threshold) {
            tracing::trace!(target = %candidate.id, cosine, "in_sight: outside cone");
            continue;
        }

        if let Some(terrain) = terrain {
            let (ray, distance) = Ray::towards(eye, target)?;
            if occluded(terrain, viewer.world, &ray, distance, distance, pass_through) {
                tracing::trace!(target = %candidate.id, "in_sight: blocked by terrain");
                continue;
            }
        }

        scored.push((distance_squared(&viewer.position, &candidate.position), candidate));
    }

    let targets = rank_by_distance(scored, query.cap());
    tracing::debug!(
        viewer = %viewer.id,
        candidates = candidate_count,
        selected = targets.len(),
        "in_sight: selected targets"
    );
    Ok(targets)
}

/// Returns true when no terrain blocks the path from the viewer's eye to the
/// centre of `target`.
///
/// Actors in different worlds never see each other.
///
/// # Errors
///
/// Returns `OracleError::TerrainNotAvailable` if the environment lacks a
/// terrain oracle.
pub fn has_line_of_sight(
    env: &SpatialEnv<'_>,
    viewer: &ActorRef,
    target: &ActorRef,
) -> Result<bool, OracleError> {
    let terrain = env.terrain()?;
    if viewer.world != target.world {
        return Ok(false);
    }
    let Ok((ray, distance)) = Ray::towards(viewer.eye_position(), target.center()) else {
        return Ok(true);
    };
    let pass_through = env.config().pass_through_entities;
    Ok(!occluded(terrain, viewer.world, &ray, distance, distance, pass_through))
}

/// Casts `ray` up to `max_distance` and reports a blocking surface strictly
/// nearer than `limit`.
pub(crate) fn occluded(
    terrain: &(impl TerrainOracle + ?Sized),
    world: WorldId,
    ray: &Ray,
    max_distance: f64,
    limit: f64,
    pass_through_entities: bool,
) -> bool {
    terrain
        .first_blocking_surface(world, ray, max_distance, pass_through_entities)
        .is_some_and(|hit| hit.occludes_before(limit))
}
