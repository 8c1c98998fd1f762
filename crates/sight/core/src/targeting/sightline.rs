//! Entities along an actor's line of view.
//!
//! The capsule of radius `tolerance` around the viewer's facing ray is
//! covered by probe boxes spaced no further apart than the tolerance. Each
//! probe asks the entity oracle for nearby candidates; candidates are tested
//! once, against the exact capsule, and yielded lazily in probe order.

use std::collections::{HashSet, VecDeque};

use super::sight::occluded;
use super::{TargetQuery, TargetingError, rank_by_distance};
use crate::entity::{ActorRef, EntityId, WorldId};
use crate::env::{EntityOracle, SpatialEnv, TerrainOracle};
use crate::geometry::{Ray, Vector3, distance_squared};

/// Lazy sweep yielding every admitted entity inside the view capsule.
///
/// The sweep stops issuing probes as soon as the consumer stops pulling, so
/// `sweep.take(n)` bounds the work by the number of results needed.
pub struct SightlineSweep<'q, 'a> {
    entities: &'a dyn EntityOracle,
    terrain: Option<&'a dyn TerrainOracle>,
    pass_through_entities: bool,
    query: &'q TargetQuery,
    viewer: EntityId,
    world: WorldId,
    axis: Ray,
    tolerance: f64,
    increment: f64,
    next_probe: u64,
    probe_count: u64,
    seen: HashSet<EntityId>,
    pending: VecDeque<ActorRef>,
}

impl<'q, 'a> SightlineSweep<'q, 'a> {
    /// Prepares a sweep of `query.range` blocks from the viewer's eye along its facing.
    ///
    /// # Errors
    ///
    /// Returns an `OracleError` when the entity oracle, or the terrain oracle
    /// for an occlusion-checked query, is missing.
    pub fn new(
        env: &SpatialEnv<'a>,
        viewer: &ActorRef,
        tolerance: f64,
        query: &'q TargetQuery,
    ) -> Result<Self, TargetingError> {
        let entities = env.entities()?;
        let terrain = if query.ignore_blocked {
            None
        } else {
            Some(env.terrain()?)
        };

        let increment = env.config().sweep_increment(tolerance);
        let probe_count = if query.has_valid_range() && tolerance.is_finite() && tolerance >= 0.0
        {
            ((query.range / increment).ceil() as u64).saturating_add(1)
        } else {
            tracing::warn!(
                range = query.range,
                tolerance,
                "sightline: invalid sweep extent"
            );
            0
        };

        Ok(Self {
            entities,
            terrain,
            pass_through_entities: env.config().pass_through_entities,
            query,
            viewer: viewer.id,
            world: viewer.world,
            axis: Ray::new(viewer.eye_position(), viewer.facing),
            tolerance,
            increment,
            next_probe: 0,
            probe_count,
            seen: HashSet::new(),
            pending: VecDeque::new(),
        })
    }

    /// Number of probe boxes issued so far.
    pub fn probes_issued(&self) -> u64 {
        self.next_probe
    }

    /// Exact capsule and occlusion test for a first-seen candidate.
    fn accepts(&self, candidate: &ActorRef) -> bool {
        if candidate.id == self.viewer || !self.query.admits(candidate) {
            return false;
        }

        let eye = candidate.eye_position();
        let projection = self.axis.project(&eye);
        if projection.along < 0.0 || projection.along > self.query.range {
            tracing::trace!(target = %candidate.id, along = projection.along, "sightline: off the segment");
            return false;
        }
        if projection.lateral > self.tolerance {
            tracing::trace!(target = %candidate.id, lateral = projection.lateral, "sightline: too far off axis");
            return false;
        }

        if let Some(terrain) = self.terrain {
            // Coincident eyes cannot be occluded.
            if let Ok((ray, distance)) = Ray::towards(self.axis.origin, eye) {
                if occluded(
                    terrain,
                    self.world,
                    &ray,
                    distance,
                    projection.along,
                    self.pass_through_entities,
                ) {
                    tracing::trace!(target = %candidate.id, "sightline: blocked by terrain");
                    return false;
                }
            }
        }
        true
    }

    fn probe(&mut self, index: u64) {
        let offset = (index as f64 * self.increment).min(self.query.range);
        let center = self.axis.point_at(offset);
        let candidates =
            self.entities
                .entities_near(self.world, center, Vector3::repeat(self.tolerance));

        for candidate in candidates {
            if !self.seen.insert(candidate.id) {
                continue;
            }
            if self.accepts(&candidate) {
                self.pending.push_back(candidate);
            }
        }
    }
}

impl Iterator for SightlineSweep<'_, '_> {
    type Item = ActorRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(actor) = self.pending.pop_front() {
                return Some(actor);
            }
            if self.next_probe >= self.probe_count {
                return None;
            }
            let index = self.next_probe;
            self.next_probe += 1;
            self.probe(index);
        }
    }
}

/// Returns up to `query.cap()` living entities whose eyes lie within
/// `tolerance` of the viewer's line of view, nearest first.
///
/// The line starts at the viewer's eye and runs `query.range` blocks along
/// its facing. Unless `query.ignore_blocked`, a candidate is dropped when
/// terrain cuts the path from the viewer's eye to the candidate's eye nearer
/// than the candidate's distance along the line. The sweep ends early once
/// the cap is reached; the collected targets are then sorted by squared
/// eye-to-eye distance.
///
/// # Errors
///
/// Same as [`SightlineSweep::new`].
pub fn on_view_line(
    env: &SpatialEnv<'_>,
    viewer: &ActorRef,
    tolerance: f64,
    query: &TargetQuery,
) -> Result<Vec<ActorRef>, TargetingError> {
    let cap = query.cap();
    let eye = viewer.eye_position();
    let mut sweep = SightlineSweep::new(env, viewer, tolerance, query)?;

    let scored: Vec<_> = sweep
        .by_ref()
        .take(cap)
        .map(|actor| (distance_squared(&eye, &actor.eye_position()), actor))
        .collect();

    tracing::debug!(
        viewer = %viewer.id,
        probes = sweep.probes_issued(),
        selected = scored.len(),
        "sightline: selected targets"
    );
    Ok(rank_by_distance(scored, cap))
}
