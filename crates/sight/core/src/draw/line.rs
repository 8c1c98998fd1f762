use crate::entity::Location;
use crate::env::SpatialEnv;
use crate::geometry::{Point3, Ray, Vector3, normalize};

use super::DrawError;

/// Straight segment to sample: direction, length, and spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePath {
    /// Any non-zero vector; normalized before use.
    pub direction: Vector3,
    pub length: f64,
    /// Spacing between points; non-positive values use the configured line step.
    pub step: f64,
    pub ignore_blocked: bool,
}

impl LinePath {
    pub fn new(direction: Vector3, length: f64) -> Self {
        Self {
            direction,
            length,
            step: 0.0,
            ignore_blocked: false,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn ignoring_blocked(mut self, ignore: bool) -> Self {
        self.ignore_blocked = ignore;
        self
    }
}

/// Points at `step` intervals from `start` along `path`, offsets
/// `0, step, 2·step, ... <= length`.
///
/// Unless the path ignores blocking, one ray is cast over the full length
/// and only points strictly before the first terrain hit are kept.
///
/// # Errors
///
/// Fails on a zero-length direction, or when occlusion is requested and the
/// environment has no terrain oracle.
pub fn line_points(
    env: &SpatialEnv<'_>,
    start: &Location,
    path: &LinePath,
) -> Result<Vec<Point3>, DrawError> {
    let direction = normalize(path.direction)?;
    let Some(world) = start.world else {
        return Ok(Vec::new());
    };
    if !path.length.is_finite() || path.length < 0.0 {
        tracing::warn!(length = path.length, "line_points: invalid length");
        return Ok(Vec::new());
    }

    let step = env.config().effective_line_step(path.step);
    let ray = Ray::new(start.position, direction);

    let cutoff = if path.ignore_blocked {
        f64::INFINITY
    } else {
        env.terrain()?
            .first_blocking_surface(world, &ray, path.length, env.config().pass_through_entities)
            .filter(|hit| hit.is_blocking())
            .map_or(f64::INFINITY, |hit| hit.distance)
    };

    let steps = (path.length / step).floor() as u64;
    let points: Vec<_> = (0..=steps)
        .map(|i| i as f64 * step)
        .take_while(|&offset| offset < cutoff)
        .map(|offset| ray.point_at(offset))
        .collect();

    if cutoff.is_finite() {
        tracing::trace!(cutoff, kept = points.len(), "line_points: truncated by terrain");
    }
    Ok(points)
}
