//! Particle point sets along circles, spheres, and line segments.
//!
//! The `*_points` generators are pure and return world positions; the
//! `draw_*` functions attach a [`Brush`] and push every point through a
//! [`ParticleSink`].
mod curves;
mod line;

pub use curves::{circle_points, sphere_points};
pub use line::{LinePath, line_points};

use crate::config::SpatialConfig;
use crate::entity::{Location, WorldId};
use crate::env::{OracleError, ParticleKind, ParticleSink, SpatialEnv};
use crate::error::{ErrorSeverity, SpatialError};
use crate::geometry::{GeometryError, Point3};

/// One emission: `count` particles at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticlePoint {
    pub position: Point3,
    pub count: u32,
}

/// Particle kind and per-point amount used by a draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brush {
    pub particle: ParticleKind,
    pub count_per_point: u32,
}

impl Brush {
    pub const fn new(particle: ParticleKind, count_per_point: u32) -> Self {
        Self {
            particle,
            count_per_point,
        }
    }
}

/// Errors surfaced by line drawing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SpatialError for DrawError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DrawError::Geometry(err) => err.severity(),
            DrawError::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DrawError::Geometry(err) => err.error_code(),
            DrawError::Oracle(err) => err.error_code(),
        }
    }
}

/// Draws `density` points around the horizontal circle of `radius` at the
/// centre's height.
pub fn draw_circle(
    sink: &mut (impl ParticleSink + ?Sized),
    config: &SpatialConfig,
    center: &Location,
    radius: f64,
    density: u32,
    brush: Brush,
) -> Vec<ParticlePoint> {
    let Some(world) = center.world else {
        return Vec::new();
    };
    let points = circle_points(&center.position, radius, config.clamp_density(density));
    emit_all(sink, config, world, brush, points)
}

/// Draws `density` points spread over the sphere of `radius`.
pub fn draw_sphere(
    sink: &mut (impl ParticleSink + ?Sized),
    config: &SpatialConfig,
    center: &Location,
    radius: f64,
    density: u32,
    brush: Brush,
) -> Vec<ParticlePoint> {
    let Some(world) = center.world else {
        return Vec::new();
    };
    let points = sphere_points(&center.position, radius, config.clamp_density(density));
    emit_all(sink, config, world, brush, points)
}

/// Draws points along `path` from `start`, stopping at terrain unless the
/// path ignores blocking.
///
/// # Errors
///
/// Fails on a zero-length direction, or when occlusion is requested and the
/// environment has no terrain oracle.
pub fn draw_line(
    sink: &mut (impl ParticleSink + ?Sized),
    env: &SpatialEnv<'_>,
    start: &Location,
    path: &LinePath,
    brush: Brush,
) -> Result<Vec<ParticlePoint>, DrawError> {
    let Some(world) = start.world else {
        return Ok(Vec::new());
    };
    let points = line_points(env, start, path)?;
    Ok(emit_all(sink, env.config(), world, brush, points))
}

fn emit_all(
    sink: &mut (impl ParticleSink + ?Sized),
    config: &SpatialConfig,
    world: WorldId,
    brush: Brush,
    points: Vec<Point3>,
) -> Vec<ParticlePoint> {
    let count = config.clamp_particle_count(brush.count_per_point);
    let emitted: Vec<_> = points
        .into_iter()
        .map(|position| ParticlePoint { position, count })
        .collect();
    for point in &emitted {
        sink.emit(world, brush.particle, point.position, point.count);
    }
    tracing::trace!(%world, particle = %brush.particle, points = emitted.len(), "draw");
    emitted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        emitted: Vec<(WorldId, ParticleKind, Point3, u32)>,
    }

    impl ParticleSink for Recorder {
        fn emit(&mut self, world: WorldId, kind: ParticleKind, position: Point3, count: u32) {
            self.emitted.push((world, kind, position, count));
        }
    }

    #[test]
    fn circle_emits_density_points_with_clamped_count() {
        let mut sink = Recorder::default();
        let center = Location::new(WorldId(2), Point3::new(0.0, 70.0, 0.0));
        let points = draw_circle(
            &mut sink,
            &SpatialConfig::default(),
            &center,
            3.0,
            12,
            Brush::new(ParticleKind::Flame, 0),
        );

        assert_eq!(points.len(), 12);
        assert_eq!(sink.emitted.len(), 12);
        assert!(sink.emitted.iter().all(|&(world, kind, _, count)| {
            world == WorldId(2) && kind == ParticleKind::Flame && count == 1
        }));
    }

    #[test]
    fn zero_density_sphere_still_draws_one_point() {
        let mut sink = Recorder::default();
        let center = Location::new(WorldId(0), Point3::origin());
        let points = draw_sphere(
            &mut sink,
            &SpatialConfig::default(),
            &center,
            1.0,
            0,
            Brush::new(ParticleKind::EndRod, 4),
        );
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].count, 4);
    }

    #[test]
    fn detached_locations_draw_nothing() {
        let mut sink = Recorder::default();
        let center = Location::detached(Point3::origin());
        let brush = Brush::new(ParticleKind::Smoke, 1);
        assert!(draw_circle(&mut sink, &SpatialConfig::default(), &center, 1.0, 8, brush).is_empty());
        assert!(sink.emitted.is_empty());
    }
}
