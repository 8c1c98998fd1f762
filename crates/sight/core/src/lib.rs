//! Spatial targeting, volume capture, and particle drawing over a voxel world.
//!
//! `sight-core` owns no world state. Every query reaches the host world
//! through the oracle traits in [`env`] ([`EntityOracle`], [`TerrainOracle`],
//! [`VoxelOracle`]/[`VoxelStore`], [`ParticleSink`]), so the same code runs
//! against a game server, the in-memory world of `sight-world`, or test fakes.
//!
//! - [`targeting`]: nearest, view-cone, and view-line target selection
//! - [`volume`]: spherical voxel capture with material swap and restore
//! - [`draw`]: circle, sphere, and line point sets pushed to a particle sink
pub mod config;
pub mod draw;
pub mod entity;
pub mod env;
pub mod error;
pub mod geometry;
pub mod targeting;
pub mod volume;

pub use config::SpatialConfig;
pub use draw::{
    Brush, DrawError, LinePath, ParticlePoint, circle_points, draw_circle, draw_line, draw_sphere,
    line_points, sphere_points,
};
pub use entity::{ActorRef, EntityId, EntityKind, KindCategories, Location, TypeFilter, WorldId};
pub use env::{
    BlockPos, EntityOracle, Env, OracleError, ParticleKind, ParticleSink, SpatialEnv, SurfaceHit,
    TerrainOracle, VoxelKind, VoxelOracle, VoxelStore,
};
pub use error::{ErrorSeverity, SpatialError};
pub use geometry::{Direction3, GeometryError, Point3, Ray, Vector3};
pub use targeting::{
    SightlineSweep, TargetQuery, TargetingError, has_line_of_sight, in_sight, nearest,
    nearest_one, on_view_line,
};
pub use volume::{VolumeError, VoxelSnapshot, apply_material, capture_sphere, restore};
