//! Traits describing the host world's collaborators.
//!
//! Oracles expose the entity index, terrain ray tests, voxel access, and the
//! particle sink. The read-only oracles are bundled in [`Env`] together with
//! the query configuration so targeting code can reach everything it needs
//! without coupling to a concrete world.
mod entities;
mod error;
mod particles;
mod terrain;
mod voxels;

pub use entities::EntityOracle;
pub use error::OracleError;
pub use particles::{ParticleKind, ParticleSink};
pub use terrain::{SurfaceHit, TerrainOracle};
pub use voxels::{BlockPos, VoxelKind, VoxelOracle, VoxelStore};

use crate::config::SpatialConfig;

/// Aggregates the read-only oracles required by targeting and drawing.
pub struct Env<'a, E, T>
where
    E: EntityOracle + ?Sized,
    T: TerrainOracle + ?Sized,
{
    entities: Option<&'a E>,
    terrain: Option<&'a T>,
    config: SpatialConfig,
}

pub type SpatialEnv<'a> = Env<'a, dyn EntityOracle + 'a, dyn TerrainOracle + 'a>;

impl<E, T> Clone for Env<'_, E, T>
where
    E: EntityOracle + ?Sized,
    T: TerrainOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for Env<'_, E, T>
where
    E: EntityOracle + ?Sized,
    T: TerrainOracle + ?Sized,
{
}

impl<'a, E, T> Env<'a, E, T>
where
    E: EntityOracle + ?Sized,
    T: TerrainOracle + ?Sized,
{
    pub fn new(entities: Option<&'a E>, terrain: Option<&'a T>, config: SpatialConfig) -> Self {
        Self {
            entities,
            terrain,
            config,
        }
    }

    pub fn with_all(entities: &'a E, terrain: &'a T) -> Self {
        Self::new(Some(entities), Some(terrain), SpatialConfig::default())
    }

    pub fn empty() -> Self {
        Self {
            entities: None,
            terrain: None,
            config: SpatialConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SpatialConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the EntityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EntitiesNotAvailable` if no entity oracle was provided.
    pub fn entities(&self) -> Result<&'a E, OracleError> {
        self.entities.ok_or(OracleError::EntitiesNotAvailable)
    }

    /// Returns the TerrainOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TerrainNotAvailable` if no terrain oracle was provided.
    pub fn terrain(&self) -> Result<&'a T, OracleError> {
        self.terrain.ok_or(OracleError::TerrainNotAvailable)
    }

    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }
}

impl<'a, E, T> Env<'a, E, T>
where
    E: EntityOracle + 'a,
    T: TerrainOracle + 'a,
{
    /// Converts this environment into a trait-object based `SpatialEnv`.
    pub fn as_spatial_env(&self) -> SpatialEnv<'a> {
        let entities: Option<&'a dyn EntityOracle> = self.entities.map(|entities| entities as _);
        let terrain: Option<&'a dyn TerrainOracle> = self.terrain.map(|terrain| terrain as _);
        Env::new(entities, terrain, self.config)
    }
}
