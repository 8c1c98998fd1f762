//! Oracle access errors.
//!
//! Errors related to collaborator availability and host-world write failures.

use super::BlockPos;
use crate::entity::WorldId;
use crate::error::{ErrorSeverity, SpatialError};

/// Errors that occur when reaching host collaborators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// EntityOracle is not available in the environment.
    #[error("EntityOracle not available")]
    EntitiesNotAvailable,

    /// TerrainOracle is not available in the environment.
    #[error("TerrainOracle not available")]
    TerrainNotAvailable,

    /// The host does not know the requested world.
    #[error("{0} is not loaded")]
    UnknownWorld(WorldId),

    /// The voxel lies outside the world's build limits.
    #[error("voxel {pos} in {world} is outside the build limits")]
    OutOfBounds { world: WorldId, pos: BlockPos },
}

impl SpatialError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - the query layer is miswired
            EntitiesNotAvailable | TerrainNotAvailable => ErrorSeverity::Fatal,

            // The world may be loaded again later
            UnknownWorld(_) => ErrorSeverity::Recoverable,

            OutOfBounds { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EntitiesNotAvailable => "ORACLE_ENTITIES_NOT_AVAILABLE",
            TerrainNotAvailable => "ORACLE_TERRAIN_NOT_AVAILABLE",
            UnknownWorld(_) => "ORACLE_UNKNOWN_WORLD",
            OutOfBounds { .. } => "ORACLE_OUT_OF_BOUNDS",
        }
    }
}
