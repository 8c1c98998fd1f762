//! RON scene files describing worlds, terrain, and actors.
//!
//! ```ron
//! Scene(
//!     config: (sightline_step: 0.25),
//!     worlds: [
//!         (
//!             id: 0,
//!             build_limits: Some((-64, 319)),
//!             boxes: [(min: (-8, 63, -8), max: (8, 63, 8), kind: grass)],
//!             voxels: [(pos: (2, 64, 0), kind: glass)],
//!             actors: [
//!                 (id: 1, kind: player, position: (0.5, 64.0, 0.5), yaw: -90.0),
//!                 (id: 2, kind: zombie, position: (6.5, 64.0, 0.5)),
//!             ],
//!         ),
//!     ],
//! )
//! ```
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sight_core::{
    ActorRef, BlockPos, Direction3, EntityId, EntityKind, ErrorSeverity, OracleError, Point3,
    SpatialConfig, SpatialError, VoxelKind, VoxelStore, WorldId,
};

use crate::grid::VoxelGrid;
use crate::world::{SimWorld, WorldLayer};

/// Errors raised while loading or building a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("actor {0} is declared twice")]
    DuplicateActor(EntityId),

    #[error("world {world} has inverted build limits {min_y}..={max_y}")]
    InvalidBuildLimits { world: WorldId, min_y: i32, max_y: i32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl SpatialError for SceneError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SceneError::Io { .. } => ErrorSeverity::Recoverable,
            SceneError::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SceneError::Io { .. } => "SCENE_IO",
            SceneError::Parse(_) => "SCENE_PARSE",
            SceneError::DuplicateActor(_) => "SCENE_DUPLICATE_ACTOR",
            SceneError::InvalidBuildLimits { .. } => "SCENE_INVALID_BUILD_LIMITS",
            SceneError::Oracle(err) => err.error_code(),
        }
    }
}

/// Top-level scene document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub config: SpatialConfig,
    #[serde(default)]
    pub worlds: Vec<WorldSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSpec {
    pub id: u32,
    /// Inclusive `(min_y, max_y)`; the grid defaults apply when absent.
    #[serde(default)]
    pub build_limits: Option<(i32, i32)>,
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,
    #[serde(default)]
    pub voxels: Vec<VoxelSpec>,
    #[serde(default)]
    pub actors: Vec<ActorSpec>,
}

/// Solid box between two inclusive corners, clipped to the build limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub min: (i32, i32, i32),
    pub max: (i32, i32, i32),
    pub kind: VoxelKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxelSpec {
    pub pos: (i32, i32, i32),
    pub kind: VoxelKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorSpec {
    pub id: u32,
    pub kind: EntityKind,
    /// Feet position.
    pub position: (f64, f64, f64),
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    /// `(width, height)`; the kind's dimensions when absent.
    #[serde(default)]
    pub size: Option<(f64, f64)>,
    #[serde(default)]
    pub eye_height: Option<f64>,
}

impl ActorSpec {
    pub fn to_actor(&self, world: WorldId) -> ActorRef {
        let (x, y, z) = self.position;
        let mut actor = ActorRef::new(EntityId(self.id), world, self.kind, Point3::new(x, y, z))
            .with_facing(Direction3::from_yaw_pitch(self.yaw, self.pitch));
        if let Some((width, height)) = self.size {
            actor = actor.with_size(width, height);
        }
        if let Some(eye_height) = self.eye_height {
            actor = actor.with_eye_height(eye_height);
        }
        actor
    }
}

fn block((x, y, z): (i32, i32, i32)) -> BlockPos {
    BlockPos::new(x, y, z)
}

impl Scene {
    pub fn from_ron_str(source: &str) -> Result<Self, SceneError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_ron_str(&source)?;
        tracing::info!(
            path = %path.display(),
            worlds = scene.worlds.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    /// Builds the in-memory world described by this scene.
    ///
    /// Boxes are written first, then single voxels, then actors.
    ///
    /// # Errors
    ///
    /// Fails on inverted build limits, a single voxel outside the build
    /// limits, or an actor id used twice anywhere in the scene.
    pub fn build(&self) -> Result<SimWorld, SceneError> {
        let mut sim = SimWorld::new();
        let mut seen = HashSet::new();

        for spec in &self.worlds {
            let id = WorldId(spec.id);
            let terrain = match spec.build_limits {
                Some((min_y, max_y)) if min_y > max_y => {
                    return Err(SceneError::InvalidBuildLimits {
                        world: id,
                        min_y,
                        max_y,
                    });
                }
                Some((min_y, max_y)) => VoxelGrid::with_build_limits(min_y, max_y),
                None => VoxelGrid::new(),
            };
            sim.insert_world(id, WorldLayer::new(terrain));

            for fill in &spec.boxes {
                sim.fill(id, block(fill.min), block(fill.max), fill.kind);
            }
            for voxel in &spec.voxels {
                sim.set_kind(id, block(voxel.pos), voxel.kind)?;
            }
            for actor in &spec.actors {
                if !seen.insert(actor.id) {
                    return Err(SceneError::DuplicateActor(EntityId(actor.id)));
                }
                sim.spawn(actor.to_actor(id));
            }

            tracing::debug!(
                world = %id,
                voxels = sim.world(id).map_or(0, |layer| layer.terrain().len()),
                actors = spec.actors.len(),
                "built world"
            );
        }

        Ok(sim)
    }
}
