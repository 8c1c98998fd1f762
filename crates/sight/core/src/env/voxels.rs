use std::fmt;

use super::OracleError;
use crate::entity::WorldId;
use crate::geometry::{Point3, Vector3};

/// Integer lattice coordinate of a voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Voxel containing `point` (each axis floored).
    pub fn from_point(point: &Point3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Minimum corner of the voxel in world space.
    pub fn corner(self) -> Point3 {
        Point3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    pub fn center(self) -> Point3 {
        self.corner() + Vector3::repeat(0.5)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Material held by one voxel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VoxelKind {
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    Wood,
    Leaves,
    Glass,
    Water,
    Lava,
    #[strum(serialize = "custom")]
    Custom(u16),
}

impl VoxelKind {
    /// Solid voxels stop rays; air and fluids do not.
    pub fn is_solid(self) -> bool {
        !matches!(self, VoxelKind::Air | VoxelKind::Water | VoxelKind::Lava)
    }
}

/// Read access to voxel materials.
pub trait VoxelOracle: Send + Sync {
    /// Material at `pos`; unloaded or out-of-range voxels read as air.
    fn kind_at(&self, world: WorldId, pos: BlockPos) -> VoxelKind;
}

/// Write access to voxel materials.
///
/// Writes are immediate and unbuffered; there is no transaction.
pub trait VoxelStore: VoxelOracle {
    fn set_kind(&mut self, world: WorldId, pos: BlockPos, kind: VoxelKind)
    -> Result<(), OracleError>;
}
