use super::BlockPos;
use crate::entity::WorldId;
use crate::geometry::{Point3, Ray};

/// Ray occlusion test against the solid voxels of a world.
pub trait TerrainOracle: Send + Sync {
    /// Returns the nearest intersection with opaque terrain along `ray` no
    /// further than `max_distance`, or `None` when the path is clear.
    ///
    /// Fluids never count as surfaces. When `pass_through_entities` is false
    /// implementations may also report entity hits, which carry no block.
    fn first_blocking_surface(
        &self,
        world: WorldId,
        ray: &Ray,
        max_distance: f64,
        pass_through_entities: bool,
    ) -> Option<SurfaceHit>;
}

/// Intersection reported by [`TerrainOracle::first_blocking_surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceHit {
    pub position: Point3,
    /// Distance from the ray origin to `position`.
    pub distance: f64,
    /// Voxel that was hit, absent for non-terrain hits.
    pub block: Option<BlockPos>,
}

impl SurfaceHit {
    pub const fn new(position: Point3, distance: f64, block: Option<BlockPos>) -> Self {
        Self {
            position,
            distance,
            block,
        }
    }

    /// Only terrain hits block line of sight.
    pub fn is_blocking(&self) -> bool {
        self.block.is_some()
    }

    /// True when this hit blocks and lies strictly nearer than `distance`.
    pub fn occludes_before(&self, distance: f64) -> bool {
        self.is_blocking() && self.distance < distance
    }
}
