use std::collections::HashMap;

use sight_core::{BlockPos, Ray, SurfaceHit, VoxelKind};

use crate::traversal::VoxelTraversal;

/// Sparse voxel terrain of one world.
///
/// Only non-air voxels are stored. Writes are limited to the vertical build
/// range `[min_y, max_y]`; reads outside it return air.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    voxels: HashMap<BlockPos, VoxelKind>,
    min_y: i32,
    max_y: i32,
}

impl VoxelGrid {
    pub const DEFAULT_MIN_Y: i32 = -64;
    pub const DEFAULT_MAX_Y: i32 = 319;

    /// Longest ray the terrain test will trace.
    pub const MAX_TRACE_DISTANCE: f64 = 1024.0;

    pub fn new() -> Self {
        Self::with_build_limits(Self::DEFAULT_MIN_Y, Self::DEFAULT_MAX_Y)
    }

    pub fn with_build_limits(min_y: i32, max_y: i32) -> Self {
        Self {
            voxels: HashMap::new(),
            min_y,
            max_y,
        }
    }

    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn in_bounds(&self, pos: BlockPos) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y)
    }

    pub fn get(&self, pos: BlockPos) -> VoxelKind {
        self.voxels.get(&pos).copied().unwrap_or_default()
    }

    /// Stores `kind` at `pos`. Returns false when `pos` is outside the build limits.
    pub fn set(&mut self, pos: BlockPos, kind: VoxelKind) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        if kind == VoxelKind::Air {
            self.voxels.remove(&pos);
        } else {
            self.voxels.insert(pos, kind);
        }
        true
    }

    /// Fills the inclusive box spanned by two corners, clipped to the build
    /// limits. Returns the number of voxels written.
    pub fn fill(&mut self, a: BlockPos, b: BlockPos, kind: VoxelKind) -> usize {
        let (lo_y, hi_y) = (a.y.min(b.y).max(self.min_y), a.y.max(b.y).min(self.max_y));
        let mut written = 0;
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            for y in lo_y..=hi_y {
                for z in a.z.min(b.z)..=a.z.max(b.z) {
                    self.set(BlockPos::new(x, y, z), kind);
                    written += 1;
                }
            }
        }
        written
    }

    /// Number of non-air voxels.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// First solid voxel pierced by `ray` within `max_distance`.
    ///
    /// The hit lies where the ray enters the voxel; a ray starting inside a
    /// solid voxel hits at distance zero. Fluids and air are transparent.
    pub fn raycast(&self, ray: &Ray, max_distance: f64) -> Option<SurfaceHit> {
        let limit = max_distance.min(Self::MAX_TRACE_DISTANCE);
        if limit.is_nan() || limit < 0.0 {
            return None;
        }
        let rising = ray.direction.vector().y;

        for (pos, t) in VoxelTraversal::new(ray) {
            if t > limit {
                break;
            }
            // Leaving the build range for good.
            if (pos.y < self.min_y && rising <= 0.0) || (pos.y > self.max_y && rising >= 0.0) {
                break;
            }
            if self.get(pos).is_solid() {
                return Some(SurfaceHit::new(ray.point_at(t), t, Some(pos)));
            }
        }
        None
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sight_core::{Direction3, Point3};

    #[test]
    fn writes_outside_build_limits_are_refused() {
        let mut grid = VoxelGrid::with_build_limits(0, 10);
        assert!(grid.set(BlockPos::new(0, 10, 0), VoxelKind::Stone));
        assert!(!grid.set(BlockPos::new(0, 11, 0), VoxelKind::Stone));
        assert_eq!(grid.get(BlockPos::new(0, 11, 0)), VoxelKind::Air);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn air_writes_clear_storage() {
        let mut grid = VoxelGrid::new();
        grid.set(BlockPos::new(1, 1, 1), VoxelKind::Dirt);
        grid.set(BlockPos::new(1, 1, 1), VoxelKind::Air);
        assert!(grid.is_empty());
    }

    #[test]
    fn fill_is_inclusive_and_clipped() {
        let mut grid = VoxelGrid::with_build_limits(0, 1);
        let written = grid.fill(BlockPos::new(2, -5, 2), BlockPos::new(0, 5, 0), VoxelKind::Stone);
        assert_eq!(written, 3 * 2 * 3);
        assert_eq!(grid.len(), 18);
    }

    #[test]
    fn raycast_reports_entry_point_of_first_solid_voxel() {
        let mut grid = VoxelGrid::new();
        grid.set(BlockPos::new(4, 0, 0), VoxelKind::Water);
        grid.set(BlockPos::new(6, 0, 0), VoxelKind::Stone);
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Direction3::x());

        let hit = grid.raycast(&ray, 20.0).unwrap();
        assert_eq!(hit.block, Some(BlockPos::new(6, 0, 0)));
        assert_abs_diff_eq!(hit.distance, 5.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.position, Point3::new(6.0, 0.5, 0.5), epsilon = 1e-12);

        assert!(grid.raycast(&ray, 5.0).is_none());
    }

    #[test]
    fn raycast_stops_outside_the_build_range() {
        let grid = VoxelGrid::with_build_limits(0, 16);
        let ray = Ray::new(Point3::new(0.5, 8.0, 0.5), Direction3::up());
        assert!(grid.raycast(&ray, f64::INFINITY).is_none());
    }
}
