//! Amanatides & Woo voxel traversal over the unit block lattice.
use sight_core::{BlockPos, Ray};

/// Iterator over the voxels pierced by a ray, in order.
///
/// Yields `(voxel, t)` where `t` is the distance along the ray at which the
/// voxel is entered; the voxel containing the origin comes first with `t = 0`.
/// The sequence is unbounded: callers stop on distance.
#[derive(Clone, Debug)]
pub struct VoxelTraversal {
    current: BlockPos,
    step: [i32; 3],
    /// Ray distance at which the next boundary on each axis is crossed.
    t_max: [f64; 3],
    /// Ray distance between two boundaries on each axis.
    t_delta: [f64; 3],
    started: bool,
}

impl VoxelTraversal {
    pub fn new(ray: &Ray) -> Self {
        let current = BlockPos::from_point(&ray.origin);
        let dir = ray.direction.vector();
        let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
        let cell = [current.x, current.y, current.z];

        let mut step = [0; 3];
        let mut t_max = [f64::INFINITY; 3];
        let mut t_delta = [f64::INFINITY; 3];

        for axis in 0..3 {
            let d = dir[axis];
            if d.abs() <= f64::EPSILON {
                continue;
            }
            step[axis] = if d > 0.0 { 1 } else { -1 };
            t_delta[axis] = (1.0 / d).abs();
            let boundary = if d > 0.0 {
                f64::from(cell[axis]) + 1.0
            } else {
                f64::from(cell[axis])
            };
            t_max[axis] = (boundary - origin[axis]) / d;
        }

        Self {
            current,
            step,
            t_max,
            t_delta,
            started: false,
        }
    }
}

impl Iterator for VoxelTraversal {
    type Item = (BlockPos, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((self.current, 0.0));
        }

        let axis = if self.t_max[0] < self.t_max[1] {
            if self.t_max[0] < self.t_max[2] { 0 } else { 2 }
        } else if self.t_max[1] < self.t_max[2] {
            1
        } else {
            2
        };
        let entered_at = self.t_max[axis];
        if !entered_at.is_finite() {
            return None;
        }

        match axis {
            0 => self.current.x = self.current.x.wrapping_add(self.step[0]),
            1 => self.current.y = self.current.y.wrapping_add(self.step[1]),
            _ => self.current.z = self.current.z.wrapping_add(self.step[2]),
        }
        self.t_max[axis] += self.t_delta[axis];

        Some((self.current, entered_at))
    }
}
