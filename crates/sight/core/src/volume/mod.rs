//! Voxel capture and bulk material replacement inside a sphere.
//!
//! Captures are read-before-write: [`capture_sphere`] reads every voxel
//! before anything is written, so the returned snapshots can always be
//! replayed with [`restore`], even after a partially failed
//! [`apply_material`].

use crate::entity::{Location, WorldId};
use crate::env::{BlockPos, OracleError, VoxelKind, VoxelOracle, VoxelStore};
use crate::error::{ErrorSeverity, SpatialError};

/// Captured state of one voxel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelSnapshot {
    pub world: WorldId,
    pub pos: BlockPos,
    pub kind: VoxelKind,
}

/// A bulk write stopped at the first voxel the host refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("voxel write failed after {written} of {total} voxels")]
pub struct VolumeError {
    /// Voxels written before the failure; they are not rolled back.
    pub written: usize,
    pub total: usize,
    #[source]
    pub source: OracleError,
}

impl SpatialError for VolumeError {
    fn severity(&self) -> ErrorSeverity {
        self.source.severity()
    }

    fn error_code(&self) -> &'static str {
        "VOLUME_PARTIAL_WRITE"
    }
}

/// Reads every voxel whose lattice offset from the voxel containing `center`
/// lies within `radius`.
///
/// Offsets span `-⌊radius⌋..=⌊radius⌋` on each axis and are kept when
/// `dx² + dy² + dz² <= radius²`. Snapshots are ordered x-major, then y,
/// then z. A detached location or a negative radius captures nothing.
pub fn capture_sphere(
    voxels: &(impl VoxelOracle + ?Sized),
    center: &Location,
    radius: f64,
) -> Vec<VoxelSnapshot> {
    let Some(world) = center.world else {
        tracing::debug!("capture_sphere: location has no world");
        return Vec::new();
    };
    if !radius.is_finite() || radius < 0.0 {
        tracing::warn!(radius, "capture_sphere: invalid radius");
        return Vec::new();
    }

    let origin = BlockPos::from_point(&center.position);
    let reach = radius.floor() as i32;
    let radius_sq = radius * radius;
    let mut snapshots = Vec::new();

    for dx in -reach..=reach {
        for dy in -reach..=reach {
            for dz in -reach..=reach {
                let offset_sq = offset_squared(dx, dy, dz);
                if offset_sq > radius_sq {
                    continue;
                }
                let pos = origin.offset(dx, dy, dz);
                snapshots.push(VoxelSnapshot {
                    world,
                    pos,
                    kind: voxels.kind_at(world, pos),
                });
            }
        }
    }

    tracing::debug!(%world, %origin, radius, captured = snapshots.len(), "capture_sphere");
    snapshots
}

fn offset_squared(dx: i32, dy: i32, dz: i32) -> f64 {
    let (dx, dy, dz) = (i64::from(dx), i64::from(dy), i64::from(dz));
    (dx * dx + dy * dy + dz * dz) as f64
}

/// Writes `kind` to every captured position, in capture order.
///
/// Returns the number of voxels written.
///
/// # Errors
///
/// Stops at the first refused write and reports how many voxels were
/// already changed. Earlier writes stay in place; replay the snapshots with
/// [`restore`] to undo them.
pub fn apply_material(
    voxels: &mut (impl VoxelStore + ?Sized),
    snapshots: &[VoxelSnapshot],
    kind: VoxelKind,
) -> Result<usize, VolumeError> {
    write_all(voxels, snapshots, |_| kind)
}

/// Writes every snapshot's captured kind back to its position.
///
/// # Errors
///
/// Same as [`apply_material`].
pub fn restore(
    voxels: &mut (impl VoxelStore + ?Sized),
    snapshots: &[VoxelSnapshot],
) -> Result<usize, VolumeError> {
    write_all(voxels, snapshots, |snapshot| snapshot.kind)
}

fn write_all(
    voxels: &mut (impl VoxelStore + ?Sized),
    snapshots: &[VoxelSnapshot],
    kind_for: impl Fn(&VoxelSnapshot) -> VoxelKind,
) -> Result<usize, VolumeError> {
    for (written, snapshot) in snapshots.iter().enumerate() {
        if let Err(source) = voxels.set_kind(snapshot.world, snapshot.pos, kind_for(snapshot)) {
            tracing::warn!(pos = %snapshot.pos, %source, written, "voxel write refused");
            return Err(VolumeError {
                written,
                total: snapshots.len(),
                source,
            });
        }
    }
    Ok(snapshots.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;
    use std::collections::HashMap;

    const WORLD: WorldId = WorldId(3);

    /// Voxel store refusing writes above `max_y`.
    #[derive(Default)]
    struct FakeVoxels {
        kinds: HashMap<BlockPos, VoxelKind>,
        max_y: Option<i32>,
    }

    impl VoxelOracle for FakeVoxels {
        fn kind_at(&self, _world: WorldId, pos: BlockPos) -> VoxelKind {
            self.kinds.get(&pos).copied().unwrap_or_default()
        }
    }

    impl VoxelStore for FakeVoxels {
        fn set_kind(
            &mut self,
            world: WorldId,
            pos: BlockPos,
            kind: VoxelKind,
        ) -> Result<(), OracleError> {
            if self.max_y.is_some_and(|max_y| pos.y > max_y) {
                return Err(OracleError::OutOfBounds { world, pos });
            }
            self.kinds.insert(pos, kind);
            Ok(())
        }
    }

    #[test]
    fn radius_one_captures_the_six_neighbours_and_centre() {
        let voxels = FakeVoxels::default();
        let center = Location::new(WORLD, Point3::new(0.5, 0.5, 0.5));
        let snapshots = capture_sphere(&voxels, &center, 1.0);

        let positions: Vec<_> = snapshots.iter().map(|s| s.pos).collect();
        assert_eq!(
            positions,
            vec![
                BlockPos::new(-1, 0, 0),
                BlockPos::new(0, -1, 0),
                BlockPos::new(0, 0, -1),
                BlockPos::new(0, 0, 0),
                BlockPos::new(0, 0, 1),
                BlockPos::new(0, 1, 0),
                BlockPos::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn fractional_radius_includes_lattice_points_within_it() {
        let voxels = FakeVoxels::default();
        let center = Location::new(WORLD, Point3::new(10.2, 64.9, -3.1));
        // r = 1.5 admits offsets with squared length 0, 1, 2 (not 3).
        let snapshots = capture_sphere(&voxels, &center, 1.5);
        assert_eq!(snapshots.len(), 1 + 6 + 12);
        assert!(snapshots.iter().any(|s| s.pos == BlockPos::new(10, 64, -4)));
    }

    #[test]
    fn offsets_of_wide_spheres_do_not_overflow() {
        assert_eq!(offset_squared(30_000, -30_000, 30_000), 2.7e9);
        assert_eq!(offset_squared(-1, 2, 0), 5.0);
    }

    #[test]
    fn capture_reads_current_kinds() {
        let mut voxels = FakeVoxels::default();
        voxels.kinds.insert(BlockPos::new(0, 0, 0), VoxelKind::Stone);
        let snapshots = capture_sphere(&voxels, &Location::new(WORLD, Point3::origin()), 0.0);
        assert_eq!(
            snapshots,
            vec![VoxelSnapshot {
                world: WORLD,
                pos: BlockPos::new(0, 0, 0),
                kind: VoxelKind::Stone
            }]
        );
    }

    #[test]
    fn detached_or_negative_captures_nothing() {
        let voxels = FakeVoxels::default();
        assert!(capture_sphere(&voxels, &Location::detached(Point3::origin()), 3.0).is_empty());
        assert!(capture_sphere(&voxels, &Location::new(WORLD, Point3::origin()), -1.0).is_empty());
    }

    #[test]
    fn restore_undoes_arbitrary_writes() {
        let mut voxels = FakeVoxels::default();
        voxels.kinds.insert(BlockPos::new(1, 0, 0), VoxelKind::Dirt);
        voxels.kinds.insert(BlockPos::new(0, 2, 0), VoxelKind::Glass);
        let center = Location::new(WORLD, Point3::origin());
        let snapshots = capture_sphere(&voxels, &center, 2.0);
        let before: Vec<_> = snapshots.iter().map(|s| voxels.kind_at(WORLD, s.pos)).collect();

        apply_material(&mut voxels, &snapshots, VoxelKind::Lava).unwrap();
        apply_material(&mut voxels, &snapshots[..5], VoxelKind::Sand).unwrap();
        assert!(snapshots.iter().all(|s| voxels.kind_at(WORLD, s.pos) != VoxelKind::Air));

        assert_eq!(restore(&mut voxels, &snapshots).unwrap(), snapshots.len());
        let after: Vec<_> = snapshots.iter().map(|s| voxels.kind_at(WORLD, s.pos)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn refused_write_reports_progress_without_rollback() {
        let mut voxels = FakeVoxels {
            max_y: Some(0),
            ..Default::default()
        };
        let center = Location::new(WORLD, Point3::origin());
        let snapshots = capture_sphere(&voxels, &center, 1.0);

        let err = apply_material(&mut voxels, &snapshots, VoxelKind::Stone).unwrap_err();
        // (0, 1, 0) is the sixth voxel in scan order.
        assert_eq!(err.written, 5);
        assert_eq!(err.total, 7);
        assert_eq!(voxels.kind_at(WORLD, BlockPos::new(0, 0, 1)), VoxelKind::Stone);
        assert_eq!(voxels.kind_at(WORLD, BlockPos::new(1, 0, 0)), VoxelKind::Air);
    }
}
