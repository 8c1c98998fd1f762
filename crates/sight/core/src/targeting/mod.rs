//! Target selection around a point or in front of an actor.
//!
//! Every query follows the same shape: a coarse box lookup through the
//! [`EntityOracle`](crate::env::EntityOracle), exact geometric filtering,
//! optional occlusion tests through the
//! [`TerrainOracle`](crate::env::TerrainOracle), then a stable sort by squared
//! distance truncated to the query's cap.
//!
//! - [`nearest`] / [`nearest_one`]: sphere around a location
//! - [`in_sight`]: view cone in front of an actor
//! - [`on_view_line`]: capsule along an actor's facing, driven by [`SightlineSweep`]
//! - [`has_line_of_sight`]: eye-to-target occlusion test
mod error;
mod nearest;
mod sight;
mod sightline;

pub use error::TargetingError;
pub use nearest::{nearest, nearest_one};
pub use sight::{has_line_of_sight, in_sight};
pub use sightline::{SightlineSweep, on_view_line};

use crate::entity::{ActorRef, EntityId, EntityKind, TypeFilter};

/// Parameter bundle for one targeting call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetQuery {
    /// Search radius, or sweep length for [`on_view_line`].
    pub range: f64,

    /// Full cone angle in degrees for [`in_sight`]; `None` disables the cone test.
    pub fov_degrees: Option<f64>,

    /// Maximum number of results. Zero is treated as one.
    pub count: usize,

    /// Single actor that never appears in the results.
    pub exclude: Option<EntityId>,

    /// Kind allow-list; empty accepts every living kind.
    pub filter: TypeFilter,

    /// Skip terrain occlusion tests.
    pub ignore_blocked: bool,
}

impl TargetQuery {
    /// Unbounded, unfiltered query within `range`.
    pub fn new(range: f64) -> Self {
        Self {
            range,
            fov_degrees: None,
            count: usize::MAX,
            exclude: None,
            filter: TypeFilter::any(),
            ignore_blocked: false,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_fov(mut self, degrees: f64) -> Self {
        self.fov_degrees = Some(degrees);
        self
    }

    #[must_use]
    pub fn excluding(mut self, id: EntityId) -> Self {
        self.exclude = Some(id);
        self
    }

    #[must_use]
    pub fn allowing(mut self, kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        self.filter = TypeFilter::only(kinds);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn ignoring_blocked(mut self, ignore: bool) -> Self {
        self.ignore_blocked = ignore;
        self
    }

    /// Effective result cap.
    pub fn cap(&self) -> usize {
        if self.count == 0 {
            tracing::warn!("target count 0 clamped to 1");
        }
        self.count.max(1)
    }

    /// Whether `range` describes a usable, finite search extent.
    fn has_valid_range(&self) -> bool {
        self.range.is_finite() && self.range >= 0.0
    }

    /// Living, not excluded, and accepted by the kind filter.
    fn admits(&self, candidate: &ActorRef) -> bool {
        candidate.is_living()
            && self.exclude != Some(candidate.id)
            && self.filter.accepts(candidate.kind)
    }
}

/// Stable ascending sort by squared distance, truncated to `cap`.
///
/// Equal distances keep the oracle's enumeration order.
fn rank_by_distance(mut scored: Vec<(f64, ActorRef)>, cap: usize) -> Vec<ActorRef> {
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().take(cap).map(|(_, actor)| actor).collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory collaborators shared by the targeting tests.
    use crate::entity::{ActorRef, EntityId, EntityKind, WorldId};
    use crate::env::{BlockPos, EntityOracle, SurfaceHit, TerrainOracle};
    use crate::geometry::{Point3, Ray, Vector3};

    pub const WORLD: WorldId = WorldId(1);

    /// Entity oracle testing exact box overlap against actor bounds.
    #[derive(Default)]
    pub struct FakeEntities {
        pub actors: Vec<ActorRef>,
    }

    impl FakeEntities {
        pub fn with(actors: impl IntoIterator<Item = ActorRef>) -> Self {
            Self {
                actors: actors.into_iter().collect(),
            }
        }
    }

    impl EntityOracle for FakeEntities {
        fn entities_near(&self, world: WorldId, center: Point3, extents: Vector3) -> Vec<ActorRef> {
            let (lo, hi) = (center - extents, center + extents);
            self.actors
                .iter()
                .filter(|actor| actor.world == world)
                .filter(|actor| {
                    let (min, max) = actor.bounds();
                    (0..3).all(|axis| min[axis] <= hi[axis] && max[axis] >= lo[axis])
                })
                .copied()
                .collect()
        }
    }

    /// Terrain made of infinite walls perpendicular to the X axis.
    #[derive(Default)]
    pub struct FakeWalls {
        pub walls_x: Vec<f64>,
    }

    impl TerrainOracle for FakeWalls {
        fn first_blocking_surface(
            &self,
            _world: WorldId,
            ray: &Ray,
            max_distance: f64,
            _pass_through_entities: bool,
        ) -> Option<SurfaceHit> {
            let dx = ray.direction.vector().x;
            if dx == 0.0 {
                return None;
            }
            self.walls_x
                .iter()
                .map(|&wall| (wall - ray.origin.x) / dx)
                .filter(|&t| t >= 0.0 && t <= max_distance)
                .min_by(f64::total_cmp)
                .map(|t| {
                    let position = ray.point_at(t);
                    SurfaceHit::new(position, t, Some(BlockPos::from_point(&position)))
                })
        }
    }

    /// Actor of `kind` whose feet stand at `(x, y, z)`, 2 blocks tall and 1 wide.
    pub fn actor(id: u32, kind: EntityKind, x: f64, y: f64, z: f64) -> ActorRef {
        ActorRef::new(EntityId(id), WORLD, kind, Point3::new(x, y, z)).with_size(1.0, 2.0)
    }
}
