use crate::entity::{ActorRef, WorldId};
use crate::geometry::{Point3, Vector3};

/// Spatial index over the entities of every loaded world.
pub trait EntityOracle: Send + Sync {
    /// Returns the entities whose bounding boxes intersect the axis-aligned
    /// box of half-size `extents` centred on `center`.
    ///
    /// The box is a superset of any sphere of interest: callers re-check
    /// exact distances. No ordering is guaranteed. Unknown worlds yield an
    /// empty list.
    fn entities_near(&self, world: WorldId, center: Point3, extents: Vector3) -> Vec<ActorRef>;
}
