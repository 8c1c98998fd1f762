use std::fmt;

use super::EntityKind;
use crate::geometry::{Direction3, Point3, Vector3};

/// Stable identity of an entity inside the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of one world (dimension) hosted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldId(pub u32);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "world:{}", self.0)
    }
}

/// A point that may or may not be attached to a loaded world.
///
/// Queries anchored at a detached location return no results.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub world: Option<WorldId>,
    pub position: Point3,
}

impl Location {
    pub const fn new(world: WorldId, position: Point3) -> Self {
        Self {
            world: Some(world),
            position,
        }
    }

    /// Location with no world context.
    pub const fn detached(position: Point3) -> Self {
        Self {
            world: None,
            position,
        }
    }
}

/// Call-scoped view of an entity handed out by the entity oracle.
///
/// Equality and hashing use [`EntityId`] only: two snapshots of the same
/// entity taken at different moments compare equal.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorRef {
    pub id: EntityId,
    pub world: WorldId,
    pub kind: EntityKind,
    /// Feet position (bottom centre of the bounding box).
    pub position: Point3,
    pub facing: Direction3,
    pub width: f64,
    pub height: f64,
    /// Offset from the feet to the eyes.
    pub eye_height: f64,
}

impl ActorRef {
    /// Creates an actor facing +Z with the default dimensions of its kind.
    pub fn new(id: EntityId, world: WorldId, kind: EntityKind, position: Point3) -> Self {
        let (width, height) = kind.dimensions();
        Self {
            id,
            world,
            kind,
            position,
            facing: Direction3::z(),
            width,
            height,
            eye_height: height / 2.0,
        }
    }

    #[must_use]
    pub fn with_facing(mut self, facing: Direction3) -> Self {
        self.facing = facing;
        self
    }

    /// Overrides the bounding box; the eye is reset to half the new height.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self.eye_height = height / 2.0;
        self
    }

    #[must_use]
    pub fn with_eye_height(mut self, eye_height: f64) -> Self {
        self.eye_height = eye_height;
        self
    }

    pub fn eye_position(&self) -> Point3 {
        self.position + Vector3::new(0.0, self.eye_height, 0.0)
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> Point3 {
        self.position + Vector3::new(0.0, self.height / 2.0, 0.0)
    }

    pub fn location(&self) -> Location {
        Location::new(self.world, self.position)
    }

    pub fn is_living(&self) -> bool {
        self.kind.is_living()
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bounds(&self) -> (Point3, Point3) {
        let half = self.width / 2.0;
        (
            self.position - Vector3::new(half, 0.0, half),
            self.position + Vector3::new(half, self.height, half),
        )
    }
}

impl PartialEq for ActorRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActorRef {}

impl std::hash::Hash for ActorRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_defaults_to_half_height() {
        let actor = ActorRef::new(EntityId(1), WorldId(0), EntityKind::Player, Point3::origin());
        assert_eq!(actor.eye_position(), Point3::new(0.0, 0.9, 0.0));
        assert_eq!(actor.center(), actor.eye_position());

        let tall = actor.with_size(1.0, 3.0);
        assert_eq!(tall.eye_position().y, 1.5);
    }

    #[test]
    fn identity_ignores_snapshot_fields() {
        let a = ActorRef::new(EntityId(7), WorldId(0), EntityKind::Cow, Point3::origin());
        let moved = ActorRef {
            position: Point3::new(4.0, 0.0, 0.0),
            ..a
        };
        let other = ActorRef::new(EntityId(8), WorldId(0), EntityKind::Cow, Point3::origin());
        assert_eq!(a, moved);
        assert_ne!(a, other);
    }

    #[test]
    fn bounds_enclose_the_feet_position() {
        let actor = ActorRef::new(EntityId(1), WorldId(0), EntityKind::Cow, Point3::new(1.0, 2.0, 3.0))
            .with_size(1.0, 2.0);
        let (min, max) = actor.bounds();
        assert_eq!(min, Point3::new(0.5, 2.0, 2.5));
        assert_eq!(max, Point3::new(1.5, 4.0, 3.5));
    }
}
