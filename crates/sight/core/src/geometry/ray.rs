use super::{Direction3, GeometryError, Point3, normalize, point_along_ray};

/// Half-line starting at `origin` heading along a unit `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Point3,
    pub direction: Direction3,
}

/// Decomposition of a point relative to a ray's axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisProjection {
    /// Signed distance along the axis to the foot of the perpendicular.
    pub along: f64,
    /// Distance from the point to that foot.
    pub lateral: f64,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Direction3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` aimed at `target`, together with the distance between them.
    ///
    /// # Errors
    ///
    /// Fails when both points coincide.
    pub fn towards(origin: Point3, target: Point3) -> Result<(Self, f64), GeometryError> {
        let offset = target - origin;
        let direction = normalize(offset)?;
        Ok((Self::new(origin, direction), offset.norm()))
    }

    pub fn point_at(&self, distance: f64) -> Point3 {
        point_along_ray(&self.origin, &self.direction, distance)
    }

    /// Projects `point` onto the ray's (infinite) axis.
    pub fn project(&self, point: &Point3) -> AxisProjection {
        let along = self.direction.dot(&(point - self.origin));
        let lateral = nalgebra::distance(point, &self.point_at(along));
        AxisProjection { along, lateral }
    }
}
