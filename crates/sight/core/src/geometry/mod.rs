//! Geometry kernel: points, unit directions, and rays in world space.
//!
//! World coordinates are `f64` [`nalgebra`] points and vectors. Only the
//! direction type carries an invariant (unit length), enforced at
//! construction by [`normalize`].
mod ray;
mod vector;

pub use ray::{AxisProjection, Ray};
pub use vector::{
    Direction3, GeometryError, angle_cosine, distance_squared, normalize, point_along_ray,
};

/// Immutable coordinate in world space.
pub type Point3 = nalgebra::Point3<f64>;

/// Displacement between two world-space points.
pub type Vector3 = nalgebra::Vector3<f64>;
