use nalgebra::Unit;

use super::{Point3, Vector3};
use crate::error::{ErrorSeverity, SpatialError};

/// Errors raised by the geometry kernel.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A zero-length (or non-finite) vector was passed where a direction is required.
    #[error("cannot normalize degenerate vector {0:?}")]
    DegenerateVector(Vector3),
}

impl SpatialError for GeometryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            GeometryError::DegenerateVector(_) => "GEOMETRY_DEGENERATE_VECTOR",
        }
    }
}

/// Unit-length direction in world space.
///
/// The only way to obtain one is through normalization, so every value
/// satisfies `|d| ≈ 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vector3", into = "Vector3")
)]
pub struct Direction3(Unit<Vector3>);

impl Direction3 {
    /// Normalizes `vector`, failing on zero-length input.
    pub fn new(vector: Vector3) -> Result<Self, GeometryError> {
        normalize(vector)
    }

    /// Positive X axis.
    pub fn x() -> Self {
        Self(Vector3::x_axis())
    }

    /// World up (+Y).
    pub fn up() -> Self {
        Self(Vector3::y_axis())
    }

    /// Positive Z axis.
    pub fn z() -> Self {
        Self(Vector3::z_axis())
    }

    /// Facing direction from yaw and pitch in degrees.
    ///
    /// Yaw 0 faces +Z and grows clockwise seen from above (towards -X);
    /// positive pitch looks down.
    pub fn from_yaw_pitch(yaw_degrees: f64, pitch_degrees: f64) -> Self {
        let (yaw, pitch) = (yaw_degrees.to_radians(), pitch_degrees.to_radians());
        let horizontal = pitch.cos();
        Self(Unit::new_normalize(Vector3::new(
            -yaw.sin() * horizontal,
            -pitch.sin(),
            yaw.cos() * horizontal,
        )))
    }

    pub fn vector(&self) -> Vector3 {
        self.0.into_inner()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.0.dot(other)
    }

    /// Returns `self * distance` as a displacement.
    pub fn scaled(&self, distance: f64) -> Vector3 {
        self.0.into_inner() * distance
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(-self.0)
    }
}

impl TryFrom<Vector3> for Direction3 {
    type Error = GeometryError;

    fn try_from(vector: Vector3) -> Result<Self, Self::Error> {
        normalize(vector)
    }
}

impl From<Direction3> for Vector3 {
    fn from(direction: Direction3) -> Self {
        direction.vector()
    }
}

/// Returns `v / |v|`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] when `|v| == 0` or any
/// component is not finite.
pub fn normalize(v: Vector3) -> Result<Direction3, GeometryError> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(GeometryError::DegenerateVector(v));
    }
    Unit::try_new(v, 0.0)
        .map(Direction3)
        .ok_or(GeometryError::DegenerateVector(v))
}

/// Squared Euclidean distance; symmetric and never negative.
pub fn distance_squared(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance_squared(a, b)
}

/// Cosine of the angle between `a` and `b`, clamped to `[-1, 1]`.
///
/// Threshold comparisons against a precomputed cosine avoid `acos` and its
/// instability near ±1.
pub fn angle_cosine(a: &Vector3, b: &Vector3) -> Result<f64, GeometryError> {
    let a = normalize(*a)?;
    let b = normalize(*b)?;
    Ok(a.dot(&b.vector()).clamp(-1.0, 1.0))
}

/// `origin + direction * distance`.
pub fn point_along_ray(origin: &Point3, direction: &Direction3, distance: f64) -> Point3 {
    origin + direction.scaled(distance)
}
