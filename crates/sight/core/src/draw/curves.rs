use std::f64::consts::{PI, TAU};

use crate::geometry::{Point3, Vector3};

/// `density` points evenly spaced by angle on the horizontal circle of
/// `radius` around `center`, starting on +X. Density is clamped to at least one.
pub fn circle_points(center: &Point3, radius: f64, density: u32) -> Vec<Point3> {
    let density = density.max(1);
    (0..density)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(density);
            center + Vector3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

/// `density` points on the sphere of `radius` around `center`, placed on a
/// golden-angle (Fibonacci) lattice for near-uniform coverage.
///
/// Point `i` has polar angle `acos(1 - 2i/density)` measured from +Y and
/// azimuth `i·π(1+√5)`. Density is clamped to at least one.
pub fn sphere_points(center: &Point3, radius: f64, density: u32) -> Vec<Point3> {
    let density = density.max(1);
    let golden = PI * (1.0 + 5f64.sqrt());
    (0..density)
        .map(|i| {
            let i = f64::from(i);
            let theta = (1.0 - 2.0 * i / f64::from(density)).acos();
            let phi = golden * i;
            center
                + Vector3::new(
                    radius * theta.sin() * phi.cos(),
                    radius * theta.cos(),
                    radius * theta.sin() * phi.sin(),
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn circle_points_lie_on_the_horizontal_circle() {
        let center = Point3::new(4.0, 65.0, -2.0);
        let points = circle_points(&center, 2.5, 17);
        assert_eq!(points.len(), 17);
        for p in &points {
            assert_eq!(p.y, center.y);
            let horizontal = ((p.x - center.x).powi(2) + (p.z - center.z).powi(2)).sqrt();
            assert_abs_diff_eq!(horizontal, 2.5, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(points[0], Point3::new(6.5, 65.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn circle_density_is_clamped() {
        assert_eq!(circle_points(&Point3::origin(), 1.0, 0).len(), 1);
    }

    #[test]
    fn sphere_points_lie_on_the_sphere() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let points = sphere_points(&center, 4.0, 200);
        assert_eq!(points.len(), 200);
        for p in &points {
            assert_abs_diff_eq!(nalgebra::distance(p, &center), 4.0, epsilon = 1e-9);
        }
        // First point sits on the top pole.
        assert_abs_diff_eq!(points[0], Point3::new(1.0, 6.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn sphere_points_cover_both_hemispheres_evenly() {
        let points = sphere_points(&Point3::origin(), 1.0, 1000);
        let upper = points.iter().filter(|p| p.y > 0.0).count();
        assert!((490..=510).contains(&upper), "upper hemisphere has {upper} points");
    }
}
