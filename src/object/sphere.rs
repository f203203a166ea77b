use crate::{
    color::Color,
    math::{Ray, Vector3},
    scene::HIT_EPSILON,
};

use super::HitRecord;

/// A sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
    pub color: Color,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vector3::default(),
            radius: 1.,
            color: Color::white(),
        }
    }
}

impl Sphere {
    pub fn new(center: Vector3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Solve the quadratic for the ray against this sphere and return the
    /// nearest root past the epsilon bias, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let x = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2. * ray.direction.dot(x);
        let c = x.dot(x) - self.radius * self.radius;

        let disc = b * b - 4. * a * c;
        if disc < 0. {
            return None;
        }

        let half_span = disc.sqrt() / (2. * a);
        let mid = -b / (2. * a);
        let near = mid - half_span;
        let far = mid + half_span;

        // Prefer the near root; fall back to the far one when the near
        // root sits behind the epsilon bias (origin inside or grazing).
        let t = if near > HIT_EPSILON {
            near
        } else if far > HIT_EPSILON {
            far
        } else {
            return None;
        };

        let point = ray.along(t);
        Some(HitRecord {
            t,
            point,
            // unnormalized, magnitude ~ radius
            normal: point - self.center,
            color: self.color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_at(z: f32) -> Sphere {
        Sphere::new(Vector3::new(0., 0., z), 2., Color::white())
    }

    #[test]
    fn test_hit_through_center() {
        let sphere = sphere_at(0.);
        let ray = Ray::new(Vector3::new(0., 0., 10.), Vector3::new(0., 0., -1.));

        // |origin - center| - radius
        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 8.).abs() < 1e-4);
        assert!((hit.point.z - 2.).abs() < 1e-4);
        assert!((hit.normal.magnitude() - sphere.radius).abs() < 1e-3);
    }

    #[test]
    fn test_near_root_behind_epsilon_falls_back() {
        let sphere = sphere_at(0.);
        // origin 0.05 outside the surface, within the 0.1 bias
        let ray = Ray::new(Vector3::new(0., 0., 2.05), Vector3::new(0., 0., -1.));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 4.05).abs() < 1e-3);
    }

    #[test]
    fn test_tangent_ray_single_hit() {
        let sphere = sphere_at(0.);
        let ray = Ray::new(Vector3::new(2., 0., 10.), Vector3::new(0., 0., -1.));

        // discriminant ~ 0: one hit at the point of tangency, never two
        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 10.).abs() < 1e-3);
    }

    #[test]
    fn test_miss() {
        let sphere = sphere_at(0.);
        let ray = Ray::new(Vector3::new(10., 0., 10.), Vector3::new(0., 0., -1.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = sphere_at(10.);
        let ray = Ray::new(Vector3::new(0., 0., 0.), Vector3::new(0., 0., -1.));
        assert_eq!(sphere.intersect(&ray), None);
    }
}
