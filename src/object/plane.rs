use crate::{
    color::Color,
    math::{Ray, Vector3},
    scene::HIT_EPSILON,
};

use super::HitRecord;

/// An infinite plane through `origin` with the given surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vector3,
    pub normal: Vector3,
    pub color: Color,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            origin: Vector3::default(),
            normal: Vector3::new(0., 0., 1.),
            color: Color::white(),
        }
    }
}

impl Plane {
    pub fn new(origin: Vector3, normal: Vector3, color: Color) -> Self {
        Self {
            origin,
            normal,
            color,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let t = (self.origin - ray.origin).dot(self.normal) / ray.direction.dot(self.normal);

        // a parallel ray divides by zero; reject the non-finite t
        if !t.is_finite() || t <= HIT_EPSILON {
            return None;
        }

        Some(HitRecord {
            t,
            point: ray.along(t),
            // constant across the surface
            normal: self.normal,
            color: self.color,
        })
    }
}
