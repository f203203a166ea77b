use super::Vector3;

/// A ray sampled through one pixel of the image plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. Intersection tests expect the direction
    /// to already be normalized; the renderer normalizes once per pixel.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The point along this ray at distance `t` from the origin.
    pub fn along(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }
}
