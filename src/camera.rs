use crate::math::{Vector2, Vector3};

/// A camera. Rays originate at `origin` and fan out around `direction`
/// through an image plane whose half-extent is `dimensions`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vector3,
    /// The forward direction. Need not be normalized; the renderer
    /// normalizes each per-pixel ray instead.
    pub direction: Vector3,
    /// Image-plane extent, which scales the field of view.
    pub dimensions: Vector2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            origin: Vector3::default(),
            direction: Vector3::new(0., 0., 1.),
            dimensions: Vector2::new(1., 1.),
        }
    }
}

impl Camera {
    /// Instantiate a new Camera.
    pub fn new(origin: Vector3, direction: Vector3, dimensions: Vector2) -> Self {
        Self {
            origin,
            direction,
            dimensions,
        }
    }
}
