use crate::math::Vector3;

use super::LightShading;

/// A point light, emitting in all directions from a position with
/// inverse-square falloff.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3,
    pub luminosity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vector3::default(),
            luminosity: 1.,
        }
    }
}

impl PointLight {
    pub fn new(position: Vector3, luminosity: f32) -> Self {
        Self {
            position,
            luminosity,
        }
    }

    /// This light's contribution at a shading point. `normal` may be any
    /// nonzero length; `cam_pos` is the eye position for the highlight.
    pub fn shading(&self, point: Vector3, normal: Vector3, cam_pos: Vector3) -> LightShading {
        let l = point - self.position;
        let v = point - cam_pos;

        // light and camera on opposite sides of the surface: nothing
        // physical reaches the eye from this light
        if l.dot(normal) * v.dot(normal) < 0. {
            return LightShading::default();
        }

        // Lambertian cosine term with inverse-square falloff
        let diffuse =
            (self.luminosity * normal.dot(l) / (normal.magnitude() * l.magnitude()) / l.dot(l))
                .abs();

        // halfway-vector highlight, 512 = 2^9 for a very tight gloss
        let h = (l + v).normalize();
        let s = -h.dot(normal.normalize());
        let specular = if s > 0. { diffuse * s.powi(512) } else { 0. };

        LightShading { diffuse, specular }
    }
}
