mod plane;
mod sphere;

use std::fmt;

use thiserror::Error;

use crate::{
    camera::Camera,
    color::Color,
    lighting::PointLight,
    math::{Ray, Vector2, Vector3},
};

pub use plane::*;
pub use sphere::*;

/// The nearest surface a ray reached, with everything shading needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRecord {
    /// Distance along the ray.
    pub t: f32,
    pub point: Vector3,
    /// Unnormalized, pointing away from the primitive interior.
    pub normal: Vector3,
    pub color: Color,
}

/// The variant tag of an [`Object`], mostly for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Sphere,
    Plane,
    PointLight,
    Camera,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Sphere => write!(f, "sphere"),
            ObjectKind::Plane => write!(f, "plane"),
            ObjectKind::PointLight => write!(f, "point light"),
            ObjectKind::Camera => write!(f, "camera"),
        }
    }
}

/// An attribute write was rejected because the variant does not carry
/// that attribute (e.g. setting a radius on a plane).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a {kind} has no {attribute}")]
pub struct AttributeError {
    pub kind: ObjectKind,
    pub attribute: &'static str,
}

/// Anything that can live in a scene: renderable primitives, lights,
/// and cameras. Attribute setters are partial; writing an attribute a
/// variant lacks fails fast with [`AttributeError`] instead of silently
/// doing nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
    PointLight(PointLight),
    Camera(Camera),
}

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Sphere(_) => ObjectKind::Sphere,
            Object::Plane(_) => ObjectKind::Plane,
            Object::PointLight(_) => ObjectKind::PointLight,
            Object::Camera(_) => ObjectKind::Camera,
        }
    }

    fn reject(&self, attribute: &'static str) -> AttributeError {
        AttributeError {
            kind: self.kind(),
            attribute,
        }
    }

    /// Every variant has a position.
    pub fn set_position(&mut self, position: Vector3) -> Result<(), AttributeError> {
        match self {
            Object::Sphere(sphere) => sphere.center = position,
            Object::Plane(plane) => plane.origin = position,
            Object::PointLight(light) => light.position = position,
            Object::Camera(camera) => camera.origin = position,
        }
        Ok(())
    }

    /// Valid for planes (surface normal) and cameras (forward direction).
    pub fn set_direction(&mut self, direction: Vector3) -> Result<(), AttributeError> {
        match self {
            Object::Plane(plane) => plane.normal = direction,
            Object::Camera(camera) => camera.direction = direction,
            _ => return Err(self.reject("direction")),
        }
        Ok(())
    }

    /// Valid for spheres only.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), AttributeError> {
        match self {
            Object::Sphere(sphere) => sphere.radius = radius,
            _ => return Err(self.reject("radius")),
        }
        Ok(())
    }

    /// Valid for the renderable primitives, spheres and planes.
    pub fn set_color(&mut self, color: Color) -> Result<(), AttributeError> {
        match self {
            Object::Sphere(sphere) => sphere.color = color,
            Object::Plane(plane) => plane.color = color,
            _ => return Err(self.reject("color")),
        }
        Ok(())
    }

    /// Valid for cameras only.
    pub fn set_dimensions(&mut self, dimensions: Vector2) -> Result<(), AttributeError> {
        match self {
            Object::Camera(camera) => camera.dimensions = dimensions,
            _ => return Err(self.reject("dimensions")),
        }
        Ok(())
    }

    /// Valid for point lights only.
    pub fn set_luminosity(&mut self, luminosity: f32) -> Result<(), AttributeError> {
        match self {
            Object::PointLight(light) => light.luminosity = luminosity,
            _ => return Err(self.reject("luminosity")),
        }
        Ok(())
    }

    /// Intersect a ray against this object. Lights and cameras have no
    /// surface and never intersect.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
            Object::Plane(plane) => plane.intersect(ray),
            Object::PointLight(_) | Object::Camera(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_valid_everywhere() {
        let pos = Vector3::new(1., 2., 3.);
        let mut objects = [
            Object::Sphere(Sphere::default()),
            Object::Plane(Plane::default()),
            Object::PointLight(PointLight::default()),
            Object::Camera(Camera::default()),
        ];

        for object in objects.iter_mut() {
            assert_eq!(object.set_position(pos), Ok(()));
        }
        match objects[0] {
            Object::Sphere(sphere) => assert_eq!(sphere.center, pos),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_radius_rejected_on_plane() {
        let mut plane = Object::Plane(Plane::default());
        assert_eq!(
            plane.set_radius(4.),
            Err(AttributeError {
                kind: ObjectKind::Plane,
                attribute: "radius",
            })
        );
    }

    #[test]
    fn test_luminosity_only_on_lights() {
        let mut light = Object::PointLight(PointLight::default());
        assert_eq!(light.set_luminosity(50.), Ok(()));
        match light {
            Object::PointLight(light) => assert_eq!(light.luminosity, 50.),
            _ => unreachable!(),
        }

        let mut sphere = Object::Sphere(Sphere::default());
        assert!(sphere.set_luminosity(50.).is_err());
    }

    #[test]
    fn test_direction_partiality() {
        let dir = Vector3::new(0., 1., 0.);
        let mut plane = Object::Plane(Plane::default());
        let mut camera = Object::Camera(Camera::default());
        let mut sphere = Object::Sphere(Sphere::default());

        assert_eq!(plane.set_direction(dir), Ok(()));
        assert_eq!(camera.set_direction(dir), Ok(()));
        assert!(sphere.set_direction(dir).is_err());
    }

    #[test]
    fn test_dimensions_only_on_cameras() {
        let mut camera = Object::Camera(Camera::default());
        assert_eq!(camera.set_dimensions(Vector2::new(0.3, 0.3)), Ok(()));

        let mut light = Object::PointLight(PointLight::default());
        let err = light.set_dimensions(Vector2::new(1., 1.)).unwrap_err();
        assert_eq!(err.to_string(), "a point light has no dimensions");
    }

    #[test]
    fn test_lights_and_cameras_never_intersect() {
        let ray = Ray::new(Vector3::new(0., 0., 10.), Vector3::new(0., 0., -1.));
        let light = Object::PointLight(PointLight::new(Vector3::default(), 1.));
        let camera = Object::Camera(Camera::default());

        assert_eq!(light.intersect(&ray), None);
        assert_eq!(camera.intersect(&ray), None);
    }
}
