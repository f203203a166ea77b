use crate::{
    camera::Camera,
    lighting::PointLight,
    math::Ray,
    object::{HitRecord, Object},
};

/// Hits closer than this along a ray are discarded. Not a physical
/// constant; it biases away self-intersection and degenerate near hits.
pub const HIT_EPSILON: f32 = 0.1;

/// The far clip: no intersection beyond this distance counts.
pub const FAR_CLIP: f32 = 1000.;

/// A handle to an object inside a [`Scene`], issued by [`Scene::add`].
/// Only valid for the scene that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// A scene: every object in insertion order, plus the light and camera
/// collections the renderer reads. The scene owns its objects; between
/// render calls they are mutated through [`Scene::object_mut`] and the
/// per-variant setters.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<ObjectId>,
    cameras: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, classifying lights and cameras into their
    /// specialized collections as well.
    pub fn add(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len());
        match object {
            Object::PointLight(_) => self.lights.push(id),
            Object::Camera(_) => self.cameras.push(id),
            _ => {}
        }
        self.objects.push(object);
        id
    }

    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }

    /// Every object, in insertion order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// The point lights, in insertion order.
    pub fn lights(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter().filter_map(move |id| match &self.objects[id.0] {
            Object::PointLight(light) => Some(light),
            _ => None,
        })
    }

    /// The cameras, in insertion order.
    pub fn cameras(&self) -> impl Iterator<Item = &Camera> {
        self.cameras.iter().filter_map(move |id| match &self.objects[id.0] {
            Object::Camera(camera) => Some(camera),
            _ => None,
        })
    }

    /// Find the nearest hit along a ray, scanning every object linearly.
    /// The direction must be normalized. Returns `None` when nothing lies
    /// between the epsilon bias and the far clip; the renderer paints
    /// background for those rays.
    pub fn cast_ray(&self, ray: &Ray) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;
        let mut best = FAR_CLIP;

        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                if hit.t < best {
                    best = hit.t;
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }
}
