//! A minimal direct-illumination ray tracer: spheres and planes lit by
//! point lights, one ray per pixel, rendered in parallel row bands.

pub mod camera;
pub mod color;
pub mod lighting;
pub mod math;
pub mod object;
pub mod render;
pub mod scene;
