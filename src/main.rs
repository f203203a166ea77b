use std::time::Instant;

use raycurves::{
    camera::Camera,
    color::Color,
    lighting::PointLight,
    math::{Vector2, Vector3},
    object::{Object, Plane, Sphere},
    render::render_to_image,
    scene::Scene,
};

const FRAMES: u32 = 8;

fn main() {
    env_logger::init();

    let mut scene = Scene::new();

    scene.add(Object::PointLight(PointLight::new(
        Vector3::new(5., 10., 5.),
        200.,
    )));
    scene.add(Object::PointLight(PointLight::new(
        Vector3::new(-5., -10., 10.),
        100.,
    )));

    // backdrop floor
    scene.add(Object::Plane(Plane::new(
        Vector3::new(0., 0., -8.),
        Vector3::new(0., 0., 1.),
        Color::white(),
    )));

    scene.add(Object::Sphere(Sphere::new(
        Vector3::new(0., 0., -3.),
        2.,
        Color::white(),
    )));
    let orbiter = scene.add(Object::Sphere(Sphere::new(
        Vector3::new(0., 7., 3.),
        1.,
        Color::new(255, 0, 0),
    )));

    scene.add(Object::Camera(Camera::new(
        Vector3::new(0., 0., 100.),
        Vector3::new(0., 0., -1.),
        Vector2::new(0.3, 0.3),
    )));

    for frame in 0..FRAMES {
        let start = Instant::now();

        let img = {
            let camera = scene.cameras().next().expect("scene has a camera");
            render_to_image(&scene, camera, 600, 600)
        };
        let path = format!("frame_{:03}.png", frame);
        img.save(&path).expect("failed to write frame");
        log::info!("{} rendered in {:?}", path, start.elapsed());

        // orbit the red sphere between frames
        let angle = 0.03 * (frame + 1) as f32;
        scene
            .object_mut(orbiter)
            .set_position(Vector3::new(7. * angle.sin(), 7. * angle.cos(), 3.))
            .expect("spheres have a position");
    }
}
