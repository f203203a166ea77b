mod point;

use crate::{color::Color, math::Vector3};

pub use point::*;

/// One light's influence at a shading point, split into the two sums
/// the tone map consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightShading {
    pub diffuse: f32,
    pub specular: f32,
}

/// Aggregate every light's contribution at a shading point and tone-map
/// the surface's base color. With no diffuse contribution at all the
/// result is exact black; there is no ambient term.
pub fn shade<'a>(
    lights: impl Iterator<Item = &'a PointLight>,
    point: Vector3,
    normal: Vector3,
    cam_pos: Vector3,
    base: Color,
) -> Color {
    let mut diffuse = 0.;
    let mut specular = 0.;
    for light in lights {
        let shading = light.shading(point, normal, cam_pos);
        diffuse += shading.diffuse;
        specular += shading.specular;
    }

    if diffuse == 0. {
        return Color::black();
    }

    Color::new(
        tone_map(base.r, diffuse, specular),
        tone_map(base.g, diffuse, specular),
        tone_map(base.b, diffuse, specular),
    )
}

/// Map one channel through the diffuse compression, then pull it toward
/// white by the specular sum. The same sums apply to all three channels,
/// so the highlight itself is colorless.
fn tone_map(channel: u8, diffuse: f32, specular: f32) -> u8 {
    let lit = (diffuse * f32::from(channel) / (1. + diffuse)).floor();
    (255. - (255. - lit) / (1. + specular)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overhead() -> (Vector3, Vector3, Vector3) {
        // point on a floor plane, normal up, camera above
        (
            Vector3::default(),
            Vector3::new(0., 0., 1.),
            Vector3::new(2., 0., 10.),
        )
    }

    fn luminance(c: Color) -> u32 {
        u32::from(c.r) + u32::from(c.g) + u32::from(c.b)
    }

    #[test]
    fn test_no_lights_is_black() {
        let (point, normal, cam) = overhead();
        let shaded = shade([].iter(), point, normal, cam, Color::white());
        assert_eq!(shaded, Color::black());
    }

    #[test]
    fn test_rejected_light_is_black() {
        let (point, normal, cam) = overhead();
        let below = PointLight::new(Vector3::new(0., 0., -5.), 500.);
        let shaded = shade([below].iter(), point, normal, cam, Color::white());
        assert_eq!(shaded, Color::black());
    }

    #[test]
    fn test_brightness_monotonic_in_luminosity() {
        let (point, normal, cam) = overhead();
        let position = Vector3::new(0., 3., 4.);

        let mut last = 0;
        for luminosity in [10., 50., 200., 800.] {
            let light = PointLight::new(position, luminosity);
            let shaded = shade([light].iter(), point, normal, cam, Color::white());
            assert!(luminance(shaded) > last);
            last = luminance(shaded);
        }
    }

    #[test]
    fn test_highlight_is_colorless() {
        let (point, normal, _) = overhead();
        // camera mirroring the light across the normal to force a highlight
        let light = PointLight::new(Vector3::new(1., 0., 1.), 100.);
        let cam = Vector3::new(-1., 0., 1.);

        let shaded = shade([light].iter(), point, normal, cam, Color::new(200, 40, 40));
        // the specular lift applies identically per channel
        assert_eq!(shaded.g, shaded.b);
        assert!(shaded.r > shaded.g);
        assert!(shaded.g > 0);
    }

    #[test]
    fn test_two_lights_accumulate() {
        let (point, normal, cam) = overhead();
        let a = PointLight::new(Vector3::new(0., 3., 4.), 100.);
        let b = PointLight::new(Vector3::new(0., -3., 4.), 100.);

        let one = shade([a].iter(), point, normal, cam, Color::white());
        let both = shade([a, b].iter(), point, normal, cam, Color::white());
        assert!(luminance(both) > luminance(one));
    }
}
