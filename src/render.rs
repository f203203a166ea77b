use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    camera::Camera,
    color::Color,
    lighting,
    math::{Ray, Vector3},
    scene::Scene,
};

/// Packs a shaded color into one 4-byte pixel. Supplied by the surface
/// owner so the renderer never assumes a channel order.
pub type PackFn = fn(Color) -> [u8; 4];

/// The destination surface geometry did not add up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("row pitch of {pitch} bytes cannot fit {width} pixels")]
    PitchTooSmall { pitch: usize, width: usize },
    #[error("buffer of {len} bytes is smaller than {height} rows of {pitch} bytes")]
    BufferTooSmall {
        len: usize,
        pitch: usize,
        height: usize,
    },
}

/// A borrowed pixel buffer to render into: base bytes, raster size, row
/// pitch in bytes, and the color-packing function. The renderer writes
/// every pixel of every row and leaves any pitch padding untouched.
#[derive(Debug)]
pub struct RenderTarget<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
    pitch: usize,
    pack: PackFn,
}

impl<'a> RenderTarget<'a> {
    pub fn new(
        pixels: &'a mut [u8],
        width: usize,
        height: usize,
        pitch: usize,
        pack: PackFn,
    ) -> Result<Self, TargetError> {
        if pitch < width * 4 {
            return Err(TargetError::PitchTooSmall { pitch, width });
        }
        if pixels.len() < pitch * height {
            return Err(TargetError::BufferTooSmall {
                len: pixels.len(),
                pitch,
                height,
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            pitch,
            pack,
        })
    }

    /// A tightly packed RGBA target.
    pub fn rgba(pixels: &'a mut [u8], width: usize, height: usize) -> Result<Self, TargetError> {
        Self::new(pixels, width, height, width * 4, pack_rgba)
    }
}

fn pack_rgba(color: Color) -> [u8; 4] {
    [color.r, color.g, color.b, 255]
}

/// Render one frame of `scene` through `camera` into `target`.
///
/// One ray per pixel: nearest intersection, then point-light shading, or
/// background black on a miss. Rows are split into contiguous horizontal
/// bands, one per available thread; each band owns a disjoint slice of
/// the buffer and all bands are joined before this returns. The scene is
/// read-only for the whole call, so rendering the same scene twice
/// produces identical buffers.
pub fn render(scene: &Scene, camera: &Camera, target: &mut RenderTarget<'_>) {
    let (width, height) = (target.width, target.height);
    if width == 0 || height == 0 {
        return;
    }

    let origin = camera.origin;
    let base_dir = camera.direction;

    // screen-space basis from the fixed world axes, scaled so one step
    // crosses one pixel of the image plane
    let hdir = Vector3::new(0., 1., 0.).cross(base_dir);
    let vdir = Vector3::new(1., 0., 0.).cross(base_dir);
    let hdir = hdir * (camera.dimensions.x / (hdir.magnitude() * width as f32));
    let vdir = vdir * (camera.dimensions.y / (vdir.magnitude() * height as f32));

    let pitch = target.pitch;
    let pack = target.pack;

    let bands = rayon::current_num_threads();
    let band_rows = (height + bands - 1) / bands;
    log::debug!("rendering {}x{} in {} row bands", width, height, bands);

    target.pixels[..pitch * height]
        .par_chunks_mut(pitch * band_rows)
        .enumerate()
        .for_each(|(band, rows)| {
            for (row, line) in rows.chunks_mut(pitch).enumerate() {
                let y = band * band_rows + row;
                let ydir = vdir * (y as f32 + 0.5 - height as f32 / 2.);

                for x in 0..width {
                    let dir = base_dir + hdir * (x as f32 + 0.5 - width as f32 / 2.) + ydir;
                    // normalized once per pixel, not per primitive
                    let ray = Ray::new(origin, dir.normalize());

                    let color = match scene.cast_ray(&ray) {
                        Some(hit) => lighting::shade(
                            scene.lights(),
                            hit.point,
                            hit.normal,
                            origin,
                            hit.color,
                        ),
                        None => Color::black(),
                    };

                    line[x * 4..x * 4 + 4].copy_from_slice(&(pack)(color));
                }
            }
        });
}

/// Render into a freshly allocated RGBA image. Convenience for callers
/// without a surface of their own, like the demo binary and tests.
pub fn render_to_image(scene: &Scene, camera: &Camera, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    {
        let mut target = RenderTarget {
            pixels: &mut *img,
            width: width as usize,
            height: height as usize,
            pitch: width as usize * 4,
            pack: pack_rgba,
        };
        render(scene, camera, &mut target);
    }
    img
}
