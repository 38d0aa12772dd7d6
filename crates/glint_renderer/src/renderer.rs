//! Image rendering.
//!
//! Every pixel is traced independently from a fixed set of sub-pixel
//! offsets, so the result does not depend on the number of worker threads
//! or on the order in which rows are scheduled.

use crate::camera::{PIXEL_CENTER, SUBPIXEL_GRID};
use crate::tonemap::{quantize, tone_map_color};
use crate::{cast_ray, Camera, Color, EnvironmentMap, Scene};
use glint_math::Interval;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while setting up a render.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection and refraction rays
    pub max_depth: u32,
    /// Color returned by rays that miss everything or exceed `max_depth`
    pub background: Color,
    /// Environment image sampled by missing rays (planar x/y lookup)
    pub environment: Option<Arc<EnvironmentMap>>,
    /// Offset applied to secondary ray origins along the surface normal
    pub bias: f32,
    /// Hits at or beyond this distance are ignored
    pub max_distance: f32,
    /// Average a 2x2 sub-pixel grid instead of one sample at the center
    pub supersample: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::splat(0.1),
            environment: None,
            bias: 0.01,
            max_distance: 1e10,
            supersample: false,
        }
    }
}

impl RenderConfig {
    /// Range of ray parameters that count as a hit.
    #[inline]
    pub fn ray_interval(&self) -> Interval {
        Interval::new(0.0, self.max_distance)
    }
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let offsets: &[(f32, f32)] = if config.supersample {
        &SUBPIXEL_GRID
    } else {
        &PIXEL_CENTER
    };

    let weight = 1.0 / offsets.len() as f32;

    offsets.iter().fold(Color::ZERO, |acc, &(dx, dy)| {
        let ray = camera.get_ray(x, y, dx, dy);
        acc + cast_ray(&ray, scene, 0, config) * weight
    })
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major with row 0 at the top of the image.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Apply `v / (v + 1)` to every channel of every pixel.
    pub fn tone_map(&mut self) {
        self.pixels.par_iter_mut().for_each(|pixel| {
            *pixel = tone_map_color(*pixel);
        });
    }

    /// Convert to RGB bytes, clamping each channel to [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&quantize(*color));
        }
        bytes
    }
}

/// Render the entire scene on the current rayon pool.
///
/// Each row is traced by one task and written only by that task.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    if image.pixels.is_empty() {
        log::warn!("Empty image ({}x{}), nothing to render", image.width, image.height);
        return image;
    }

    let start = Instant::now();
    let width = image.width as usize;

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, x as u32, y as u32, config);
            }
        });

    log::info!(
        "Rendered {}x{} ({} objects, {} lights) in {:.2}s",
        image.width,
        image.height,
        scene.len(),
        scene.lights().len(),
        start.elapsed().as_secs_f32()
    );

    image
}

/// Render the entire scene on a dedicated pool of `threads` workers.
///
/// A thread count of 0 is treated as 1.
pub fn render_with_threads(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    threads: usize,
) -> RenderResult<ImageBuffer> {
    let threads = threads.max(1);
    log::debug!("Rendering with {} threads", threads);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    Ok(pool.install(|| render(camera, scene, config)))
}
