//! Environment image loading and lookup.
//!
//! An environment map replaces the flat background color for rays that leave
//! the scene. The lookup is a planar projection of the ray direction's x/y
//! components onto the image, not a spherical mapping.

use std::path::Path;

use glint_math::Vec3;
use thiserror::Error;

use crate::scene::Color;

/// Errors that can occur during environment loading.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Failed to load environment image {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Environment image is empty")]
    Empty,

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;

/// An 8-bit RGB image used as the scene background.
#[derive(Clone)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    /// Packed RGB bytes, row-major, top row first
    pixels: Vec<u8>,
}

impl std::fmt::Debug for EnvironmentMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentMap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl EnvironmentMap {
    /// Create an environment map from packed RGB bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> EnvironmentResult<Self> {
        if width == 0 || height == 0 {
            return Err(EnvironmentError::Empty);
        }

        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(EnvironmentError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color of the texel at integer coordinates, channels scaled to [0, 1].
    pub fn texel(&self, x: u32, y: u32) -> Color {
        let idx = 3 * (y as usize * self.width as usize + x as usize);
        let p = &self.pixels[idx..idx + 3];
        Color::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0
    }

    /// Look up the background seen along a unit `direction`.
    ///
    /// `x = (1 + dir.x) * width / 2`, `y = (1 - dir.y) * height / 2`,
    /// clamped to the image so `dir.x = 1` or `dir.y = -1` stay in bounds.
    pub fn sample(&self, direction: Vec3) -> Color {
        let x = (1.0 + direction.x) * self.width as f32 / 2.0;
        let y = (1.0 - direction.y) * self.height as f32 / 2.0;

        // `as u32` saturates, so negative and NaN coordinates land on 0
        let x = (x as u32).min(self.width - 1);
        let y = (y as u32).min(self.height - 1);

        self.texel(x, y)
    }
}

/// Load an environment image from disk as 8-bit RGB.
pub fn load_environment(path: impl AsRef<Path>) -> EnvironmentResult<EnvironmentMap> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| EnvironmentError::Load {
        path: path.display().to_string(),
        source,
    })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let env = EnvironmentMap::new(width, height, rgb.into_raw())?;

    log::debug!("Loaded environment: {} ({}x{})", path.display(), width, height);

    Ok(env)
}
