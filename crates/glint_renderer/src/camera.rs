//! Camera for ray generation.

use crate::Ray;
use glint_math::Vec3;

/// Sub-pixel offset of the pixel center.
pub const PIXEL_CENTER: [(f32, f32); 1] = [(0.5, 0.5)];

/// Sub-pixel offsets of the 2x2 supersampling grid.
pub const SUBPIXEL_GRID: [(f32, f32); 4] = [(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)];

/// Pinhole camera at the origin looking down -Z with +Y up.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Vertical field of view in degrees
    vfov: f32,

    // Cached computed values
    center: Vec3,
    /// Signed z of the projection plane, in pixel units
    plane_z: f32,
}

impl Camera {
    /// Create a new camera with default settings (800x512, 90 degrees).
    pub fn new() -> Self {
        let mut camera = Self {
            image_width: 800,
            image_height: 512,
            vfov: 90.0,
            center: Vec3::ZERO,
            plane_z: 0.0,
        };
        camera.update();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self.update();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.update();
        self
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    /// Distance to the projection plane so that the image height spans the
    /// vertical field of view.
    fn update(&mut self) {
        let theta = self.vfov.to_radians();
        self.plane_z = -(self.image_height as f32) / (2.0 * (theta / 2.0).tan());
    }

    /// Ray through pixel (i, j) at sub-pixel offset (dx, dy).
    ///
    /// Row 0 is the top of the image. The direction is unit length.
    pub fn get_ray(&self, i: u32, j: u32, dx: f32, dy: f32) -> Ray {
        let x = (i as f32 + dx) - self.image_width as f32 / 2.0;
        let y = -(j as f32 + dy) + self.image_height as f32 / 2.0;

        Ray::new(self.center, Vec3::new(x, y, self.plane_z).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
