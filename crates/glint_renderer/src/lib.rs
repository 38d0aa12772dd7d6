//! Glint Renderer - CPU Whitted ray tracing
//!
//! A recursive ray tracer with Phong direct lighting, hard shadows, mirror
//! reflection and Snell refraction. Primary rays come from a fixed pinhole
//! camera; rows of the image are traced in parallel with rayon.

mod camera;
mod circle;
mod geometry;
mod optics;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod tonemap;
mod tracer;
mod triangle;

pub use camera::{Camera, PIXEL_CENTER, SUBPIXEL_GRID};
pub use circle::Circle;
pub use geometry::Geometry;
pub use optics::{offset_origin, reflect, refract};
pub use plane::Plane;
pub use renderer::{
    render, render_pixel, render_with_threads, ImageBuffer, RenderConfig, RenderError, RenderResult,
};
pub use scene::{Scene, SceneHit};
pub use sphere::Sphere;
pub use tonemap::{quantize, tone_map, tone_map_color};
pub use tracer::cast_ray;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};

/// Re-export scene data from glint_core
pub use glint_core::{Color, EnvironmentMap, Light, Material, Mesh};
