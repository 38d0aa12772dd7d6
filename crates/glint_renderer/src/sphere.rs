//! Sphere primitive for ray tracing.

use crate::{Color, Material, Ray};
use glint_math::Vec3;

/// A sphere primitive.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Distance along the ray to the nearest non-negative root.
    ///
    /// When the origin is inside the sphere the far root is returned; when
    /// both roots lie behind the origin there is no hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        if a == 0.0 {
            return None;
        }

        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // a > 0, so x1 <= x2
        let x1 = -0.5 * (b + sqrtd) / a;
        let x2 = -0.5 * (b - sqrtd) / a;

        if x1 >= 0.0 {
            Some(x1)
        } else if x2 >= 0.0 {
            Some(x2)
        } else {
            None
        }
    }

    /// Radial unit normal pointing out of the sphere.
    pub fn outward_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    pub fn color(&self, _point: Vec3) -> Color {
        self.material.diffuse_color
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}
