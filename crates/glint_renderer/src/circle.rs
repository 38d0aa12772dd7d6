//! Flat disk primitive.

use crate::plane::plane_distance;
use crate::{Color, Material, Ray};
use glint_math::Vec3;

/// A disk of `radius` around `center`, lying in the plane with unit `normal`.
#[derive(Clone, Debug)]
pub struct Circle {
    center: Vec3,
    normal: Vec3,
    radius: f32,
    material: Material,
}

impl Circle {
    /// Create a new disk. The normal is normalized here.
    pub fn new(center: Vec3, normal: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            radius,
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = plane_distance(self.center, self.normal, ray)?;

        let r = ray.at(t) - self.center;
        if r.length_squared() > self.radius * self.radius {
            return None;
        }

        Some(t)
    }

    pub fn outward_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    pub fn color(&self, _point: Vec3) -> Color {
        self.material.diffuse_color
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk() -> Circle {
        Circle::new(Vec3::new(0.0, -4.0, -10.0), Vec3::Y, 12.0, Material::default())
    }

    #[test]
    fn test_circle_hit_inside_radius() {
        let circle = disk();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(circle.intersect(&ray), Some(4.0));
    }

    #[test]
    fn test_circle_rejects_outside_radius() {
        let circle = disk();

        // Crosses the plane 13 units from the center
        let ray = Ray::new(Vec3::new(13.0, 0.0, -10.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(circle.intersect(&ray).is_none());

        // Right at the rim still counts
        let ray = Ray::new(Vec3::new(12.0, 0.0, -10.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(circle.intersect(&ray).is_some());
    }

    #[test]
    fn test_circle_parallel_ray() {
        let circle = disk();
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(circle.intersect(&ray).is_none());
    }
}
