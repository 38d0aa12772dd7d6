//! Infinite checkerboard plane.

use crate::{Color, Material, Ray};
use glint_math::Vec3;

/// Size of a checkerboard cell in world units.
const CHECKER_CELL: f32 = 2.0;

/// An infinite plane through `point` with unit `normal`.
///
/// Colored as a checkerboard of the material's two diffuse colors over the
/// X/Z offset from `point`.
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        plane_distance(self.point, self.normal, ray)
    }

    pub fn outward_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    pub fn color(&self, point: Vec3) -> Color {
        let r = point - self.point;
        let cell_x = (r.x / CHECKER_CELL).floor() as i64;
        let cell_z = (r.z / CHECKER_CELL).floor() as i64;

        if (cell_x + cell_z).rem_euclid(2) == 0 {
            self.material.diffuse_color
        } else {
            self.material.diffuse_color2
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Ray parameter where `ray` crosses the plane through `point` with `normal`.
///
/// A ray parallel to the plane, a ray starting on the plane and a crossing
/// at or behind the origin are all misses.
pub(crate) fn plane_distance(point: Vec3, normal: Vec3, ray: &Ray) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom == 0.0 {
        return None;
    }

    let numer = (point - ray.origin).dot(normal);
    if numer == 0.0 {
        return None;
    }

    let t = numer / denom;
    if t <= 0.0 {
        return None;
    }

    Some(t)
}
