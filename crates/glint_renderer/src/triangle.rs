//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{Color, Material, Ray};
use glint_math::Vec3;

/// A triangle primitive.
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, right-handed in vertex order)
    normal: Vec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge1.cross(edge2).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Only an exactly zero determinant is rejected. `u`, `v` and the
    /// distance are all divided by the signed determinant, so both vertex
    /// windings are hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let p = ray.direction.cross(edge2);
        let det = p.dot(edge1);

        // Ray is parallel to triangle
        if det == 0.0 {
            return None;
        }

        let s = ray.origin - self.v0;
        let u = p.dot(s) / det;
        if u < 0.0 {
            return None;
        }

        let q = s.cross(edge1);
        let v = q.dot(ray.direction) / det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = q.dot(edge2) / det;
        if t < 0.0 {
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
