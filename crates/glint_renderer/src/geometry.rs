//! Scene geometry as a closed set of primitive variants.

use crate::{Circle, Color, Material, Plane, Ray, Sphere, Triangle};
use glint_math::Vec3;

/// Any primitive the renderer can intersect.
#[derive(Clone, Debug)]
pub enum Geometry {
    Sphere(Sphere),
    Plane(Plane),
    Circle(Circle),
    Triangle(Triangle),
}

impl Geometry {
    /// Distance along `ray` to the nearest forward hit, in units of the
    /// ray's direction length.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Geometry::Sphere(s) => s.intersect(ray),
            Geometry::Plane(p) => p.intersect(ray),
            Geometry::Circle(c) => c.intersect(ray),
            Geometry::Triangle(t) => t.intersect(ray),
        }
    }

    /// Geometric unit normal, independent of the viewing direction.
    pub fn outward_normal(&self, point: Vec3) -> Vec3 {
        match self {
            Geometry::Sphere(s) => s.outward_normal(point),
            Geometry::Plane(p) => p.outward_normal(point),
            Geometry::Circle(c) => c.outward_normal(point),
            Geometry::Triangle(t) => t.outward_normal(point),
        }
    }

    /// Unit normal at `point` facing against `direction`.
    pub fn normal(&self, point: Vec3, direction: Vec3) -> Vec3 {
        let outward = self.outward_normal(point);

        // Normal always points against the ray
        if outward.dot(direction) > 0.0 {
            -outward
        } else {
            outward
        }
    }

    /// Base surface color at `point`.
    pub fn color(&self, point: Vec3) -> Color {
        match self {
            Geometry::Sphere(s) => s.color(point),
            Geometry::Plane(p) => p.color(point),
            Geometry::Circle(c) => c.color(point),
            Geometry::Triangle(t) => t.color(point),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Geometry::Sphere(s) => s.material(),
            Geometry::Plane(p) => p.material(),
            Geometry::Circle(c) => c.material(),
            Geometry::Triangle(t) => t.material(),
        }
    }
}

impl From<Sphere> for Geometry {
    fn from(sphere: Sphere) -> Self {
        Geometry::Sphere(sphere)
    }
}

impl From<Plane> for Geometry {
    fn from(plane: Plane) -> Self {
        Geometry::Plane(plane)
    }
}

impl From<Circle> for Geometry {
    fn from(circle: Circle) -> Self {
        Geometry::Circle(circle)
    }
}

impl From<Triangle> for Geometry {
    fn from(triangle: Triangle) -> Self {
        Geometry::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> Vec<Geometry> {
        let m = Material::default();
        vec![
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, m).into(),
            Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, m).into(),
            Circle::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 2.0, m).into(),
            Triangle::new(
                Vec3::new(-1.0, -1.0, -5.0),
                Vec3::new(1.0, -1.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
                m,
            )
            .into(),
        ]
    }

    #[test]
    fn test_normal_faces_incoming_ray() {
        for shape in shapes() {
            for direction in [Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0)] {
                let n = shape.normal(Vec3::new(0.0, 0.0, -4.0), direction);
                assert!(n.dot(direction) <= 0.0, "{:?} normal faces the ray", shape);
                assert!((n.length() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_dispatch_intersect() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hits: Vec<_> = shapes().iter().map(|s| s.intersect(&ray)).collect();

        assert_eq!(hits, vec![Some(4.0), Some(5.0), Some(5.0), Some(5.0)]);
    }
}
