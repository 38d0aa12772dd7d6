//! Scene container and the nearest-hit query.

use crate::{Geometry, Light, Material, Mesh, Ray, Triangle};
use glint_math::{Interval, Vec3};

/// Record of the closest ray-object intersection.
#[derive(Clone, Copy, Debug)]
pub struct SceneHit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// The object that was hit
    pub object: &'a Geometry,
}

/// All geometry and lights of one render.
///
/// The scene owns its objects; it is read-only while rendering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<Geometry>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Into<Geometry>) {
        self.objects.push(object.into());
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add one triangle per mesh face, all sharing `material`.
    ///
    /// Returns the number of triangles added.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Material) -> usize {
        let before = self.objects.len();

        self.objects.extend(
            mesh.triangles()
                .map(|[v0, v1, v2]| Geometry::Triangle(Triangle::new(v0, v1, v2, material))),
        );

        self.objects.len() - before
    }

    pub fn objects(&self) -> &[Geometry] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest object hit by `ray` with `t` strictly inside `ray_t`.
    ///
    /// A linear scan over every object.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SceneHit<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            let Some(t) = object.intersect(ray) else {
                continue;
            };

            if Interval::new(ray_t.min, closest_so_far).surrounds(t) {
                closest_so_far = t;
                closest = Some((t, object));
            }
        }

        closest.map(|(t, object)| SceneHit {
            t,
            point: ray.at(t),
            object,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Sphere};

    const UNBOUNDED: Interval = Interval::new(0.0, 1e10);

    fn colored(color: Color) -> Material {
        Material {
            diffuse_color: color,
            ..Material::default()
        }
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -20.0), 1.0, colored(Color::X)));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, colored(Color::Y)));
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, colored(Color::Z)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&ray, UNBOUNDED).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-6);
        assert_eq!(hit.object.color(hit.point), Color::Y);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.is_empty());
        assert!(scene.intersect(&ray, UNBOUNDED).is_none());
    }

    #[test]
    fn test_zero_distance_is_not_a_hit() {
        let mut scene = Scene::new();
        // Ray starts on the sphere surface and points away from it
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, 1.0), 1.0, Material::default()));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&ray, UNBOUNDED).is_none());
    }

    #[test]
    fn test_hits_beyond_interval_ignored() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&ray, Interval::new(0.0, 3.0)).is_none());
    }

    #[test]
    fn test_add_mesh() {
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)],
            vec![0, 1, 2, 1, 3, 2],
        );

        let mut scene = Scene::new();
        assert_eq!(scene.add_mesh(&mesh, Material::default()), 2);
        assert_eq!(scene.len(), 2);
        assert!(scene.objects().iter().all(|o| matches!(o, Geometry::Triangle(_))));
    }
}
