//! Built-in scenes selectable with `-scene`.

use anyhow::{Context, Result};
use glint_core::{load_environment, load_obj};
use glint_renderer::{Circle, Color, EnvironmentMap, Light, Material, Plane, Scene, Sphere, Vec3};
use std::path::Path;
use std::sync::Arc;

/// A scene together with the render settings it was set up for.
pub struct ScenePreset {
    pub scene: Scene,
    pub background: Color,
    pub environment: Option<Arc<EnvironmentMap>>,
    /// Apply `v / (v + 1)` before quantizing
    pub tone_map: bool,
}

/// Where the bust scene finds its assets.
pub struct BustAssets<'a> {
    pub envmap: &'a Path,
    pub mesh: &'a Path,
}

/// World-space placement of the bust mesh.
const BUST_OFFSET: Vec3 = Vec3::new(0.0, -3.0, -26.0);

mod materials {
    use glint_renderer::{Color, Material};

    pub fn glass() -> Material {
        Material::new(1.5, Color::new(0.6, 0.7, 0.8), 100.0, 0.05, 0.4, 0.2, 0.8)
    }

    pub fn mirror() -> Material {
        Material::new(1.5, Color::ONE, 500.0, 0.0, 2.0, 0.9, 0.0)
    }

    pub fn plastic() -> Material {
        Material::new(1.5, Color::new(0.7, 0.0, 0.0), 125.0, 0.8, 0.2, 0.01, 0.0)
    }

    /// Checkered floor
    pub fn reflective() -> Material {
        Material::new(1.5, Color::splat(0.7), 125.0, 0.9, 0.2, 0.8, 0.0).with_checker_color(Color::splat(0.05))
    }

    // Never refractive: mesh triangles carry no true vertex normals.
    pub fn marble() -> Material {
        Material::new(1.5, Color::new(0.5, 0.6, 0.6), 10.0, 0.9, 0.2, 0.0, 0.0)
    }
}

/// Scene 1: glass, plastic and mirror spheres over a reflective checkered
/// floor. Tone mapped.
pub fn spheres() -> ScenePreset {
    let mut scene = Scene::new();

    scene.add(Sphere::new(Vec3::new(-9.0, -0.5, -10.0), 3.0, materials::glass()));
    scene.add(Sphere::new(Vec3::new(0.0, -0.5, -10.0), 3.0, materials::plastic()));
    scene.add(Sphere::new(Vec3::new(0.0, -3.0, -5.0), 1.0, materials::plastic()));
    scene.add(Sphere::new(Vec3::new(9.0, -0.5, -10.0), 3.0, materials::mirror()));
    scene.add(Plane::new(Vec3::new(0.0, -4.0, 0.0), Vec3::Y, materials::reflective()));

    scene.add_light(Light::new(Vec3::new(-2.0, 2.0, 5.0), 2.5));
    scene.add_light(Light::new(Vec3::new(3.0, 10.0, -5.0), 3.5));
    scene.add_light(Light::new(Vec3::new(10.0, 50.0, -28.0), 2.5));
    scene.add_light(Light::new(Vec3::new(-8.0, -0.5, -10.0), 2.5));

    ScenePreset {
        scene,
        background: Color::splat(0.1),
        environment: None,
        tone_map: true,
    }
}

/// Scene 2: an OBJ bust between a glass and a marble sphere, standing on a
/// disk, lit against an environment map. Not tone mapped.
pub fn bust(assets: &BustAssets) -> Result<ScenePreset> {
    let environment = load_environment(assets.envmap)
        .with_context(|| format!("failed to load environment map {}", assets.envmap.display()))?;

    let mesh = load_obj(assets.mesh, BUST_OFFSET)
        .with_context(|| format!("failed to load mesh {}", assets.mesh.display()))?;

    let mut scene = Scene::new();
    scene.add_mesh(&mesh, materials::marble());

    scene.add(Sphere::new(Vec3::new(6.0, -0.5, -10.0), 3.0, materials::glass()));
    scene.add(Sphere::new(Vec3::new(-6.0, -0.5, -10.0), 3.0, materials::marble()));
    log::info!("Objects: {}", scene.len());

    scene.add_light(Light::new(Vec3::new(0.0, 2.0, 1.0), 0.5));
    scene.add_light(Light::new(Vec3::new(-2.0, 2.0, 5.0), 0.5));
    scene.add_light(Light::new(Vec3::new(3.0, 10.0, -5.0), 0.5));
    scene.add_light(Light::new(Vec3::new(10.0, 50.0, -28.0), 0.5));

    scene.add(Circle::new(Vec3::new(0.0, -4.0, -10.0), Vec3::Y, 12.0, materials::marble()));

    Ok(ScenePreset {
        scene,
        background: Color::new(0.0, 1.0, 1.0),
        environment: Some(Arc::new(environment)),
        tone_map: false,
    })
}
