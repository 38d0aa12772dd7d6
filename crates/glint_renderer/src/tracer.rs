//! Recursive Whitted ray casting.
//!
//! Each hit combines Phong direct lighting (diffuse and specular, hard
//! shadows, no ambient term) with a mirror reflection ray and a refraction
//! ray, both traced one level deeper.

use crate::optics::{offset_origin, reflect, refract};
use crate::{Color, Material, RenderConfig, Scene};
use glint_math::{Ray, Vec3};

/// Compute the color seen along `ray`.
///
/// `depth` counts the bounces taken so far; primary rays start at 0. Once
/// `depth` exceeds `config.max_depth` the background color is returned
/// without touching the scene, so every call chain ends after at most
/// `max_depth + 1` surface hits.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let ray = ray.normalized();
    let dir = ray.direction;

    let Some(hit) = scene.intersect(&ray, config.ray_interval()) else {
        return miss_color(dir, config);
    };

    let object = hit.object;
    let material = object.material();
    let normal = object.normal(hit.point, dir);

    let reflect_color = if material.is_reflective() {
        let reflect_dir = reflect(dir, normal).normalize();
        let reflect_orig = offset_origin(hit.point, reflect_dir, normal, config.bias);
        cast_ray(&Ray::new(reflect_orig, reflect_dir), scene, depth + 1, config)
    } else {
        Color::ZERO
    };

    let refract_color = if material.is_refractive() {
        // Entering or leaving is decided against the geometric normal
        let refract_dir = refract(dir, object.outward_normal(hit.point), material.refractive_index);

        if refract_dir == Vec3::ZERO {
            // Total internal reflection
            Color::ZERO
        } else {
            let refract_dir = refract_dir.normalize();
            let refract_orig = offset_origin(hit.point, refract_dir, normal, config.bias);
            cast_ray(&Ray::new(refract_orig, refract_dir), scene, depth + 1, config)
        }
    } else {
        Color::ZERO
    };

    let (diffuse, specular) = direct_light(scene, hit.point, normal, dir, material, config);

    object.color(hit.point) * (diffuse * material.k_diffuse)
        + Color::ONE * (specular * material.k_specular)
        + material.k_reflection * reflect_color
        + material.k_refraction * refract_color
}

/// Background seen by a ray that leaves the scene.
fn miss_color(dir: Vec3, config: &RenderConfig) -> Color {
    match &config.environment {
        Some(env) => env.sample(dir),
        None => config.background,
    }
}

/// Sum the unshadowed diffuse and specular intensity of every light.
fn direct_light(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    dir: Vec3,
    material: &Material,
    config: &RenderConfig,
) -> (f32, f32) {
    let mut diffuse = 0.0;
    let mut specular = 0.0;

    for light in scene.lights() {
        let to_light = light.position - point;
        let light_distance2 = to_light.length_squared();
        let light_dir = to_light.normalize();

        let shadow_orig = offset_origin(point, light_dir, normal, config.bias);
        if let Some(blocker) = scene.intersect(&Ray::new(shadow_orig, light_dir), config.ray_interval()) {
            if (blocker.point - shadow_orig).length_squared() < light_distance2 {
                continue;
            }
        }

        diffuse += light.intensity * light_dir.dot(normal).max(0.0);

        let light_reflect = reflect(-light_dir, normal);
        specular += light.intensity * (-light_reflect.dot(dir)).max(0.0).powf(material.specular_exponent);
    }

    (diffuse, specular)
}
