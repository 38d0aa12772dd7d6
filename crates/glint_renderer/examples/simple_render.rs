//! Simple Whitted ray tracer example.
//!
//! Renders a small scene with a glass sphere, a mirror sphere and a
//! checkered floor and saves it in PPM format.

use glint_renderer::{
    render, Camera, Color, ImageBuffer, Light, Material, Plane, RenderConfig, Scene, Sphere, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    let camera = Camera::new().with_resolution(400, 256).with_fov(70.0);
    let config = RenderConfig {
        supersample: true,
        ..RenderConfig::default()
    };

    println!("Rendering {}x{}...", camera.image_width, camera.image_height);

    let start = std::time::Instant::now();
    let mut image = render(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    image.tone_map();

    let filename = "output.ppm";
    save_ppm(&image, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let glass = Material::new(1.5, Color::new(0.6, 0.7, 0.8), 100.0, 0.05, 0.4, 0.2, 0.8);
    let mirror = Material::new(1.5, Color::ONE, 500.0, 0.0, 2.0, 0.9, 0.0);
    let plastic = Material::new(1.5, Color::new(0.1, 0.3, 0.7), 125.0, 0.8, 0.2, 0.01, 0.0);
    let floor = Material::new(1.5, Color::splat(0.7), 125.0, 0.9, 0.2, 0.8, 0.0)
        .with_checker_color(Color::splat(0.05));

    let mut scene = Scene::new();
    scene.add(Sphere::new(Vec3::new(-5.0, -1.0, -12.0), 3.0, glass));
    scene.add(Sphere::new(Vec3::new(0.0, -2.5, -8.0), 1.5, plastic));
    scene.add(Sphere::new(Vec3::new(5.0, -1.0, -12.0), 3.0, mirror));
    scene.add(Plane::new(Vec3::new(0.0, -4.0, 0.0), Vec3::Y, floor));

    scene.add_light(Light::new(Vec3::new(-2.0, 2.0, 5.0), 2.5));
    scene.add_light(Light::new(Vec3::new(3.0, 10.0, -5.0), 3.5));

    println!("Created {} objects", scene.len());
    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb8().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}
