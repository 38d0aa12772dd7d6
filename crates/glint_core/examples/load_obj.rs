//! Example: Load and inspect an OBJ file.
//!
//! Run with: cargo run --example load_obj -- heliosbust.obj

use std::env;

use glint_core::mesh::load_obj;
use glint_math::Vec3;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_obj <path-to-obj-file>");
        println!("\nExample:");
        println!("  cargo run --example load_obj -- heliosbust.obj");
        return;
    }

    let path = &args[1];
    println!("Loading OBJ file: {}", path);

    match load_obj(path, Vec3::ZERO) {
        Ok(mesh) => {
            println!("Vertices: {}", mesh.vertex_count());
            println!("Triangles: {}", mesh.triangle_count());

            let (min, max) = mesh
                .positions
                .iter()
                .fold((Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)), |(lo, hi), p| {
                    (lo.min(*p), hi.max(*p))
                });
            println!("Bounds: {:?} .. {:?}", min, max);
        }
        Err(e) => {
            eprintln!("Failed to load: {}", e);
            std::process::exit(1);
        }
    }
}
