//! Glint Core - Scene data shared by the renderer and the command line tool.
//!
//! This crate provides:
//!
//! - **Shading data**: `Material`, `Light`
//! - **Mesh loading**: a Wavefront OBJ subset parser producing a `Mesh`
//! - **Environment maps**: image-backed backgrounds looked up by ray direction
//!
//! # Example
//!
//! ```ignore
//! use glint_core::mesh::load_obj;
//! use glint_math::Vec3;
//!
//! let mesh = load_obj("heliosbust.obj", Vec3::new(0.0, -3.0, -26.0))?;
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod environment;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use environment::{load_environment, EnvironmentError, EnvironmentMap};
pub use mesh::{load_obj, parse_obj, Mesh, MeshError};
pub use scene::{Color, Light, Material};
