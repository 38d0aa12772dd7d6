//! Shading data for Glint scenes.
//!
//! Materials and lights are plain values: they are built once per scene and
//! only read while rendering.

use glint_math::Vec3;

/// Color type alias (linear RGB, unbounded above).
pub type Color = Vec3;

/// A Phong-style surface description with reflection and refraction weights.
///
/// The four weights are independent. Nothing forces them to sum to one, so
/// a material may reflect more light than it receives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Index of refraction of the material interior (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,

    /// Base diffuse color (RGB, 0-1)
    pub diffuse_color: Color,

    /// Phong specular exponent
    pub specular_exponent: f32,

    /// Weight of the diffuse term
    pub k_diffuse: f32,

    /// Weight of the specular highlight
    pub k_specular: f32,

    /// Weight of the mirror reflection
    pub k_reflection: f32,

    /// Weight of the transmitted (refracted) ray
    pub k_refraction: f32,

    /// Alternate diffuse color for checkerboard planes
    pub diffuse_color2: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            diffuse_color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_exponent: 1.0,
            k_diffuse: 1.0,
            k_specular: 0.0,
            k_reflection: 0.0,
            k_refraction: 0.0,
            diffuse_color2: Color::ZERO,
        }
    }
}

impl Material {
    /// Create a new material.
    ///
    /// Arguments follow the usual order: refractive index, diffuse color,
    /// specular exponent, then the diffuse, specular, reflection and
    /// refraction weights.
    pub fn new(
        refractive_index: f32,
        diffuse_color: Color,
        specular_exponent: f32,
        k_diffuse: f32,
        k_specular: f32,
        k_reflection: f32,
        k_refraction: f32,
    ) -> Self {
        Self {
            refractive_index,
            diffuse_color,
            specular_exponent,
            k_diffuse,
            k_specular,
            k_reflection,
            k_refraction,
            diffuse_color2: Color::ZERO,
        }
    }

    /// Set the second checkerboard color.
    pub fn with_checker_color(mut self, color: Color) -> Self {
        self.diffuse_color2 = color;
        self
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.k_reflection != 0.0
    }

    /// Check if this material spawns refraction rays.
    pub fn is_refractive(&self) -> bool {
        self.k_refraction != 0.0
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// World-space position
    pub position: Vec3,

    /// Scalar intensity (positive)
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_new() {
        let glass = Material::new(1.5, Color::new(0.6, 0.7, 0.8), 100.0, 0.05, 0.4, 0.2, 0.8);

        assert_eq!(glass.refractive_index, 1.5);
        assert_eq!(glass.specular_exponent, 100.0);
        assert!(glass.is_reflective());
        assert!(glass.is_refractive());
        assert_eq!(glass.diffuse_color2, Color::ZERO);
    }

    #[test]
    fn test_material_weights_may_exceed_one() {
        let mirror = Material::new(1.5, Color::ONE, 500.0, 0.0, 2.0, 0.9, 0.0);
        let total = mirror.k_diffuse + mirror.k_specular + mirror.k_reflection + mirror.k_refraction;

        assert!(total > 1.0);
        assert!(!mirror.is_refractive());
    }

    #[test]
    fn test_checker_color() {
        let floor = Material::default().with_checker_color(Color::splat(0.05));
        assert_eq!(floor.diffuse_color2, Color::splat(0.05));
        assert_eq!(floor.diffuse_color, Color::new(0.5, 0.5, 0.5));
    }
}
