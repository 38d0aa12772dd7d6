//! Mirror reflection, Snell refraction and secondary ray offsets.

use glint_math::{Interval, Vec3};

/// Index of refraction on the outside of every surface.
const OUTSIDE_INDEX: f32 = 1.0;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit direction through a surface with unit `normal`.
///
/// `normal` points to the outside. A direction travelling against it enters
/// the material (indices 1 -> `refractive_index`); one travelling along it
/// leaves (indices `refractive_index` -> 1). Returns the zero vector on total
/// internal reflection.
pub fn refract(v: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    let cos_i = Interval::new(-1.0, 1.0).clamp(v.dot(normal));

    let (cos_i, normal, eta) = if cos_i < 0.0 {
        (-cos_i, normal, OUTSIDE_INDEX / refractive_index)
    } else {
        // Inside
        (cos_i, -normal, refractive_index / OUTSIDE_INDEX)
    };

    let cos_t2 = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if cos_t2 < 0.0 {
        return Vec3::ZERO;
    }

    v * eta + normal * (eta * cos_i - cos_t2.sqrt())
}

/// Start point for a secondary ray leaving `point` along `direction`.
///
/// Pushed `bias` along the normal to the side the ray travels into, so the
/// ray does not immediately hit the surface it starts on.
#[inline]
pub fn offset_origin(point: Vec3, direction: Vec3, normal: Vec3, bias: f32) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - bias * normal
    } else {
        point + bias * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng, scale: f32) -> Vec3 {
        Vec3::new(
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
            rng.gen_range(-scale..scale),
        )
    }

    #[test]
    fn test_reflect_preserves_length() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = random_vec(&mut rng, 10.0);
            let n = random_vec(&mut rng, 1.0);
            if n.length_squared() < 1e-4 {
                continue;
            }
            let n = n.normalize();

            let r = reflect(v, n);
            assert!((r.length() - v.length()).abs() < 1e-3 * v.length().max(1.0));
            assert!((r.dot(n) + v.dot(n)).abs() < 1e-3 * v.length().max(1.0));
        }
    }

    #[test]
    fn test_reflect_mirror() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_normal_incidence_is_straight() {
        let v = Vec3::new(0.0, 0.0, -1.0);

        // Entering
        let t = refract(v, Vec3::Z, 1.5);
        assert!(t.cross(v).length() < 1e-6);
        assert!(t.dot(v) > 0.0);

        // Leaving
        let t = refract(v, -Vec3::Z, 1.5);
        assert!(t.cross(v).length() < 1e-6);
        assert!(t.dot(v) > 0.0);
    }

    #[test]
    fn test_refract_bends_toward_normal_when_entering() {
        let v = Vec3::new(1.0, 0.0, -1.0).normalize();
        let t = refract(v, Vec3::Z, 1.5);

        // Snell: sin_t = sin_i / 1.5
        let sin_i = v.cross(Vec3::Z).length();
        let sin_t = t.normalize().cross(Vec3::Z).length();
        assert!((sin_t - sin_i / 1.5).abs() < 1e-5);
        assert!((t.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass (ratio 1.5) close to grazing
        let angle = 80.0_f32.to_radians();
        let v = Vec3::new(angle.sin(), 0.0, angle.cos());

        assert_eq!(refract(v, Vec3::Z, 1.5), Vec3::ZERO);

        // Below the critical angle (~41.8 degrees) the ray escapes
        let angle = 30.0_f32.to_radians();
        let v = Vec3::new(angle.sin(), 0.0, angle.cos());
        assert_ne!(refract(v, Vec3::Z, 1.5), Vec3::ZERO);
    }

    #[test]
    fn test_offset_origin_follows_direction() {
        let p = Vec3::ZERO;
        let n = Vec3::Y;

        assert_eq!(offset_origin(p, Vec3::new(1.0, 1.0, 0.0), n, 0.01), Vec3::new(0.0, 0.01, 0.0));
        assert_eq!(offset_origin(p, Vec3::new(1.0, -1.0, 0.0), n, 0.01), Vec3::new(0.0, -0.01, 0.0));
    }
}
