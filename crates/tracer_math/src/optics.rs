//! Reflection and refraction at a surface.

use crate::algebra::{dot, normalized};
use crate::scalar::{Real, Scalar};
use crate::Vector3;

/// Mirror `v` about the surface normal `n`: `v - 2*dot(v, n)*n`.
///
/// `n` must be unit length. A non-normalized `n` gives a wrongly scaled
/// result; nothing checks for it.
#[inline]
pub fn reflect<T: Scalar>(v: Vector3<T>, n: Vector3<T>) -> Vector3<T> {
    let two = T::one() + T::one();
    v - n * (two * dot(v, n))
}

/// Refract `v` through a surface with unit normal `n` (Snell's law).
///
/// `eta` is the ratio of refractive indices, incident over transmitted
/// (`ni / nt`). `v` does not need to be unit length; it is normalized first.
///
/// Returns `None` under total internal reflection, i.e. when the discriminant
/// `1 - eta² (1 - cos²θi)` is zero or negative and no real refracted ray
/// exists.
pub fn refract<T: Real>(v: Vector3<T>, n: Vector3<T>, eta: T) -> Option<Vector3<T>> {
    let unit_v = normalized(v);
    let cos_i = dot(unit_v, n);
    let discriminant = T::one() - eta * eta * (T::one() - cos_i * cos_i);

    if discriminant > T::zero() {
        Some((unit_v - n * cos_i) * eta - n * discriminant.sqrt())
    } else {
        log::trace!(
            "total internal reflection: eta={:?} cos_i={:?} discriminant={:?}",
            eta.to_f64(),
            cos_i.to_f64(),
            discriminant.to_f64()
        );
        None
    }
}

/// [`refract`] with the zero vector standing in for total internal
/// reflection. A refracted direction that is genuinely zero cannot be told
/// apart from "no refraction"; prefer [`refract`] in new code.
#[inline]
pub fn refract_or_zero<T: Real>(v: Vector3<T>, n: Vector3<T>, eta: T) -> Vector3<T> {
    refract(v, n, eta).unwrap_or_else(Vector3::zero)
}

impl<T: Scalar> Vector3<T> {
    /// See [`reflect`].
    #[inline]
    pub fn reflect(self, n: Self) -> Self {
        reflect(self, n)
    }
}

impl<T: Real> Vector3<T> {
    /// See [`refract`].
    #[inline]
    pub fn refract(self, n: Self, eta: T) -> Option<Self> {
        refract(self, n, eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::length;
    use crate::Vec3f;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_reflect_head_on() {
        let v = Vec3f::new(0.0, -1.0, 0.0);
        let n = Vec3f::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(v, n), Vec3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_angled() {
        let v = Vec3f::new(1.0, -1.0, 0.0);
        let n = Vec3f::Y;
        assert_eq!(v.reflect(n), Vec3f::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_parallel_to_surface_is_unchanged() {
        let v = Vec3f::new(3.0, 0.0, -2.0);
        assert_eq!(reflect(v, Vec3f::Y), v);
    }

    #[test]
    fn test_reflect_does_not_normalize_the_normal() {
        // Twice-length normal: 2*dot(v,n)*n is four times too large
        let v = Vec3f::new(0.0, -1.0, 0.0);
        let n = Vec3f::new(0.0, 2.0, 0.0);
        assert_eq!(reflect(v, n), Vec3f::new(0.0, 7.0, 0.0));
    }

    #[test]
    fn test_reflect_integer_vectors() {
        let v = Vector3::new(1_i32, -1, 0);
        let n = Vector3::new(0_i32, 1, 0);
        assert_eq!(reflect(v, n), Vector3::new(1, 1, 0));
        assert_eq!(Vector3::new(0_i64, 0, -3).reflect(Vector3::new(0, 0, 1)), Vector3::new(0, 0, 3));
    }

    #[test]
    fn test_refract_equal_indices_head_on() {
        let v = Vec3f::new(0.0, -1.0, 0.0);
        let n = Vec3f::new(0.0, 1.0, 0.0);
        assert_eq!(refract(v, n, 1.0), Some(Vec3f::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_refract_normalizes_incident_vector() {
        let n = Vec3f::Y;
        let short = refract(Vec3f::new(1.0, -1.0, 0.0), n, 0.75);
        let long = refract(Vec3f::new(40.0, -40.0, 0.0), n, 0.75);
        let (short, long) = (short.unwrap(), long.unwrap());
        assert!((short - long).abs().max_element() < EPS);
    }

    #[test]
    fn test_refract_into_denser_medium_obeys_snell() {
        // 45 degrees from air into glass
        let eta = 1.0 / 1.5;
        let v = Vec3f::new(1.0, -1.0, 0.0);
        let r = v.refract(Vec3f::Y, eta).unwrap();

        let sin_i = std::f32::consts::FRAC_1_SQRT_2;
        assert!((r.x - sin_i * eta).abs() < EPS);
        assert!(r.y < 0.0);
        assert!(r.z.abs() < EPS);
        assert!((length(r) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Grazing ray leaving glass
        let v = Vec3f::new(1.0, -0.01, 0.0);
        let n = Vec3f::new(0.0, 1.0, 0.0);
        assert_eq!(refract(v, n, 1.5), None);
        assert_eq!(refract_or_zero(v, n, 1.5), Vec3f::ZERO);
    }

    #[test]
    fn test_refract_zero_discriminant_is_total_internal_reflection() {
        // Perpendicular to the normal with eta = 1: discriminant is exactly 0
        let v = Vec3f::new(1.0, 0.0, 0.0);
        assert_eq!(refract(v, Vec3f::Y, 1.0), None);
    }

    #[test]
    fn test_refract_or_zero_passes_through_refraction() {
        let v = Vec3f::new(0.0, -1.0, 0.0);
        assert_eq!(refract_or_zero(v, Vec3f::Y, 1.0), Vec3f::new(0.0, -1.0, 0.0));
    }
}
