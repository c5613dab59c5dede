//! Tracer math - the 3-component vector under the ray tracer.
//!
//! [`Vector3`] is a plain `Copy` aggregate generic over its scalar type. On top
//! of it this crate provides:
//!
//! - **Arithmetic**: `+ - * /` against vectors and scalars, all derived from the
//!   compound-assignment operators
//! - **Algebra**: [`dot`], [`cross`], [`length`], [`length2`], [`normalize`],
//!   [`normalized`]
//! - **Optics**: [`reflect`] and [`refract`] for light transport at a surface
//!
//! # Example
//!
//! ```
//! use tracer_math::{reflect, refract, Vec3f};
//!
//! let down = Vec3f::new(0.0, -1.0, 0.0);
//! let normal = Vec3f::Y;
//!
//! assert_eq!(reflect(down, normal), Vec3f::Y);
//! assert_eq!(refract(down, normal, 1.0), Some(down));
//! ```

pub mod algebra;
pub mod error;
pub mod optics;
pub mod scalar;
pub mod tolerance;
mod interop;
mod vector;

pub use algebra::{
    cross, distance, distance2, dot, length, length2, lerp, normalize, normalized, try_normalized,
};
pub use error::{VectorError, VectorResult};
pub use optics::{reflect, refract, refract_or_zero};
pub use scalar::{Real, Scalar};
pub use tolerance::{approx_eq, DEFAULT_EPSILON};
pub use vector::Vector3;

/// Single-precision vector, the renderer's default.
pub type Vec3f = Vector3<f32>;

/// Double-precision vector.
pub type Vec3d = Vector3<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_precision_aliases() {
        fn takes_generic(v: Vector3<f32>) -> f32 {
            v.x
        }
        assert_eq!(takes_generic(Vec3f::X), 1.0);

        // A nudge below f32 resolution survives in Vec3d only
        let nudge = 1e-12;
        assert_eq!(Vec3f::X + Vec3f::new(nudge as f32, 0.0, 0.0), Vec3f::X);
        assert_ne!(Vec3d::X + Vec3d::new(nudge, 0.0, 0.0), Vec3d::X);
    }

    #[test]
    fn test_root_reexports_agree_with_methods() {
        let a = Vec3d::new(2.0, -1.0, 0.5);
        let b = Vec3d::new(0.0, 3.0, 4.0);
        assert_eq!(dot(a, b), a.dot(b));
        assert_eq!(cross(a, b), a.cross(b));
        assert_eq!(length2(b), 25.0);
        assert_eq!(normalized(b), Vec3d::new(0.0, 0.6, 0.8));
        assert!(approx_eq(lerp(a, b, 0.5), Vec3d::new(1.0, 1.0, 2.25), DEFAULT_EPSILON));
        assert_eq!(try_normalized(Vec3d::ZERO), Err(VectorError::ZeroLength));
    }

    #[test]
    fn test_glass_sphere_bounce() {
        init_logger();

        // Ray entering glass at 30 degrees, then hitting the far side from inside
        let normal = Vec3f::Y;
        let incoming = Vec3f::new(0.5, -(0.75_f32).sqrt(), 0.0);

        let inside = refract(incoming, normal, 1.0 / 1.5).unwrap();
        assert!(inside.y < 0.0);
        assert!(inside.x < incoming.x);

        let bounced = reflect(inside, normal);
        assert!((length(bounced) - 1.0).abs() < 1e-5);

        // A steep exit from glass to air is totally internally reflected
        let steep = Vec3f::new(0.9, -0.1, 0.0);
        assert!(refract(steep, normal, 1.5).is_none());
        assert_eq!(refract_or_zero(steep, normal, 1.5), Vec3f::ZERO);
    }

    #[test]
    fn test_concurrent_use() {
        use rayon::prelude::*;

        let normals: Vec<Vec3f> = (0..1000)
            .map(|i| {
                let t = i as f32 * 0.01;
                normalized(Vec3f::new(t.cos(), 1.0, t.sin()))
            })
            .collect();

        let reflected: Vec<Vec3f> = normals
            .par_iter()
            .map(|&n| reflect(Vec3f::new(0.0, -1.0, 0.0), n))
            .collect();

        for (n, r) in normals.iter().zip(&reflected) {
            assert_eq!(*r, reflect(Vec3f::new(0.0, -1.0, 0.0), *n));
            assert!((length(*r) - 1.0).abs() < 1e-4);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let v = Vec3f::new(1.0, -2.5, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.5,"z":0.0}"#);

        let back: Vec3f = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
