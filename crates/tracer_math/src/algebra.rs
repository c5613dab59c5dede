//! Norms, products and normalization.
//!
//! Free functions are the primary API; the methods on [`Vector3`] forward to
//! them so call sites can use whichever reads better.

use std::ops::Neg;

use crate::error::{VectorError, VectorResult};
use crate::scalar::{Real, Scalar};
use crate::Vector3;

/// Scalar inner product: `a.x*b.x + a.y*b.y + a.z*b.z`.
#[inline]
pub fn dot<T: Scalar>(a: Vector3<T>, b: Vector3<T>) -> T {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product.
#[inline]
pub fn cross<T>(a: Vector3<T>, b: Vector3<T>) -> Vector3<T>
where
    T: Scalar + Neg<Output = T>,
{
    Vector3::new(
        a.y * b.z - a.z * b.y,
        -(a.x * b.z - a.z * b.x),
        a.x * b.y - a.y * b.x,
    )
}

/// Squared Euclidean norm.
///
/// Prefer this over [`length`] when only relative magnitude matters: it skips
/// the square root.
#[inline]
pub fn length2<T: Scalar>(v: Vector3<T>) -> T {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Euclidean norm, `sqrt(x² + y² + z²)`.
#[inline]
pub fn length<T: Real>(v: Vector3<T>) -> T {
    length2(v).sqrt()
}

/// Scale `v` to unit length in place.
///
/// Computes the reciprocal length once and multiplies. A zero-length `v`
/// ends up with non-finite components (`inf * 0` gives NaN).
#[inline]
pub fn normalize<T: Real>(v: &mut Vector3<T>) {
    let inv_len = T::one() / length(*v);
    *v *= inv_len;
}

/// Unit-length copy of `v`.
///
/// Divides each component by the length, so a zero-length `v` yields NaN
/// components (`0 / 0`). This is a different code path from [`normalize`].
#[inline]
pub fn normalized<T: Real>(v: Vector3<T>) -> Vector3<T> {
    v / length(v)
}

/// Checked [`normalized`]: rejects zero and non-finite lengths.
pub fn try_normalized<T: Real>(v: Vector3<T>) -> VectorResult<Vector3<T>> {
    let len = length(v);
    if len.is_zero() {
        log::trace!("refusing to normalize a zero-length vector");
        return Err(VectorError::ZeroLength);
    }
    if !len.is_finite() {
        log::trace!("refusing to normalize a vector with length {:?}", len.to_f64());
        return Err(VectorError::NonFinite);
    }
    Ok(v / len)
}

#[inline]
pub fn distance2<T: Scalar>(a: Vector3<T>, b: Vector3<T>) -> T {
    let d = Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z);
    length2(d)
}

#[inline]
pub fn distance<T: Real>(a: Vector3<T>, b: Vector3<T>) -> T {
    distance2(a, b).sqrt()
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp<T: Real>(a: Vector3<T>, b: Vector3<T>, t: T) -> Vector3<T> {
    a + (b - a) * t
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        dot(self, rhs)
    }

    #[inline]
    pub fn length2(self) -> T {
        length2(self)
    }

    #[inline]
    pub fn distance2(self, rhs: Self) -> T {
        distance2(self, rhs)
    }
}

impl<T: Scalar + Neg<Output = T>> Vector3<T> {
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        cross(self, rhs)
    }
}

impl<T: Real> Vector3<T> {
    #[inline]
    pub fn length(self) -> T {
        length(self)
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        distance(self, rhs)
    }

    /// In-place normalization, see [`normalize`].
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        normalize(self);
        self
    }

    /// See [`normalized`].
    #[inline]
    pub fn normalized(self) -> Self {
        normalized(self)
    }

    #[inline]
    pub fn try_normalized(self) -> VectorResult<Self> {
        try_normalized(self)
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        lerp(self, rhs, t)
    }
}
