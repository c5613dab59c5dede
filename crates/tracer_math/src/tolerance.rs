//! Approximate comparison.
//!
//! `==` on [`Vector3`] stays exact. These helpers are the opt-in alternative
//! for floating-point results that went through rounding.

use num_traits::Float;

use crate::Vector3;

/// Tolerance used by [`Vector3::approx_eq_default`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// True if every component of `a` and `b` differs by at most `epsilon`.
///
/// NaN components never compare equal.
#[inline]
pub fn approx_eq<T: Float>(a: Vector3<T>, b: Vector3<T>, epsilon: T) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon && (a.z - b.z).abs() <= epsilon
}

impl<T: Float> Vector3<T> {
    /// See [`approx_eq`].
    #[inline]
    pub fn abs_diff_eq(self, other: Self, epsilon: T) -> bool {
        approx_eq(self, other, epsilon)
    }

    /// [`abs_diff_eq`](Self::abs_diff_eq) with [`DEFAULT_EPSILON`].
    #[inline]
    pub fn approx_eq_default(self, other: Self) -> bool {
        let epsilon = T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon);
        approx_eq(self, other, epsilon)
    }
}
