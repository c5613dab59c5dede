//! The `Vector3` value type and its operators.
//!
//! Every elementwise rule is written exactly once, in a compound-assignment
//! impl (`+=`, `-=`, `*=`, `/=`). The binary operators take the left operand
//! by value, apply the compound operator to it and return it.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{Float, One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-component vector over a single scalar type.
///
/// Equality is exact component-wise comparison. Use
/// [`Vector3::abs_diff_eq`] when a tolerance is wanted.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    /// Create a new vector from three components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Apply `f` to each component.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector3<U> {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Copy> Vector3<T> {
    /// A vector with all three components set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }
}

impl<T: Zero> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T: Zero + One> Vector3<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }
}

impl<T: Float> Vector3<T> {
    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::new(self.x.min(rhs.x), self.y.min(rhs.y), self.z.min(rhs.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::new(self.x.max(rhs.x), self.y.max(rhs.y), self.z.max(rhs.z))
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    #[inline]
    pub fn min_element(self) -> T {
        self.x.min(self.y).min(self.z)
    }

    #[inline]
    pub fn max_element(self) -> T {
        self.x.max(self.y).max(self.z)
    }

    /// True if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

macro_rules! impl_float_consts {
    ($($t:ty),*) => {$(
        impl Vector3<$t> {
            pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
            pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
            pub const X: Self = Self::new(1.0, 0.0, 0.0);
            pub const Y: Self = Self::new(0.0, 1.0, 0.0);
            pub const Z: Self = Self::new(0.0, 0.0, 1.0);
        }
    )*};
}

impl_float_consts!(f32, f64);

// Compound assignment: the only place the elementwise rules live.

impl<T: AddAssign> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: SubAssign> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: MulAssign> MulAssign for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
        self.z *= rhs.z;
    }
}

impl<T: DivAssign> DivAssign for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
        self.z /= rhs.z;
    }
}

impl<T: AddAssign + Copy> AddAssign<T> for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.x += rhs;
        self.y += rhs;
        self.z += rhs;
    }
}

impl<T: SubAssign + Copy> SubAssign<T> for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.x -= rhs;
        self.y -= rhs;
        self.z -= rhs;
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

/// Division by a zero scalar follows `T`: infinities or NaN for floats, a
/// panic for integers.
impl<T: DivAssign + Copy> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

// Chaining forms of the compound operators. Each returns the receiver.

impl<T: AddAssign + Copy> Vector3<T> {
    /// `self += rhs`, returning `self` for chaining.
    #[inline]
    pub fn offset(&mut self, rhs: Self) -> &mut Self {
        *self += rhs;
        self
    }

    /// `self += s` on every component.
    #[inline]
    pub fn shift(&mut self, s: T) -> &mut Self {
        *self += s;
        self
    }
}

impl<T: SubAssign + Copy> Vector3<T> {
    /// `self -= rhs`, returning `self` for chaining.
    #[inline]
    pub fn retreat(&mut self, rhs: Self) -> &mut Self {
        *self -= rhs;
        self
    }
}

impl<T: MulAssign + Copy> Vector3<T> {
    #[inline]
    pub fn mul_elem(&mut self, rhs: Self) -> &mut Self {
        *self *= rhs;
        self
    }

    #[inline]
    pub fn scale(&mut self, s: T) -> &mut Self {
        *self *= s;
        self
    }
}

impl<T: DivAssign + Copy> Vector3<T> {
    #[inline]
    pub fn div_elem(&mut self, rhs: Self) -> &mut Self {
        *self /= rhs;
        self
    }

    #[inline]
    pub fn shrink(&mut self, s: T) -> &mut Self {
        *self /= s;
        self
    }
}

// Binary operators, derived from the compound ones.

impl<T: AddAssign> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: SubAssign> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: MulAssign> Mul for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<T: DivAssign> Div for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl<T: AddAssign + Copy> Add<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: SubAssign + Copy> Sub<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: MulAssign + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: DivAssign + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

// `s * v` and `s + v` need a concrete left-hand type (coherence), so they are
// generated for the primitive scalars.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn mul(self, mut rhs: Vector3<$t>) -> Vector3<$t> {
                rhs *= self;
                rhs
            }
        }

        impl Add<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            #[inline]
            fn add(self, mut rhs: Vector3<$t>) -> Vector3<$t> {
                rhs += self;
                rhs
            }
        }
    )*};
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Neg<Output = T>> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Component access by axis (0=X, 1=Y, 2=Z).
impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 axis out of range: {axis}"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 axis out of range: {axis}"),
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
