//! Scalar bounds for `Vector3` components.
//!
//! Both traits are blanket-implemented, so any type satisfying the underlying
//! `num-traits` bounds qualifies automatically: implement `num_traits::Float`
//! and the assignment operators for a custom number type to use it here.

use num_traits::{Float, NumAssign};

/// A copyable number with `+ - * /` and their compound-assignment forms.
///
/// Enough for the arithmetic operators, `dot`, `cross`, `length2` and
/// `reflect`. Integers qualify.
pub trait Scalar: NumAssign + Copy {}

impl<T: NumAssign + Copy> Scalar for T {}

/// A floating-point [`Scalar`], required wherever a square root is taken
/// (`length`, normalization, `refract`).
pub trait Real: Scalar + Float {}

impl<T: Scalar + Float> Real for T {}
