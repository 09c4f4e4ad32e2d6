// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction shared by both precision families.
//!
//! Every value type in this crate is generic over a [`Scalar`], which is
//! implemented for exactly two representations:
//! - `f32` (single precision, [`crate::sprec`]) with `EPSILON = 1e-6`;
//! - `f64` (double precision, [`crate::dprec`]) with `EPSILON = 1e-12`.
//!
//! The trait is sealed; downstream crates cannot add further backends. The two
//! epsilons are deliberately distinct and every epsilon-aware comparison reads
//! the constant of the precision it operates in.
//!
//! Numeric contract:
//! - Operations are pure and never fail. Degenerate inputs (division by zero,
//!   `acos` outside `[-1, 1]`, ...) propagate IEEE-754 `NaN`/`±∞` unchanged.
//! - Trigonometric functions interpret arguments as radians. The free
//!   functions [`cos`], [`sin`], [`tan`], [`acos`], [`asin`] and [`atan2`]
//!   bridge to the [`Angle`] newtype.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::angle::Angle;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar backing one precision family.
///
/// Arithmetic operators are required via the standard operator traits so the
/// generic code in this crate can use `+`, `-`, `*`, `/`, `%` and unary `-`
/// directly.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// The value `2`.
    const TWO: Self;
    /// The value `0.5`.
    const HALF: Self;
    /// Archimedes' constant at this precision.
    const PI: Self;
    /// A full turn (`2π`) at this precision.
    const TAU: Self;
    /// Tolerance used by [`eq`] and every `is_zero`/`is_identity` predicate.
    const EPSILON: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root; negative inputs yield `NaN`.
    fn sqrt(self) -> Self;

    /// Sine of `self` radians.
    fn sin(self) -> Self;

    /// Cosine of `self` radians.
    fn cos(self) -> Self;

    /// Tangent of `self` radians.
    fn tan(self) -> Self;

    /// Arcsine in radians; inputs outside `[-1, 1]` yield `NaN`.
    fn asin(self) -> Self;

    /// Arccosine in radians; inputs outside `[-1, 1]` yield `NaN`.
    fn acos(self) -> Self;

    /// Four-quadrant arctangent of `self / x` in radians.
    fn atan2(self, x: Self) -> Self;

    /// Returns `true` if the value is `NaN`.
    fn is_nan(self) -> bool;

    /// Returns `true` if the value is positive or negative infinity.
    fn is_infinite(self) -> bool;

    /// Converts from `f64`, rounding to nearest when narrowing.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`; exact for both implementations.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($t:ident, $eps:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;
            const EPSILON: Self = $eps;

            fn abs(self) -> Self {
                $t::abs(self)
            }

            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            fn sin(self) -> Self {
                $t::sin(self)
            }

            fn cos(self) -> Self {
                $t::cos(self)
            }

            fn tan(self) -> Self {
                $t::tan(self)
            }

            fn asin(self) -> Self {
                $t::asin(self)
            }

            fn acos(self) -> Self {
                $t::acos(self)
            }

            fn atan2(self, x: Self) -> Self {
                $t::atan2(self, x)
            }

            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                $t::is_infinite(self)
            }

            #[allow(clippy::cast_possible_truncation, clippy::unnecessary_cast)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, 0.000001);
impl_scalar!(f64, 0.000000000001);

/// Absolute value of `value`.
pub fn abs<T: Scalar>(value: T) -> T {
    value.abs()
}

/// Square root of `value`.
pub fn sqrt<T: Scalar>(value: T) -> T {
    value.sqrt()
}

/// Epsilon-aware equality using the precision's [`Scalar::EPSILON`].
///
/// The comparison is strict: values exactly `EPSILON` apart are not equal.
pub fn eq<T: Scalar>(a: T, b: T) -> bool {
    eq_eps(a, b, T::EPSILON)
}

/// Equality within a caller-supplied tolerance (`|a - b| < epsilon`).
pub fn eq_eps<T: Scalar>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon
}

/// The smaller of `a` and `b`.
pub fn min<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of `a` and `b`.
pub fn max<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `value` to the inclusive `[lower, upper]` range.
pub fn clamp<T: Scalar>(value: T, lower: T, upper: T) -> T {
    debug_assert!(lower <= upper, "invalid clamp range: {lower} > {upper}");
    min(max(value, lower), upper)
}

/// Linear blend `a * (1 - t) + b * t`.
pub fn mix<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::ONE - t) + b * t
}

/// Returns `1` for non-negative values (including `+0.0`) and `-1` otherwise.
pub fn sign<T: Scalar>(value: T) -> T {
    if value >= T::ZERO {
        T::ONE
    } else {
        -T::ONE
    }
}

/// Returns `true` if `value` is neither `NaN` nor infinite.
pub fn is_valid<T: Scalar>(value: T) -> bool {
    !value.is_nan() && !value.is_infinite()
}

/// Cosine of an angle.
pub fn cos<T: Scalar>(angle: Angle<T>) -> T {
    angle.radians().cos()
}

/// Sine of an angle.
pub fn sin<T: Scalar>(angle: Angle<T>) -> T {
    angle.radians().sin()
}

/// Tangent of an angle.
pub fn tan<T: Scalar>(angle: Angle<T>) -> T {
    angle.radians().tan()
}

/// Angle whose cosine is `value`.
pub fn acos<T: Scalar>(value: T) -> Angle<T> {
    Angle::from_radians(value.acos())
}

/// Angle whose sine is `value`.
pub fn asin<T: Scalar>(value: T) -> Angle<T> {
    Angle::from_radians(value.asin())
}

/// Angle of the point `(x, y)` measured from the positive X axis.
pub fn atan2<T: Scalar>(y: T, x: T) -> Angle<T> {
    Angle::from_radians(y.atan2(x))
}
