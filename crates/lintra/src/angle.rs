// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rotation measure stored canonically in radians.

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::scalar::Scalar;

/// An angle, stored in radians.
///
/// Construction never validates or wraps the value; use [`Angle::normalize`],
/// [`Angle::normalize_pos`] or [`Angle::normalize_neg`] to fold it into a
/// canonical range explicitly.
///
/// # Examples
/// ```
/// use lintra::dprec::Angle;
/// let a = Angle::from_degrees(540.0).normalize();
/// assert!((a.degrees() - 180.0).abs() < 1e-9);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle<T: Scalar>(T);

impl<T: Scalar> Angle<T> {
    /// The zero angle.
    pub const ZERO: Self = Self(T::ZERO);

    /// Creates an angle from radians.
    pub const fn from_radians(radians: T) -> Self {
        Self(radians)
    }

    /// Creates an angle from degrees (`π · deg / 180`).
    pub fn from_degrees(degrees: T) -> Self {
        Self(T::PI * (degrees / T::from_f64(180.0)))
    }

    /// The angle in radians.
    pub fn radians(self) -> T {
        self.0
    }

    /// The angle in degrees (`180 · rad / π`).
    pub fn degrees(self) -> T {
        T::from_f64(180.0) * (self.0 / T::PI)
    }

    /// Folds the angle into `[-π, π]`.
    ///
    /// The remainder is taken with the sign of the dividend, so the boundary
    /// keeps its sign: `180°` stays `180°`, `-180°` stays `-180°`, and
    /// `±540°` map to `±180°`.
    pub fn normalize(self) -> Self {
        let mut radians = self.0 % T::TAU;
        if radians > T::PI {
            radians -= T::TAU;
        } else if radians < -T::PI {
            radians += T::TAU;
        }
        Self(radians)
    }

    /// Folds the angle into `[0, 2π)`.
    pub fn normalize_pos(self) -> Self {
        let mut radians = self.0 % T::TAU;
        if radians < T::ZERO {
            radians += T::TAU;
        }
        Self(radians)
    }

    /// Folds the angle into `(-2π, 0]`.
    pub fn normalize_neg(self) -> Self {
        let mut radians = self.0 % T::TAU;
        if radians > T::ZERO {
            radians -= T::TAU;
        }
        Self(radians)
    }

    /// Returns `true` if the underlying value is `NaN`.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Returns `true` if the underlying value is infinite.
    pub fn is_inf(self) -> bool {
        self.0.is_infinite()
    }
}

impl<T: Scalar> Add for Angle<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> AddAssign for Angle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Scalar> Sub for Angle<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> SubAssign for Angle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar> Neg for Angle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Angle<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self(self.0 * rhs)
    }
}

impl<T: Scalar> Div<T> for Angle<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}

impl<T: Scalar> fmt::Display for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
