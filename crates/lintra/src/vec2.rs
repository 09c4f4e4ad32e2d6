// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::Scalar;

/// Two-component vector.
///
/// Used both for 2D points and directions; [`crate::Mat3`] treats it as the
/// non-homogeneous part of a 2D transform.
///
/// # Examples
/// ```
/// use lintra::dprec::Vec2;
/// let v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T: Scalar> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// Unit vector along +X.
    pub const fn basis_x() -> Self {
        Self::new(T::ONE, T::ZERO)
    }

    /// Unit vector along +Y.
    pub const fn basis_y() -> Self {
        Self::new(T::ZERO, T::ONE)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length.
    pub fn sqr_length(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> T {
        self.sqr_length().sqrt()
    }

    /// Scales the vector to length one. The zero vector yields `NaN`.
    pub fn unit(self) -> Self {
        self / self.length()
    }

    /// Rescales the vector to the given length, keeping its direction.
    pub fn resized(self, length: T) -> Self {
        self.unit() * length
    }

    /// Unit vector perpendicular to `self`, rotated a quarter turn
    /// counter-clockwise.
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x).unit()
    }
}

impl_vector_ops!(Vec2, 2 { x, y });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_counter_clockwise() {
        let n = Vec2::new(2.0_f64, 0.0).normal();
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn display_uses_six_decimals() {
        assert_eq!(Vec2::new(1.0_f32, -0.5).to_string(), "(1.000000, -0.500000)");
    }
}
