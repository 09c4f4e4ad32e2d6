// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// Four-component vector, typically a homogeneous 3D coordinate.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<T: Scalar> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
    /// W component.
    pub w: T,
}

impl<T: Scalar> Vec4<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Unit vector along +X.
    pub const fn basis_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Unit vector along +Y.
    pub const fn basis_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    /// Unit vector along +Z.
    pub const fn basis_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    /// Unit vector along +W.
    pub const fn basis_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Extends a 3D vector with the given `w`.
    pub fn from_xyz(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops the `w` component.
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length.
    pub fn sqr_length(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> T {
        self.sqr_length().sqrt()
    }

    /// Scales the vector to length one.
    pub fn unit(self) -> Self {
        self / self.length()
    }

    /// Rescales the vector to the given length, keeping its direction.
    pub fn resized(self, length: T) -> Self {
        self.unit() * length
    }
}

impl_vector_ops!(Vec4, 4 { x, y, z, w });
