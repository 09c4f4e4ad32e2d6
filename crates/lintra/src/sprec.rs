// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Single precision (`f32`, epsilon `1e-6`).

use crate::scalar::Scalar;

/// Tolerance used by every epsilon-aware comparison in this precision.
pub const EPSILON: f32 = <f32 as Scalar>::EPSILON;
/// Archimedes' constant.
pub const PI: f32 = <f32 as Scalar>::PI;

/// Angle in single precision.
pub type Angle = crate::Angle<f32>;
/// 2D vector in single precision.
pub type Vec2 = crate::Vec2<f32>;
/// 3D vector in single precision.
pub type Vec3 = crate::Vec3<f32>;
/// 4D vector in single precision.
pub type Vec4 = crate::Vec4<f32>;
/// Quaternion in single precision.
pub type Quat = crate::Quat<f32>;
/// 3×3 matrix in single precision.
pub type Mat3 = crate::Mat3<f32>;
/// 4×4 matrix in single precision.
pub type Mat4 = crate::Mat4<f32>;

/// Euler rotation order (precision independent).
pub use crate::quat::RotationOrder;
