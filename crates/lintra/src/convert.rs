// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversions between the single- and double-precision families.
//!
//! Widening (`f32 → f64`) is exact and is also available through `From`.
//! Narrowing (`f64 → f32`) rounds each component to the nearest `f32` and is
//! only available through the explicit `narrow()` method.
//!
//! ```
//! use lintra::{dprec, sprec};
//! let d = dprec::Mat4::from_translation(1.5, -2.25, 3.0);
//! let s: sprec::Mat4 = d.narrow();
//! let back: dprec::Mat4 = s.into();
//! assert_eq!(back, d);
//! ```

use crate::angle::Angle;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::quat::Quat;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

macro_rules! impl_precision_conversion {
    ($name:ident { $($field:ident),+ }) => {
        impl $name<f32> {
            /// Converts to double precision. Exact.
            pub fn widen(self) -> $name<f64> {
                $name { $($field: f64::from(self.$field)),+ }
            }
        }

        impl $name<f64> {
            /// Converts to single precision, rounding each component to nearest.
            #[allow(clippy::cast_possible_truncation)]
            pub fn narrow(self) -> $name<f32> {
                $name { $($field: self.$field as f32),+ }
            }
        }

        impl From<$name<f32>> for $name<f64> {
            fn from(value: $name<f32>) -> Self {
                value.widen()
            }
        }
    };
}

impl_precision_conversion!(Vec2 { x, y });
impl_precision_conversion!(Vec3 { x, y, z });
impl_precision_conversion!(Vec4 { x, y, z, w });
impl_precision_conversion!(Quat { w, x, y, z });
impl_precision_conversion!(Mat3 { m11, m12, m13, m21, m22, m23, m31, m32, m33 });
impl_precision_conversion!(Mat4 {
    m11, m12, m13, m14,
    m21, m22, m23, m24,
    m31, m32, m33, m34,
    m41, m42, m43, m44
});

impl Angle<f32> {
    /// Converts to double precision. Exact.
    pub fn widen(self) -> Angle<f64> {
        Angle::from_radians(f64::from(self.radians()))
    }
}

impl Angle<f64> {
    /// Converts to single precision, rounding to nearest.
    #[allow(clippy::cast_possible_truncation)]
    pub fn narrow(self) -> Angle<f32> {
        Angle::from_radians(self.radians() as f32)
    }
}

impl From<Angle<f32>> for Angle<f64> {
    fn from(value: Angle<f32>) -> Self {
        value.widen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_rounds_to_nearest() {
        let v = Vec3::new(0.1_f64, 1.0 / 3.0, -2.5);
        assert_eq!(v.narrow(), Vec3::new(0.1_f32, 1.0 / 3.0, -2.5));
    }

    #[test]
    fn widening_is_exact() {
        let q = Quat::new(0.1_f32, 0.2, 0.3, 0.4);
        let wide: Quat<f64> = q.into();
        assert_eq!(wide.narrow(), q);
        assert_eq!(wide.x, f64::from(0.2_f32));
    }
}
