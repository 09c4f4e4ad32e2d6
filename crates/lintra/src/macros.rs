// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Component-wise operator boilerplate shared by the vector types.

/// Implements the component-wise arithmetic surface of a vector type:
/// `+`, `-`, unary `-`, `* T`, `/ T`, the compound assignments, `T * v` for
/// both concrete precisions, iterator `Sum`, array conversions and the
/// six-decimal `Display` form `(x, y, ...)`.
macro_rules! impl_vector_ops {
    ($name:ident, $n:literal { $($field:ident),+ }) => {
        impl<T: Scalar> core::ops::Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> core::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: Scalar> core::ops::Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> core::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Scalar> core::ops::Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Scalar> core::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field *= rhs;)+
            }
        }

        impl<T: Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Scalar> core::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field /= rhs;)+
            }
        }

        impl core::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;
            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        impl core::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;
            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }

        impl<T: Scalar> core::iter::Sum for $name<T> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self { $($field: T::ZERO),+ }, |acc, v| acc + v)
            }
        }

        impl<T: Scalar> From<[T; $n]> for $name<T> {
            fn from(value: [T; $n]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $n] {
            fn from(value: $name<T>) -> Self {
                [$(value.$field),+]
            }
        }

        impl<T: Scalar> core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let components = [$(self.$field),+];
                f.write_str("(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c:.6}")?;
                }
                f.write_str(")")
            }
        }

        impl<T: Scalar> $name<T> {
            /// Returns the components as an array.
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Returns `true` if every component is within epsilon of zero.
            pub fn is_zero(self) -> bool {
                true $(&& $crate::scalar::eq(self.$field, T::ZERO))+
            }

            /// Returns `true` if any component is `NaN`.
            pub fn is_nan(self) -> bool {
                false $(|| self.$field.is_nan())+
            }

            /// Returns `true` if any component is infinite.
            pub fn is_inf(self) -> bool {
                false $(|| self.$field.is_infinite())+
            }

            /// Returns `true` if no component is `NaN` or infinite.
            pub fn is_valid(self) -> bool {
                true $(&& $crate::scalar::is_valid(self.$field))+
            }

            /// Component-wise linear interpolation `a * (1 - t) + b * t`.
            pub fn lerp(a: Self, b: Self, t: T) -> Self {
                Self { $($field: $crate::scalar::mix(a.$field, b.$field, t)),+ }
            }

            /// Subtracts every vector in `others` from `first`, left to right.
            pub fn multi_diff(first: Self, others: &[Self]) -> Self {
                others.iter().fold(first, |acc, v| acc - *v)
            }
        }
    };
}
