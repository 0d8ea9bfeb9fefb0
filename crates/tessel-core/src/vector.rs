//! Fixed-size component vectors.
//!
//! [`Vector2`], [`Vector3`] and [`Vector4`] are plain `Copy` structs used as
//! grid cells (RGB pixels are [`Vec3`]) and as sampling bounds. Arithmetic
//! is component-wise; scalar `*` and `/` apply to every component.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

macro_rules! vector_type {
    ($(#[$meta:meta])* $name:ident, $n:literal, $($field:ident),+) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name<T> {
            $(
                #[allow(missing_docs)]
                pub $field: T,
            )+
        }

        impl<T> $name<T> {
            /// Build a vector from its components.
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Apply `f` to every component.
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }
        }

        impl<T: Copy> $name<T> {
            /// Build a vector with every component set to `value`.
            pub const fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }
        }

        impl<T> From<[T; $n]> for $name<T> {
            fn from([$($field),+]: [T; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        impl<T: Add<Output = T>> Add for $name<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Sub<Output = T>> Sub for $name<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: AddAssign> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl<T: SubAssign> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl<T: Mul<Output = T> + Copy> Mul<T> for $name<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Div<Output = T> + Copy> Div<T> for $name<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: Neg<Output = T>> Neg for $name<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

vector_type!(
    /// Two-component vector.
    Vector2, 2, x, y
);
vector_type!(
    /// Three-component vector. Pixels store linear RGB as `(x, y, z)`.
    Vector3, 3, x, y, z
);
vector_type!(
    /// Four-component vector.
    Vector4, 4, x, y, z, w
);

/// `f32` two-component vector.
pub type Vec2 = Vector2<f32>;
/// `f32` three-component vector.
pub type Vec3 = Vector3<f32>;
/// `f32` four-component vector.
pub type Vec4 = Vector4<f32>;
/// `i32` two-component vector.
pub type IVec2 = Vector2<i32>;
/// `i32` three-component vector.
pub type IVec3 = Vector3<i32>;
/// `i32` four-component vector.
pub type IVec4 = Vector4<i32>;
/// `u32` two-component vector.
pub type UVec2 = Vector2<u32>;
/// `u32` three-component vector.
pub type UVec3 = Vector3<u32>;
/// `u32` four-component vector.
pub type UVec4 = Vector4<u32>;
