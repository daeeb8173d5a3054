// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Numeric bounds for quaternion components and the promotion table used by
//! mixed-type arithmetic.

use std::fmt::{Debug, Display};

use bytemuck::Pod;
use num_traits::{AsPrimitive, Float, FloatConst, NumCast, Signed};

/// A numeric type usable as a quaternion component.
///
/// Implemented for the signed integer types and for `f32`/`f64`. Unsigned types are
/// left out because conjugation and negation must stay inside the component type.
pub trait Scalar:
    Signed + NumCast + PartialOrd + Copy + Pod + Debug + Display + Send + Sync + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The gap between `1` and the next representable value. Zero for integers.
    const MACHINE_EPSILON: Self;
    /// The tolerance used for normalization checks and the slerp parallel threshold
    /// when the caller does not supply one.
    const DEFAULT_TOLERANCE: Self;

    /// Returns `|self - other|`, or `None` when it does not fit in `Self`.
    fn checked_distance(self, other: Self) -> Option<Self>;
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MACHINE_EPSILON: Self = 0;
                const DEFAULT_TOLERANCE: Self = 0;

                #[inline]
                fn checked_distance(self, other: Self) -> Option<Self> {
                    self.checked_sub(other).and_then(|d| d.checked_abs())
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64);

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MACHINE_EPSILON: Self = f32::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-5;

    #[inline]
    fn checked_distance(self, other: Self) -> Option<Self> {
        Some((self - other).abs())
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MACHINE_EPSILON: Self = f64::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-12;

    #[inline]
    fn checked_distance(self, other: Self) -> Option<Self> {
        Some((self - other).abs())
    }
}

/// Resolves the common type of two scalars.
///
/// Floats dominate integers and the wider type dominates the narrower one, so
/// `i32` with `f64` gives `f64`, `i8` with `i64` gives `i64`, and `i64` with `f32`
/// gives `f32`. Every operator that mixes two component types returns a
/// quaternion over [`Promote::Output`].
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    /// The common type of `Self` and `Rhs`.
    type Output: Scalar;

    /// Converts the left operand into the common type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts the right operand into the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! promote {
    ($lhs:ty => $($rhs:ty : $out:ty),+ $(,)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    AsPrimitive::<$out>::as_(self)
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    AsPrimitive::<$out>::as_(rhs)
                }
            }
        )+
    };
}

promote!(i8  => i8: i8,   i16: i16, i32: i32, i64: i64, f32: f32, f64: f64);
promote!(i16 => i8: i16,  i16: i16, i32: i32, i64: i64, f32: f32, f64: f64);
promote!(i32 => i8: i32,  i16: i32, i32: i32, i64: i64, f32: f32, f64: f64);
promote!(i64 => i8: i64,  i16: i64, i32: i64, i64: i64, f32: f32, f64: f64);
promote!(f32 => i8: f32,  i16: f32, i32: f32, i64: f32, f32: f32, f64: f64);
promote!(f64 => i8: f64,  i16: f64, i32: f64, i64: f64, f32: f64, f64: f64);

/// A floating point scalar, required by operations that take square roots or
/// evaluate trigonometric functions.
///
/// The `Promote<Self, Output = Self>` bound lets generic code combine two
/// quaternions of the same real type without naming the promotion.
pub trait RealScalar: Scalar + Float + FloatConst + Promote<Self, Output = Self> {}

impl<T> RealScalar for T where T: Scalar + Float + FloatConst + Promote<Self, Output = Self> {}

/// `2` in any scalar type.
#[inline]
pub(crate) fn two<T: Scalar>() -> T {
    T::ONE + T::ONE
}
