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

//! Operator overloads for [`Quaternion`].
//!
//! Binary operators accept operands of different scalar types and produce a
//! quaternion over their common type. Compound assignments keep the receiver's
//! type and cast the right operand into it.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;

use crate::error::QuaternionResult;
use crate::quaternion::Quaternion;
use crate::scalar::{Promote, Scalar};

/// Converts both operands into their common type.
#[inline]
pub(crate) fn promote_pair<T, U>(
    lhs: Quaternion<T>,
    rhs: Quaternion<U>,
) -> (
    Quaternion<<T as Promote<U>>::Output>,
    Quaternion<<T as Promote<U>>::Output>,
)
where
    T: Promote<U>,
    U: Scalar,
{
    (
        lhs.map(<T as Promote<U>>::promote),
        rhs.map(<T as Promote<U>>::promote_rhs),
    )
}

/// The Hamilton product `a * b`.
#[inline]
fn hamilton<C: Scalar>(a: Quaternion<C>, b: Quaternion<C>) -> Quaternion<C> {
    Quaternion {
        x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    }
}

impl<T, U> Add<Quaternion<U>> for Quaternion<T>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Quaternion<<T as Promote<U>>::Output>;
    /// Adds two quaternions component-wise.
    #[inline]
    fn add(self, rhs: Quaternion<U>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
    }
}

impl<T, U> Sub<Quaternion<U>> for Quaternion<T>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Quaternion<<T as Promote<U>>::Output>;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Quaternion<U>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        Quaternion::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
    }
}

impl<T, U> Mul<Quaternion<U>> for Quaternion<T>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Quaternion<<T as Promote<U>>::Output>;
    /// Combines two rotations using the Hamilton product.
    /// Note that quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Quaternion<U>) -> Self::Output {
        let (a, b) = promote_pair(self, rhs);
        hamilton(a, b)
    }
}

impl<T, S> Mul<S> for Quaternion<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Quaternion<<T as Promote<S>>::Output>;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: S) -> Self::Output {
        let factor = <T as Promote<S>>::promote_rhs(scalar);
        self.map(<T as Promote<S>>::promote).scale(factor)
    }
}

impl<T, S> Div<S> for Quaternion<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = QuaternionResult<Quaternion<<T as Promote<S>>::Output>>;
    /// Divides all components by a scalar, failing on a zero divisor.
    #[inline]
    fn div(self, scalar: S) -> Self::Output {
        let divisor = <T as Promote<S>>::promote_rhs(scalar);
        self.map(<T as Promote<S>>::promote).checked_div(divisor)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($s:ty),* $(,)?) => {
        $(
            impl<T: Scalar> Mul<Quaternion<T>> for $s
            where
                $s: Promote<T>,
            {
                type Output = Quaternion<<$s as Promote<T>>::Output>;
                /// Scales all components of the quaternion by a scalar.
                #[inline]
                fn mul(self, rhs: Quaternion<T>) -> Self::Output {
                    let factor = <$s as Promote<T>>::promote(self);
                    rhs.map(<$s as Promote<T>>::promote_rhs).scale(factor)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, f32, f64);

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;
    /// Negates all components of the quaternion.
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<T, U> AddAssign<Quaternion<U>> for Quaternion<T>
where
    T: Scalar,
    U: Scalar + AsPrimitive<T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quaternion<U>) {
        let rhs = rhs.cast::<T>();
        *self = Quaternion::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        );
    }
}

impl<T, U> SubAssign<Quaternion<U>> for Quaternion<T>
where
    T: Scalar,
    U: Scalar + AsPrimitive<T>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quaternion<U>) {
        let rhs = rhs.cast::<T>();
        *self = Quaternion::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        );
    }
}

impl<T, U> MulAssign<Quaternion<U>> for Quaternion<T>
where
    T: Scalar,
    U: Scalar + AsPrimitive<T>,
{
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion<U>) {
        *self = hamilton(*self, rhs.cast::<T>());
    }
}

impl<T, S> MulAssign<S> for Quaternion<T>
where
    T: Scalar,
    S: Scalar + AsPrimitive<T>,
{
    #[inline]
    fn mul_assign(&mut self, scalar: S) {
        *self = self.scale(scalar.as_());
    }
}
