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

//! Equality, similarity, and distance between quaternions.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::config::Tolerances;
use crate::error::{QuaternionError, QuaternionResult};
use crate::ops::promote_pair;
use crate::quaternion::Quaternion;
use crate::scalar::{Promote, RealScalar, Scalar};

impl<T, U> PartialEq<Quaternion<U>> for Quaternion<T>
where
    T: Promote<U>,
    U: Scalar,
{
    /// Exact component-wise equality in the common type.
    ///
    /// Only reliable for integers or for values produced without rounding.
    fn eq(&self, other: &Quaternion<U>) -> bool {
        let (a, b) = promote_pair(*self, *other);
        a.x == b.x && a.y == b.y && a.z == b.z && a.w == b.w
    }
}

impl<T: Scalar> PartialEq<[T; 4]> for Quaternion<T> {
    /// Compares against components listed in `x, y, z, w` order.
    fn eq(&self, other: &[T; 4]) -> bool {
        self.as_array() == other
    }
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: Promote + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
            && T::abs_diff_eq(&self.w, &other.w, epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: Promote + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
            && T::relative_eq(&self.w, &other.w, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: Promote + UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        T::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && T::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && T::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
            && T::ulps_eq(&self.w, &other.w, epsilon, max_ulps)
    }
}

/// Computes the dot product of two quaternions in their common type.
///
/// # Examples
///
/// ```
/// use quatern_core::{dot, Quaternion};
/// let a = Quaternion::new(1, 2, 3, 4);
/// let b = Quaternion::new(0.5f64, 0.0, 0.0, 1.0);
/// assert_eq!(dot(a, b), 4.5);
/// ```
#[inline]
pub fn dot<T, U>(lhs: Quaternion<T>, rhs: Quaternion<U>) -> <T as Promote<U>>::Output
where
    T: Promote<U>,
    U: Scalar,
{
    let (a, b) = promote_pair(lhs, rhs);
    a.dot(b)
}

/// Component-wise comparison within the default equality tolerance of the common
/// type, which is its machine epsilon.
#[inline]
pub fn approx_eq<T, U>(lhs: Quaternion<T>, rhs: Quaternion<U>) -> bool
where
    T: Promote<U>,
    U: Scalar,
{
    approx_eq_with(lhs, rhs, &Tolerances::default())
}

/// Component-wise comparison within `tolerances.equality`.
#[inline]
pub fn approx_eq_with<T, U>(
    lhs: Quaternion<T>,
    rhs: Quaternion<U>,
    tolerances: &Tolerances<<T as Promote<U>>::Output>,
) -> bool
where
    T: Promote<U>,
    U: Scalar,
{
    approx_eq_within(lhs, rhs, tolerances.equality)
}

/// Component-wise comparison: every `|lhs_i - rhs_i| <= tolerance`.
///
/// Integer components whose difference overflows the common type compare unequal.
pub fn approx_eq_within<T, U>(
    lhs: Quaternion<T>,
    rhs: Quaternion<U>,
    tolerance: <T as Promote<U>>::Output,
) -> bool
where
    T: Promote<U>,
    U: Scalar,
{
    let (a, b) = promote_pair(lhs, rhs);
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(&l, &r)| l.checked_distance(r).is_some_and(|d| d <= tolerance))
}

/// Returns the angle in `[0, π]` between two quaternions seen as 4D vectors.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so round-off never yields `NaN`.
///
/// # Errors
///
/// Returns [`QuaternionError::DivisionByZero`] if either operand is the zero quaternion.
pub fn angle_between<T, U>(
    lhs: Quaternion<T>,
    rhs: Quaternion<U>,
) -> QuaternionResult<<T as Promote<U>>::Output>
where
    T: Promote<U>,
    U: Scalar,
    <T as Promote<U>>::Output: RealScalar,
{
    let (a, b) = promote_pair(lhs, rhs);
    angle_between_unmixed(a, b)
}

fn angle_between_unmixed<C: RealScalar>(a: Quaternion<C>, b: Quaternion<C>) -> QuaternionResult<C> {
    let denominator = a.norm() * b.norm();
    if denominator.is_zero() {
        return Err(QuaternionError::division_by_zero("angle_between"));
    }
    let cos_theta = (a.dot(b) / denominator).max(-C::ONE).min(C::ONE);
    Ok(cos_theta.acos())
}
