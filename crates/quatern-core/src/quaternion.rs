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

//! Provides a generic Quaternion type for representing 3D rotations.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;

use crate::config::Tolerances;
use crate::error::{QuaternionError, QuaternionResult};
use crate::scalar::{two, RealScalar, Scalar};

/// Represents a quaternion over the component type `T`.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" part. For representing rotations, it should be a "unit
/// quaternion" where `x² + y² + z² + w² = 1`. The type does not enforce this; call
/// [`Quaternion::normalize`] before using an arbitrary value as a rotation.
///
/// Binary operators accept quaternions and scalars of any [`Scalar`] type and
/// return a quaternion over the common type (see [`Promote`](crate::Promote)).
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Quaternion<T> {
    /// The x component of the vector part.
    pub x: T,
    /// The y component of the vector part.
    pub y: T,
    /// The z component of the vector part.
    pub z: T,
    /// The scalar (real) part.
    pub w: T,
}

// SAFETY: `repr(C)` with four fields of the same `Pod` type leaves no padding, and
// any bit pattern valid for `T` is valid for each field.
unsafe impl<T: Pod> Zeroable for Quaternion<T> {}
// SAFETY: see `Zeroable` above.
unsafe impl<T: Pod> Pod for Quaternion<T> {}

impl<T> Quaternion<T> {
    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`AngleAxis`](crate::AngleAxis) or the matrix conversion.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Applies `f` to every component, in `x, y, z, w` order.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quaternion<U> {
        Quaternion {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
            w: f(self.w),
        }
    }
}

impl<T: Scalar> Quaternion<T> {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    /// The quaternion with every component set to zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    /// The basis element `i`.
    pub const I: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// The basis element `j`.
    pub const J: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// The basis element `k`.
    pub const K: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Creates a quaternion from a vector part, with the scalar part set to `1`.
    #[inline]
    pub const fn from_vector(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::ONE)
    }

    /// Creates a quaternion from a list of 3 or 4 components.
    ///
    /// Three values fill `x, y, z` and leave `w = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::InvalidQuaternionSize`] for any other length.
    pub fn from_slice(values: &[T]) -> QuaternionResult<Self> {
        match *values {
            [x, y, z] => Ok(Self::from_vector(x, y, z)),
            [x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(QuaternionError::invalid_size(values.len())),
        }
    }

    /// Overwrites all components from a list of 3 or 4 values.
    ///
    /// The receiver is left untouched when the list has the wrong length.
    pub fn assign_slice(&mut self, values: &[T]) -> QuaternionResult<()> {
        *self = Self::from_slice(values)?;
        Ok(())
    }

    /// Returns the scalar (real) part `w`.
    #[inline]
    pub fn scalar_part(&self) -> T {
        self.w
    }

    /// Returns the vector part `[x, y, z]`.
    #[inline]
    pub fn vector_part(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Views the components as an array in `x, y, z, w` order.
    #[inline]
    pub fn as_array(&self) -> &[T; 4] {
        bytemuck::cast_ref(self)
    }

    /// Views the components as a mutable array in `x, y, z, w` order.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; 4] {
        bytemuck::cast_mut(self)
    }

    /// Returns the component at `index` (`0 = x`, ..., `3 = w`).
    pub fn get(&self, index: usize) -> QuaternionResult<T> {
        self.as_array()
            .get(index)
            .copied()
            .ok_or_else(|| QuaternionError::index_out_of_range(index, 4))
    }

    /// Returns a mutable reference to the component at `index`.
    pub fn get_mut(&mut self, index: usize) -> QuaternionResult<&mut T> {
        self.as_mut_array()
            .get_mut(index)
            .ok_or_else(|| QuaternionError::index_out_of_range(index, 4))
    }

    /// Replaces the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> QuaternionResult<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Sets every component to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Moves the value out and leaves the zero quaternion behind.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::ZERO)
    }

    /// Converts every component into `U` without loss.
    ///
    /// Only available when `U: From<T>`, e.g. `i32` to `f64` or `f32` to `f64`.
    #[inline]
    pub fn convert<U: Scalar + From<T>>(self) -> Quaternion<U> {
        self.map(<U as From<T>>::from)
    }

    /// Converts every component into `U` with `as` semantics.
    ///
    /// Floats cast into integers truncate toward zero.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Quaternion<U>
    where
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }

    /// Multiplies every component by `factor`.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        self.map(|c| c * factor)
    }

    /// Divides every component by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(self, divisor: T) -> QuaternionResult<Self> {
        if divisor.is_zero() {
            return Err(QuaternionError::division_by_zero("scalar division"));
        }
        Ok(self.map(|c| c / divisor))
    }

    /// Divides every component by `divisor` in place.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] when `divisor` is zero, leaving the
    /// quaternion unchanged.
    pub fn checked_div_in_place(&mut self, divisor: T) -> QuaternionResult<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn squared_norm(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Checks `|squared_norm - 1|` against the default normalization tolerance.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.is_normalized_with(&Tolerances::default())
    }

    /// Checks `|squared_norm - 1|` against `tolerances.normalization`.
    #[inline]
    pub fn is_normalized_with(&self, tolerances: &Tolerances<T>) -> bool {
        self.is_normalized_within(tolerances.normalization)
    }

    /// Checks `|squared_norm - 1| <= tolerance`.
    #[inline]
    pub fn is_normalized_within(&self, tolerance: T) -> bool {
        (self.squared_norm() - T::ONE).abs() <= tolerance
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Conjugates the quaternion in place.
    #[inline]
    pub fn conjugate_in_place(&mut self) {
        *self = self.conjugate();
    }

    /// Computes the dot product with a quaternion of the same type.
    ///
    /// See [`dot`](crate::dot) for the mixed-type version.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl<T: RealScalar> Quaternion<T> {
    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] for the zero quaternion.
    pub fn normalize(&self) -> QuaternionResult<Self> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(QuaternionError::division_by_zero("normalize"));
        }
        Ok(self.map(|c| c / norm))
    }

    /// Normalizes the quaternion in place.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] for the zero quaternion, which is
    /// left unchanged.
    pub fn normalize_in_place(&mut self) -> QuaternionResult<()> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Computes the multiplicative inverse, `conjugate / squared_norm`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] for the zero quaternion.
    pub fn inverse(&self) -> QuaternionResult<Self> {
        let squared_norm = self.squared_norm();
        if squared_norm.is_zero() {
            return Err(QuaternionError::division_by_zero("inverse"));
        }
        Ok(self.conjugate().map(|c| c / squared_norm))
    }

    /// Inverts the quaternion in place.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`] for the zero quaternion, which is
    /// left unchanged.
    pub fn inverse_in_place(&mut self) -> QuaternionResult<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// The inverse of a unit quaternion, which is its conjugate.
    ///
    /// Skips the division; the result is wrong for non-unit input.
    #[inline]
    pub fn unit_inverse(&self) -> Self {
        self.conjugate()
    }

    /// Rotates a 3D vector by this (unit) quaternion.
    pub fn rotate_vector(&self, v: [T; 3]) -> [T; 3] {
        let u = self.vector_part();
        let s = self.w;
        let two: T = two();

        let u_dot_v = u[0] * v[0] + u[1] * v[1] + u[2] * v[2];
        let u_dot_u = u[0] * u[0] + u[1] * u[1] + u[2] * u[2];
        let u_cross_v = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];

        let a = two * u_dot_v;
        let b = s * s - u_dot_u;
        let c = two * s;
        [
            a * u[0] + b * v[0] + c * u_cross_v[0],
            a * u[1] + b * v[1] + c * u_cross_v[1],
            a * u[2] + b * v[2] + c * u_cross_v[2],
        ]
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<[T; 3]> for Quaternion<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::from_vector(x, y, z)
    }
}

impl<T: Scalar> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        *q.as_array()
    }
}

impl<T: Scalar> TryFrom<&[T]> for Quaternion<T> {
    type Error = QuaternionError;

    fn try_from(values: &[T]) -> QuaternionResult<Self> {
        Self::from_slice(values)
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for Quaternion<T> {
    type Error = QuaternionError;

    fn try_from(values: Vec<T>) -> QuaternionResult<Self> {
        Self::from_slice(&values)
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_identity_and_default() {
        let q_ident = Quaternion::<f64>::IDENTITY;
        let q_def = Quaternion::<f64>::default();
        assert_eq!(q_ident, q_def);
        assert_eq!(q_ident, [0.0, 0.0, 0.0, 1.0]);
        assert_relative_eq!(q_ident.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_constructors() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((q.x, q.y, q.z, q.w), (1.0, 2.0, 3.0, 4.0));

        let v = Quaternion::from_vector(1.0, 2.0, 3.0);
        assert_eq!(v, [1.0, 2.0, 3.0, 1.0]);

        assert_eq!(Quaternion::from([1, 2, 3]), [1, 2, 3, 1]);
        assert_eq!(Quaternion::from([1, 2, 3, 4]), [1, 2, 3, 4]);
        assert_eq!(<[i32; 4]>::from(Quaternion::new(5, 6, 7, 8)), [5, 6, 7, 8]);
    }

    #[test]
    fn test_from_slice() {
        let q = Quaternion::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(q, [1.0, 2.0, 3.0, 4.0]);

        let q = Quaternion::try_from(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(q, [1.0, 2.0, 3.0, 1.0]);

        assert_eq!(
            Quaternion::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(QuaternionError::InvalidQuaternionSize { len: 5 })
        );
        assert_eq!(
            Quaternion::<i32>::from_slice(&[]),
            Err(QuaternionError::InvalidQuaternionSize { len: 0 })
        );
    }

    #[test]
    fn test_assign_slice_keeps_value_on_error() {
        let mut q = Quaternion::new(1, 2, 3, 4);
        assert!(q.assign_slice(&[9, 9]).is_err());
        assert_eq!(q, [1, 2, 3, 4]);

        q.assign_slice(&[5, 6, 7]).unwrap();
        assert_eq!(q, [5, 6, 7, 1]);
    }

    #[test]
    fn test_component_access() {
        let mut q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.scalar_part(), 4);
        assert_eq!(q.vector_part(), [1, 2, 3]);
        assert_eq!(q.get(0), Ok(1));
        assert_eq!(q.get(3), Ok(4));
        assert_eq!(
            q.get(4),
            Err(QuaternionError::IndexOutOfRange { index: 4, len: 4 })
        );

        *q.get_mut(1).unwrap() = 20;
        q.set(2, 30).unwrap();
        assert_eq!(q, [1, 20, 30, 4]);
        assert!(q.set(7, 0).is_err());
    }

    #[test]
    fn test_take_and_set_zero() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let moved = q.take();
        assert_eq!(moved, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q, Quaternion::<f64>::ZERO);

        let mut q = Quaternion::new(1, 2, 3, 4);
        q.set_zero();
        assert_eq!(q, [0, 0, 0, 0]);
    }

    #[test]
    fn test_convert_and_cast() {
        let q = Quaternion::new(1i32, 2, 3, 4);
        let qd: Quaternion<f64> = q.convert();
        assert_eq!(qd, [1.0, 2.0, 3.0, 4.0]);

        let truncated: Quaternion<i32> = Quaternion::new(5.2, -23.6, 2.8, 5.4).cast();
        assert_eq!(truncated, [5, -23, 2, 5]);
    }

    #[test]
    fn test_norm_and_squared_norm() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_relative_eq!(q.squared_norm(), 30.0);
        assert_relative_eq!(q.norm(), 30.0f64.sqrt());
        assert_eq!(Quaternion::new(1, 2, 3, 4).squared_norm(), 30);
    }

    #[test]
    fn test_normalization() {
        let q = Quaternion::new(2.0, 1.0, 3.0, 0.0);
        let n = 14.0f64.sqrt();
        let q_norm = q.normalize().unwrap();
        assert_relative_eq!(q_norm.x, 2.0 / n, epsilon = EPSILON);
        assert_relative_eq!(q_norm.y, 1.0 / n, epsilon = EPSILON);
        assert_relative_eq!(q_norm.z, 3.0 / n, epsilon = EPSILON);
        assert_relative_eq!(q_norm.w, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q_norm.norm(), 1.0, epsilon = EPSILON);

        let mut q_mut = q;
        q_mut.normalize_in_place().unwrap();
        assert_eq!(q_mut, q_norm);
    }

    #[test]
    fn test_normalize_zero_quaternion() {
        let mut q_zero = Quaternion::<f32>::ZERO;
        assert_eq!(q_zero.normalize(), Err(QuaternionError::DivisionByZero));
        assert!(q_zero.normalize_in_place().is_err());
        assert_eq!(q_zero, Quaternion::<f32>::ZERO);
    }

    #[test]
    fn test_is_normalized() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(Quaternion::new(h, 0.0, 0.0, h).is_normalized());
        assert!(!Quaternion::new(1.0, 2.0, 3.0, 4.0).is_normalized());
        assert!(Quaternion::new(0.0, 0.0, 0.0, 1.001).is_normalized_within(0.01));
        assert!(!Quaternion::new(0.0, 0.0, 0.0, 1.001).is_normalized_within(1e-4));
        assert!(Quaternion::new(0, 1, 0, 0).is_normalized());
    }

    #[test]
    fn test_is_normalized_with_uses_normalization_tolerance() {
        let q = Quaternion::new(0.0f64, 0.0, 0.0, 1.001);
        assert!(!q.is_normalized_with(&Tolerances::default()));
        assert!(q.is_normalized_with(&Tolerances::default().with_normalization(0.01)));
        assert!(!q.is_normalized_with(&Tolerances::uniform(1e-4)));
    }

    #[test]
    fn test_conjugate() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q_conj = q.conjugate();
        assert_eq!(q_conj, [-1.0, -2.0, -3.0, 4.0]);
        assert_eq!(q_conj.conjugate(), q);

        q.conjugate_in_place();
        assert_eq!(q, q_conj);
    }

    #[test]
    fn test_inverse() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q_inv = q.inverse().unwrap();
        let expected = Quaternion::new(-1.0 / 30.0, -2.0 / 30.0, -3.0 / 30.0, 4.0 / 30.0);
        assert_relative_eq!(q_inv, expected, epsilon = EPSILON);

        q.inverse_in_place().unwrap();
        assert_eq!(q, q_inv);

        assert_eq!(
            Quaternion::<f64>::ZERO.inverse(),
            Err(QuaternionError::DivisionByZero)
        );
    }

    #[test]
    fn test_unit_inverse_matches_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(q.unit_inverse(), q.inverse().unwrap(), epsilon = EPSILON);
    }

    #[test]
    fn test_checked_div_and_scale() {
        let q = Quaternion::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(q.checked_div(2.0).unwrap(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.checked_div(0.0), Err(QuaternionError::DivisionByZero));
        assert_eq!(q.scale(0.5), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            Quaternion::new(1, 2, 3, 4).checked_div(0),
            Err(QuaternionError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_div_in_place() {
        let mut q = Quaternion::new(2.0f64, 4.0, 6.0, 8.0);
        q.checked_div_in_place(2.0).unwrap();
        assert_eq!(q, [1.0, 2.0, 3.0, 4.0]);

        assert_eq!(q.checked_div_in_place(0.0), Err(QuaternionError::DivisionByZero));
        assert_eq!(q, [1.0, 2.0, 3.0, 4.0]);

        let mut qi = Quaternion::new(9i32, 6, 3, 0);
        qi.checked_div_in_place(3).unwrap();
        assert_eq!(qi, [3, 2, 1, 0]);
        assert!(qi.checked_div_in_place(0).is_err());
        assert_eq!(qi, [3, 2, 1, 0]);
    }

    #[test]
    fn test_inverse_in_place_zero_is_unchanged() {
        let mut q = Quaternion::<f64>::ZERO;
        assert_eq!(q.inverse_in_place(), Err(QuaternionError::DivisionByZero));
        assert_eq!(q, [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rotate_vector() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        // 90 degrees about +Y takes +X to -Z.
        let q = Quaternion::new(0.0, h, 0.0, h);
        let v = q.rotate_vector([1.0, 0.0, 0.0]);
        assert_relative_eq!(v[0], 0.0, epsilon = EPSILON);
        assert_relative_eq!(v[1], 0.0, epsilon = EPSILON);
        assert_relative_eq!(v[2], -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Quaternion::new(1, -2, 3, 4).to_string(),
            "Quaternion(1, -2, 3, 4)"
        );
        assert_eq!(
            Quaternion::new(0.5, 0.0, 1.5, 1.0).to_string(),
            "Quaternion(0.5, 0, 1.5, 1)"
        );
    }
}
