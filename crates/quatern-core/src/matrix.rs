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

//! Provides a 3x3 row-major matrix used as a rotation matrix.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::error::{QuaternionError, QuaternionResult};
use crate::quaternion::Quaternion;
use crate::scalar::{two, RealScalar, Scalar};

/// A 3x3 matrix stored in row-major order, `rows[row][col]`.
///
/// Rotation matrices act on column vectors, `v' = M * v`. No orthonormality check is
/// performed on construction or conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3<T> {
    /// The rows of the matrix.
    pub rows: [[T; 3]; 3],
}

impl<T: Scalar> Matrix3x3<T> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);

    /// A matrix with all elements set to zero.
    pub const ZERO: Self = Self::from_rows([[T::ZERO; 3]; 3]);

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::IndexOutOfRange`] if either index is 3 or more.
    pub fn get(&self, row: usize, col: usize) -> QuaternionResult<T> {
        if row >= 3 {
            return Err(QuaternionError::index_out_of_range(row, 3));
        }
        if col >= 3 {
            return Err(QuaternionError::index_out_of_range(col, 3));
        }
        Ok(self.rows[row][col])
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> T {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// Multiplies the column vector `v` by this matrix.
    #[inline]
    pub fn transform(&self, v: [T; 3]) -> [T; 3] {
        self.rows
            .map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
    }
}

impl<T: RealScalar> Matrix3x3<T> {
    /// Creates a rotation of `angle` radians around the X axis.
    pub fn from_rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, c, -s],
            [T::ZERO, s, c],
        ])
    }

    /// Creates a rotation of `angle` radians around the Y axis.
    pub fn from_rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, T::ZERO, s],
            [T::ZERO, T::ONE, T::ZERO],
            [-s, T::ZERO, c],
        ])
    }

    /// Creates a rotation of `angle` radians around the Z axis.
    pub fn from_rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, T::ZERO],
            [s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }
}

impl<T: Scalar> Default for Matrix3x3<T> {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> Mul for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut rows = [[T::ZERO; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).fold(T::ZERO, |acc, k| acc + self.rows[i][k] * rhs.rows[k][j]);
            }
        }
        Self { rows }
    }
}

impl<T: Scalar> Mul<[T; 3]> for Matrix3x3<T> {
    type Output = [T; 3];

    #[inline]
    fn mul(self, v: [T; 3]) -> Self::Output {
        self.transform(v)
    }
}

impl<T: RealScalar> From<Matrix3x3<T>> for Quaternion<T> {
    /// Extracts the rotation from a rotation matrix.
    ///
    /// Uses the trace when it is positive, otherwise the largest diagonal element, so
    /// the square root argument stays well away from zero. The input must be a valid
    /// rotation matrix; the result is not normalized.
    fn from(m: Matrix3x3<T>) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.rows;
        let two: T = two();
        let four = two * two;

        let trace = m00 + m11 + m22;
        if trace > T::ZERO {
            let s = two * (trace + T::ONE).sqrt();
            Quaternion::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, s / four)
        } else if m00 > m11 && m00 > m22 {
            let s = two * (T::ONE + m00 - m11 - m22).sqrt();
            Quaternion::new(s / four, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = two * (T::ONE + m11 - m00 - m22).sqrt();
            Quaternion::new((m01 + m10) / s, s / four, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = two * (T::ONE + m22 - m00 - m11).sqrt();
            Quaternion::new((m02 + m20) / s, (m12 + m21) / s, s / four, (m10 - m01) / s)
        }
    }
}

impl<T: RealScalar> Quaternion<T> {
    /// Creates a quaternion from a 3x3 rotation matrix.
    #[inline]
    pub fn from_rotation_matrix(m: &Matrix3x3<T>) -> Self {
        Self::from(*m)
    }

    /// Converts this (unit) quaternion into a rotation matrix.
    pub fn to_rotation_matrix(&self) -> Matrix3x3<T> {
        let Quaternion { x, y, z, w } = *self;
        let two: T = two();
        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        Matrix3x3::from_rows([
            [T::ONE - two * (y2 + z2), two * (xy - zw), two * (xz + yw)],
            [two * (xy + zw), T::ONE - two * (x2 + z2), two * (yz - xw)],
            [two * (xz - yw), two * (yz + xw), T::ONE - two * (x2 + y2)],
        ])
    }
}
