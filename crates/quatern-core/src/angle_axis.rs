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

//! Angle-axis rotation representation.

use serde::{Deserialize, Serialize};

use crate::error::QuaternionResult;
use crate::quaternion::Quaternion;
use crate::scalar::{two, RealScalar, Scalar};

/// A rotation of `angle` radians about the axis `(x, y, z)`.
///
/// The axis is stored as given and is not required to be normalized. A non-unit axis
/// produces a non-unit quaternion on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleAxis<T> {
    /// The rotation angle in radians.
    pub angle: T,
    /// The x component of the rotation axis.
    pub x: T,
    /// The y component of the rotation axis.
    pub y: T,
    /// The z component of the rotation axis.
    pub z: T,
}

impl<T: Scalar> AngleAxis<T> {
    /// Creates an angle-axis rotation from its four components.
    #[inline]
    pub const fn new(angle: T, x: T, y: T, z: T) -> Self {
        Self { angle, x, y, z }
    }

    /// Creates an angle-axis rotation from an axis vector and an angle in radians.
    #[inline]
    pub fn from_axis([x, y, z]: [T; 3], angle: T) -> Self {
        Self::new(angle, x, y, z)
    }

    /// The rotation axis as a vector.
    #[inline]
    pub fn axis(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: RealScalar> From<AngleAxis<T>> for Quaternion<T> {
    /// Builds `(sin(angle/2) * axis, cos(angle/2))` without normalizing the axis.
    fn from(aa: AngleAxis<T>) -> Self {
        let half_angle = aa.angle / two::<T>();
        let (s, c) = half_angle.sin_cos();
        Quaternion::new(aa.x * s, aa.y * s, aa.z * s, c)
    }
}

impl<T: RealScalar> Quaternion<T> {
    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// The axis is used as given; pass a unit vector to get a unit quaternion.
    #[inline]
    pub fn from_axis_angle(axis: [T; 3], angle: T) -> Self {
        AngleAxis::from_axis(axis, angle).into()
    }

    /// Extracts the rotation angle and a unit axis.
    ///
    /// Non-unit quaternions are normalized first. A rotation with no vector part has no
    /// defined axis and is reported as angle 0 about +X.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::DivisionByZero`](crate::QuaternionError::DivisionByZero)
    /// for the zero quaternion.
    pub fn to_angle_axis(&self) -> QuaternionResult<AngleAxis<T>> {
        let q = self.normalize()?;
        let [x, y, z] = q.vector_part();
        let sin_half = (x * x + y * y + z * z).sqrt();
        if sin_half <= T::MACHINE_EPSILON {
            return Ok(AngleAxis::new(T::ZERO, T::ONE, T::ZERO, T::ZERO));
        }
        let angle = two::<T>() * sin_half.atan2(q.w);
        Ok(AngleAxis::new(angle, x / sin_half, y / sin_half, z / sin_half))
    }
}
