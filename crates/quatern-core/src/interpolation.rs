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

//! Interpolation between orientations.

use crate::config::Tolerances;
use crate::error::{QuaternionError, QuaternionResult};
use crate::quaternion::Quaternion;
use crate::scalar::RealScalar;

fn check_time<T: RealScalar>(t: T) -> QuaternionResult<()> {
    if (T::ZERO..=T::ONE).contains(&t) {
        Ok(())
    } else {
        Err(QuaternionError::interpolation_time(t))
    }
}

/// Normalized linear interpolation, `normalize((1 - t) * start + t * end)`.
///
/// # Errors
///
/// Returns [`QuaternionError::InvalidInterpolationTime`] if `t` is outside `[0, 1]`
/// (including `NaN`), and [`QuaternionError::DivisionByZero`] if the blend is the
/// zero quaternion.
pub fn lerp<T: RealScalar>(
    start: Quaternion<T>,
    end: Quaternion<T>,
    t: T,
) -> QuaternionResult<Quaternion<T>> {
    check_time(t)?;
    let blend = start.scale(T::ONE - t) + end.scale(t);
    blend.normalize()
}

/// Spherical linear interpolation along the shortest arc, with default tolerances.
///
/// # Examples
///
/// ```
/// use quatern_core::{slerp, Quaternion};
/// let a = Quaternion::new(1.0f64, 0.0, 0.0, 0.0);
/// let b = Quaternion::new(0.0f64, 1.0, 0.0, 0.0);
/// let mid = slerp(a, b, 0.5).unwrap();
/// assert!((mid.x - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((mid.y - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[inline]
pub fn slerp<T: RealScalar>(
    start: Quaternion<T>,
    end: Quaternion<T>,
    t: T,
) -> QuaternionResult<Quaternion<T>> {
    slerp_with(start, end, t, &Tolerances::default())
}

/// Spherical linear interpolation with an explicit parallel threshold.
///
/// When the inputs are within `tolerances.slerp_parallel` of pointing the same way,
/// `sin θ` is too small to divide by and the result falls back to [`lerp`].
///
/// # Errors
///
/// Returns [`QuaternionError::InvalidInterpolationTime`] if `t` is outside `[0, 1]`.
pub fn slerp_with<T: RealScalar>(
    start: Quaternion<T>,
    end: Quaternion<T>,
    t: T,
    tolerances: &Tolerances<T>,
) -> QuaternionResult<Quaternion<T>> {
    check_time(t)?;

    let mut cos_theta = start.dot(end);
    let mut end_adjusted = end;

    // Negating one input keeps the path on the shorter arc.
    if cos_theta < T::ZERO {
        cos_theta = -cos_theta;
        end_adjusted = -end;
    }

    if cos_theta >= T::ONE - tolerances.slerp_parallel {
        log::trace!("slerp: inputs nearly parallel (cos = {cos_theta}), using lerp");
        return lerp(start, end_adjusted, t);
    }

    let angle = cos_theta.acos();
    let sin_theta = angle.sin();
    let scale_start = ((T::ONE - t) * angle).sin() / sin_theta;
    let scale_end = (t * angle).sin() / sin_theta;
    Ok(start.scale(scale_start) + end_adjusted.scale(scale_end))
}
