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

//! Error types for quaternion operations that accept run-time input.
//!
//! Arithmetic between quaternions and type conversions are checked at compile time
//! and never fail. Operations whose validity depends on a value only known at run
//! time (a divisor, an interpolation parameter, a slice length, a component index)
//! return [`QuaternionResult`] instead of producing `NaN` or panicking.

use thiserror::Error;

use crate::scalar::Scalar;

/// Errors produced by fallible quaternion operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuaternionError {
    /// A division by a zero scalar, or by the norm of a zero quaternion.
    #[error("division by zero")]
    DivisionByZero,
    /// Construction from a list that does not hold 3 or 4 components.
    #[error("a quaternion needs 3 or 4 components, got {len}")]
    InvalidQuaternionSize {
        /// The number of components that was supplied.
        len: usize,
    },
    /// An interpolation parameter outside `[0, 1]`.
    #[error("interpolation time {t} is outside [0, 1]")]
    InvalidInterpolationTime {
        /// The rejected parameter, widened to `f64`.
        t: f64,
    },
    /// Component access with an index past the end.
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of addressable components.
        len: usize,
    },
}

/// A specialized `Result` type for quaternion operations.
pub type QuaternionResult<T> = Result<T, QuaternionError>;

impl QuaternionError {
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        log::debug!("{operation}: rejected division by zero");
        Self::DivisionByZero
    }

    pub(crate) fn invalid_size(len: usize) -> Self {
        log::debug!("rejected quaternion construction from {len} components");
        Self::InvalidQuaternionSize { len }
    }

    pub(crate) fn interpolation_time<T: Scalar>(t: T) -> Self {
        log::debug!("rejected interpolation time {t}");
        Self::InvalidInterpolationTime {
            t: t.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        log::debug!("rejected component index {index} (len {len})");
        Self::IndexOutOfRange { index, len }
    }
}
