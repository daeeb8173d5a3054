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

//! Tolerance settings shared by the comparison and interpolation routines.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// A collection of tolerances that control approximate comparisons.
///
/// Every field falls back to its default when missing from a deserialized
/// configuration, so a partial table such as `{ "normalization": 1e-6 }` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Scalar + Deserialize<'de>"))]
pub struct Tolerances<T> {
    /// Maximum allowed `|squared_norm - 1|` for a quaternion to count as normalized.
    pub normalization: T,
    /// Maximum allowed per-component difference for approximate equality.
    pub equality: T,
    /// Slerp falls back to normalized lerp once `1 - |cos θ|` drops to this value.
    pub slerp_parallel: T,
}

impl<T: Scalar> Default for Tolerances<T> {
    fn default() -> Self {
        Self {
            normalization: T::DEFAULT_TOLERANCE,
            equality: T::MACHINE_EPSILON,
            slerp_parallel: T::DEFAULT_TOLERANCE,
        }
    }
}

impl<T: Scalar> Tolerances<T> {
    /// Uses the same tolerance for every check.
    pub fn uniform(tolerance: T) -> Self {
        Self {
            normalization: tolerance,
            equality: tolerance,
            slerp_parallel: tolerance,
        }
    }

    /// Returns a copy with a different normalization tolerance.
    pub fn with_normalization(mut self, tolerance: T) -> Self {
        self.normalization = tolerance;
        self
    }

    /// Returns a copy with a different approximate-equality tolerance.
    pub fn with_equality(mut self, tolerance: T) -> Self {
        self.equality = tolerance;
        self
    }

    /// Returns a copy with a different slerp parallel threshold.
    pub fn with_slerp_parallel(mut self, tolerance: T) -> Self {
        self.slerp_parallel = tolerance;
        self
    }
}
