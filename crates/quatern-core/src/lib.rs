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

//! # Quatern Core
//!
//! A generic quaternion value type for representing 3D rotations.
//!
//! [`Quaternion<T>`] is parameterized over any [`Scalar`] (signed integers and
//! floats). Operators accept operands of different scalar types and return a
//! quaternion over their common type, as resolved by [`Promote`]. Operations that
//! need square roots or trigonometry require a [`RealScalar`].
//!
//! ```
//! use quatern_core::{slerp, Quaternion};
//!
//! let quarter_turn = Quaternion::from_axis_angle([0.0f64, 0.0, 1.0], std::f64::consts::FRAC_PI_2);
//! let v = quarter_turn.rotate_vector([1.0, 0.0, 0.0]);
//! assert!((v[1] - 1.0).abs() < 1e-12);
//!
//! let halfway = slerp(Quaternion::IDENTITY, quarter_turn, 0.5)?;
//! assert!(halfway.is_normalized());
//! # Ok::<(), quatern_core::QuaternionError>(())
//! ```

#![warn(missing_docs)]

pub mod angle_axis;
pub mod compare;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod matrix;
mod ops;
pub mod quaternion;
pub mod scalar;

pub use angle_axis::AngleAxis;
pub use compare::{angle_between, approx_eq, approx_eq_with, approx_eq_within, dot};
pub use config::Tolerances;
pub use error::{QuaternionError, QuaternionResult};
pub use interpolation::{lerp, slerp, slerp_with};
pub use matrix::Matrix3x3;
pub use quaternion::Quaternion;
pub use scalar::{Promote, RealScalar, Scalar};
