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

use std::any::TypeId;

use approx::assert_relative_eq;
use quatern_core::{approx_eq, Quaternion, QuaternionError};

const EPSILON: f64 = 1e-12;

fn type_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

#[test]
fn test_hamilton_basis_identities() {
    let one = Quaternion::<i32>::IDENTITY;
    let (i, j, k) = (Quaternion::<i32>::I, Quaternion::<i32>::J, Quaternion::<i32>::K);

    assert_eq!(i * i, -one);
    assert_eq!(j * j, -one);
    assert_eq!(k * k, -one);
    assert_eq!(i * j * k, -one);

    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * j, -i);
    assert_eq!(k * i, j);
    assert_eq!(i * k, -j);
}

#[test]
fn test_identity_is_neutral() {
    let q = Quaternion::new(0.3f64, -1.2, 2.5, 0.7);
    let one = Quaternion::<f64>::IDENTITY;
    assert_eq!(q * one, q);
    assert_eq!(one * q, q);
    assert_eq!(q * Quaternion::<f64>::default(), q);
}

#[test]
fn test_normalized_times_inverse_is_identity() {
    let q = Quaternion::new(1.0f64, 0.0, 0.0, 2.0).normalize().unwrap();
    assert!(q.is_normalized());
    assert_relative_eq!(q.squared_norm(), 1.0, epsilon = EPSILON);

    let product = q * q.inverse().unwrap();
    assert_relative_eq!(product, Quaternion::<f64>::IDENTITY, epsilon = EPSILON);
    let product = q.inverse().unwrap() * q;
    assert_relative_eq!(product, Quaternion::<f64>::IDENTITY, epsilon = EPSILON);
}

#[test]
fn test_non_unit_inverse() {
    let q = Quaternion::new(2.0f32, -1.0, 0.5, 3.0);
    let product = q * q.inverse().unwrap();
    assert_relative_eq!(product, Quaternion::<f32>::IDENTITY, epsilon = 1e-6);
}

#[test]
fn test_double_conjugate_is_identity() {
    let q = Quaternion::new(7i64, -3, 2, 9);
    assert_eq!(q.conjugate().conjugate(), q);
}

#[test]
fn test_conjugate_reverses_products() {
    let a = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-0.5f64, 0.25, 2.0, 1.0);
    assert_relative_eq!((a * b).conjugate(), b.conjugate() * a.conjugate(), epsilon = EPSILON);
}

#[test]
fn test_division_by_zero() {
    let q = Quaternion::new(1.0f64, 2.0, 3.0, 4.0);
    assert_eq!(q / 0.0f64, Err(QuaternionError::DivisionByZero));
    assert_eq!(q / 0i8, Err(QuaternionError::DivisionByZero));
    assert_eq!(
        Quaternion::<f64>::ZERO.normalize(),
        Err(QuaternionError::DivisionByZero)
    );
    assert_eq!(
        Quaternion::<f32>::ZERO.inverse(),
        Err(QuaternionError::DivisionByZero)
    );
}

#[test]
fn test_mixed_types_yield_common_type() {
    let qi = Quaternion::new(1i32, 2, 3, 4);
    let qf = Quaternion::new(0.5f32, 0.5, 0.5, 0.5);
    let qd = Quaternion::new(0.25f64, 0.0, 0.0, 0.0);
    let q8 = Quaternion::new(1i8, 1, 1, 1);
    let q64 = Quaternion::new(10i64, 0, 0, 0);

    assert_eq!(type_of(&(qi + qf)), TypeId::of::<Quaternion<f32>>());
    assert_eq!(type_of(&(qf * qd)), TypeId::of::<Quaternion<f64>>());
    assert_eq!(type_of(&(qi - qd)), TypeId::of::<Quaternion<f64>>());
    assert_eq!(type_of(&(q8 * q64)), TypeId::of::<Quaternion<i64>>());
    assert_eq!(type_of(&(q64 + qf)), TypeId::of::<Quaternion<f32>>());
    assert_eq!(type_of(&(q8 * 2i16)), TypeId::of::<Quaternion<i16>>());
    assert_eq!(type_of(&(0.5f64 * qi)), TypeId::of::<Quaternion<f64>>());

    assert_eq!(qi + qf, [1.5, 2.5, 3.5, 4.5]);
    assert_eq!(q8 + q64, [11, 1, 1, 1]);
    assert!(approx_eq(qi * 0.1f64, Quaternion::new(0.1f64, 0.2, 0.3, 0.4)));
}

#[test]
fn test_integer_receiver_truncates() {
    let mut q = Quaternion::new(4i32, 3, 5, 7);
    q += Quaternion::new(5.2f64, 23.6, 2.8, 5.4);
    assert_eq!(q, Quaternion::new(9, 26, 7, 12));

    q *= Quaternion::new(0.9f32, 0.0, 0.0, 1.9);
    assert_eq!(q, Quaternion::new(9, 26, 7, 12));
}

#[test]
fn test_rotation_composition() {
    let h = std::f64::consts::FRAC_1_SQRT_2;
    // Two quarter turns about Z make a half turn.
    let quarter = Quaternion::new(0.0f64, 0.0, h, h);
    let half = quarter * quarter;
    let v = half.rotate_vector([1.0, 0.0, 0.0]);
    assert_relative_eq!(v[0], -1.0, epsilon = EPSILON);
    assert_relative_eq!(v[1], 0.0, epsilon = EPSILON);
}
