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

//! Walks through rotation composition, interpolation and conversions.
//!
//! Usage: `sandbox [tolerances.json]`. The optional file overrides the default
//! `Tolerances<f64>`; missing fields keep their defaults.

use std::f64::consts::FRAC_PI_2;
use std::fs;

use anyhow::{Context, Result};
use quatern_core::{
    angle_between, approx_eq_with, slerp_with, AngleAxis, Matrix3x3, Quaternion, Tolerances,
};

const SLERP_STEPS: u32 = 4;

fn load_tolerances() -> Result<Tolerances<f64>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read tolerances from {path}"))?;
            let tolerances = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse tolerances in {path}"))?;
            log::info!("Loaded tolerances from {path}");
            Ok(tolerances)
        }
        None => Ok(Tolerances::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let tolerances = load_tolerances()?;
    log::debug!("Using {tolerances:?}");

    // Yaw a quarter turn, then pitch a quarter turn.
    let yaw = Quaternion::from(AngleAxis::from_axis([0.0, 1.0, 0.0], FRAC_PI_2));
    let pitch = Quaternion::from(AngleAxis::from_axis([1.0, 0.0, 0.0], FRAC_PI_2));
    let combined = (yaw * pitch).normalize()?;
    log::info!("yaw * pitch = {combined}");

    let forward = [0.0, 0.0, -1.0];
    let [x, y, z] = combined.rotate_vector(forward);
    log::info!("forward {forward:?} -> [{x:.3}, {y:.3}, {z:.3}]");

    let aa = combined.to_angle_axis()?;
    log::info!(
        "as angle-axis: {:.3} rad about [{:.3}, {:.3}, {:.3}]",
        aa.angle,
        aa.x,
        aa.y,
        aa.z
    );

    let matrix = combined.to_rotation_matrix();
    let recovered = Quaternion::from(matrix);
    log::info!(
        "matrix round trip = {recovered} (matches: {}, unit: {})",
        approx_eq_with(recovered, combined, &tolerances),
        recovered.is_normalized_with(&tolerances)
    );
    let [mx, my, mz] = matrix * forward;
    log::info!("matrix * forward = [{mx:.3}, {my:.3}, {mz:.3}]");

    let half_turn = Quaternion::from(Matrix3x3::from_rotation_z(std::f64::consts::PI));
    log::info!(
        "angle between identity and a half turn: {:.3} rad",
        angle_between(Quaternion::<f64>::IDENTITY, half_turn)?
    );

    for step in 0..=SLERP_STEPS {
        let t = f64::from(step) / f64::from(SLERP_STEPS);
        let q = slerp_with(Quaternion::IDENTITY, combined, t, &tolerances)?;
        log::info!("slerp t = {t:.2}: {q}");
    }

    // Integer components promote to the float type of the other operand.
    let lattice = Quaternion::new(1i32, 0, 0, 1);
    let scaled = lattice * 0.5f32;
    log::info!("{lattice} * 0.5 = {scaled}");

    Ok(())
}
