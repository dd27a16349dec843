//! US customary conversions for the output convenience block.
//!
//! The engine computes in metric only; yards and mph exist solely as a
//! derived display block and are never accepted on input.

use nalgebra::Vector3;

use crate::constants::{METERS_TO_YARDS, MPS_TO_MPH};
use crate::shot::{UsCustomaryUnits, Vec3Out};

pub fn meters_to_yards(meters: f64) -> f64 {
    meters * METERS_TO_YARDS
}

pub fn mps_to_mph(meters_per_second: f64) -> f64 {
    meters_per_second * MPS_TO_MPH
}

pub fn vec3_out(v: &Vector3<f64>) -> Vec3Out {
    Vec3Out {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Assemble the `us_customary_units` block from metric results.
pub fn us_customary(
    ball_speed_mps: f64,
    club_speed_mps: f64,
    carry_m: f64,
    total_m: f64,
    offline_m: f64,
    peak_height_m: f64,
    landing_position_m: &Vector3<f64>,
    landing_velocity_mps: &Vector3<f64>,
) -> UsCustomaryUnits {
    UsCustomaryUnits {
        ball_speed_mph: mps_to_mph(ball_speed_mps),
        club_speed_mph: mps_to_mph(club_speed_mps),
        carry_distance_yards: meters_to_yards(carry_m),
        total_distance_yards: meters_to_yards(total_m),
        offline_distance_yards: meters_to_yards(offline_m),
        peak_height_yards: meters_to_yards(peak_height_m),
        landing_position_yards: vec3_out(landing_position_m).scaled(METERS_TO_YARDS),
        landing_velocity_mph: vec3_out(landing_velocity_mps).scaled(MPS_TO_MPH),
    }
}
