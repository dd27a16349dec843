//! Ball flight estimation.
//!
//! Fixed-step integration of the launch state under gravity, quadratic drag
//! and Magnus lift. The model is deliberately simple (sea-level air, a single
//! drag coefficient, lift linear in spin ratio with a saturation cap, and
//! exponential in-flight spin decay) but it is deterministic, continuous
//! in its inputs, and reproduces the qualitative shape of measured golf shots:
//! carry grows with ball speed, peaks at an interior launch angle, and gains
//! from backspin; lateral drift follows the sign of horizontal launch angle
//! and sidespin.
//!
//! Axes: x lateral (positive = the side of positive sidespin), y up,
//! z down-range along the target line.

use nalgebra::Vector3;

use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, BALL_CROSS_SECTION_M2, BALL_MASS_KG, BALL_RADIUS_M, DRAG_COEFFICIENT,
    G_ACCEL_MPS2, LIFT_COEFFICIENT_CAP, MAGNUS_LIFT_SLOPE, MAX_FLIGHT_TIME_S,
    MIN_VELOCITY_THRESHOLD, ROLL_SPIN_REFERENCE_RPM, ROLL_VELOCITY_SECONDS, RPM_TO_RAD_PER_S,
    SPIN_DECAY_RATE_PER_S, TEE_HEIGHT_M, TIME_STEP_S,
};
use crate::normalize::NormalizedShot;
use crate::spin::SpinComponents;

/// Everything the integrator reports about one simulated flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightOutcome {
    /// Horizontal distance from launch to first ground contact (m), >= 0.
    pub carry_distance_m: f64,
    /// Carry plus estimated roll on a standard fairway (m).
    pub total_distance_m: f64,
    /// Lateral displacement at landing (m), signed.
    pub offline_distance_m: f64,
    /// Apex height above the ground plane (m).
    pub peak_height_m: f64,
    /// Time airborne (s).
    pub flight_time_s: f64,
    /// Angle below horizontal of the landing velocity (degrees).
    pub descent_angle_degrees: f64,
    /// Landing point (m), y == 0.
    pub landing_position_m: Vector3<f64>,
    /// Velocity at ground contact (m/s).
    pub landing_velocity_mps: Vector3<f64>,
}

impl FlightOutcome {
    fn grounded() -> Self {
        FlightOutcome {
            carry_distance_m: 0.0,
            total_distance_m: 0.0,
            offline_distance_m: 0.0,
            peak_height_m: 0.0,
            flight_time_s: 0.0,
            descent_angle_degrees: 0.0,
            landing_position_m: Vector3::zeros(),
            landing_velocity_mps: Vector3::zeros(),
        }
    }
}

/// Integrate the flight of one shot and derive its distance metrics.
pub fn simulate(shot: &NormalizedShot, spin: &SpinComponents) -> FlightOutcome {
    if shot.ball_speed <= MIN_VELOCITY_THRESHOLD {
        return FlightOutcome::grounded();
    }

    let vla = shot.vertical_launch_angle.to_radians();
    let hla = shot.horizontal_launch_angle.to_radians();
    let horizontal_speed = shot.ball_speed * vla.cos();

    let mut position = Vector3::new(0.0, TEE_HEIGHT_M, 0.0);
    let mut velocity = Vector3::new(
        horizontal_speed * hla.sin(),
        shot.ball_speed * vla.sin(),
        horizontal_speed * hla.cos(),
    );

    // Spin vector at launch (rad/s). Backspin points along -x so that
    // omega x v lifts a down-range ball; positive sidespin points along +y
    // and drifts it toward +x.
    let launch_spin = Vector3::new(
        -spin.backspin_rpm * RPM_TO_RAD_PER_S,
        spin.sidespin_rpm * RPM_TO_RAD_PER_S,
        0.0,
    );

    let area_over_mass = BALL_CROSS_SECTION_M2 / BALL_MASS_KG;

    let mut time = 0.0;
    let mut peak_height = position.y;
    let mut prev_position = position;
    let mut prev_velocity = velocity;
    let mut prev_time = time;

    while time < MAX_FLIGHT_TIME_S {
        let speed = velocity.magnitude();
        let mut accel = Vector3::new(0.0, -G_ACCEL_MPS2, 0.0);

        if speed > MIN_VELOCITY_THRESHOLD {
            // Dynamic pressure per unit mass, folded with |v| so that
            // accel = q_factor * C * v gives the usual 1/2 rho A/m C v² form.
            let q_factor = 0.5 * AIR_DENSITY_SEA_LEVEL * area_over_mass * speed;

            accel -= velocity * (q_factor * DRAG_COEFFICIENT);

            let omega = launch_spin * (-SPIN_DECAY_RATE_PER_S * time).exp();
            let omega_mag = omega.magnitude();
            if omega_mag > 0.0 {
                let spin_ratio = omega_mag * BALL_RADIUS_M / speed;
                let lift_coefficient =
                    (MAGNUS_LIFT_SLOPE * spin_ratio).min(LIFT_COEFFICIENT_CAP);
                // Unit-capped lift direction: |omega x v| / (|omega||v|) <= 1.
                let lift_direction = omega.cross(&velocity) / (omega_mag * speed);
                accel += lift_direction * (q_factor * speed * lift_coefficient);
            }
        }

        prev_position = position;
        prev_velocity = velocity;
        prev_time = time;

        velocity += accel * TIME_STEP_S;
        position += velocity * TIME_STEP_S;
        time += TIME_STEP_S;

        if position.y > peak_height {
            peak_height = position.y;
        }

        if position.y <= 0.0 && velocity.y < 0.0 {
            break;
        }
    }

    // Interpolate the exact ground crossing between the last two states.
    let (landing_position, landing_velocity, flight_time) = if position.y <= 0.0
        && prev_position.y > position.y
    {
        let fraction = prev_position.y / (prev_position.y - position.y);
        let mut land_pos = prev_position + (position - prev_position) * fraction;
        land_pos.y = 0.0;
        let land_vel = prev_velocity + (velocity - prev_velocity) * fraction;
        let land_time = prev_time + (time - prev_time) * fraction;
        (land_pos, land_vel, land_time)
    } else {
        // Timed out without landing; report the final state as-is.
        (position, velocity, time)
    };

    let carry = landing_position.x.hypot(landing_position.z);
    let landing_horizontal_speed = landing_velocity.x.hypot(landing_velocity.z);
    let descent_angle = (-landing_velocity.y)
        .atan2(landing_horizontal_speed.max(MIN_VELOCITY_THRESHOLD))
        .to_degrees();

    let roll = estimate_roll(landing_horizontal_speed, descent_angle, spin.backspin_rpm);

    FlightOutcome {
        carry_distance_m: carry,
        total_distance_m: carry + roll,
        offline_distance_m: landing_position.x,
        peak_height_m: peak_height,
        flight_time_s: flight_time,
        descent_angle_degrees: descent_angle,
        landing_position_m: landing_position,
        landing_velocity_mps: landing_velocity,
    }
}

/// Empirical roll-out on a standard fairway.
///
/// Roll scales with the horizontal landing speed and shrinks both with
/// backspin (check-up) and with descent steepness (a drop-and-stop wedge
/// versus a flat-landing drive).
fn estimate_roll(landing_horizontal_speed: f64, descent_angle_degrees: f64, backspin_rpm: f64) -> f64 {
    let spin_factor = ROLL_SPIN_REFERENCE_RPM / (ROLL_SPIN_REFERENCE_RPM + backspin_rpm.max(0.0));
    let descent_factor = (1.0 - descent_angle_degrees / 90.0).clamp(0.0, 1.0);
    landing_horizontal_speed * ROLL_VELOCITY_SECONDS * spin_factor * descent_factor
}
