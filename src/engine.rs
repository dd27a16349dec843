//! Calculation pipeline: normalize → decompose → estimate → assemble.
//!
//! One pure, synchronous pass per call. No component keeps state between
//! invocations, so any number of calls may run concurrently.

use crate::classify;
use crate::club;
use crate::error::CoachError;
use crate::flight;
use crate::normalize;
use crate::shot::{DerivedValues, ShotInput, ShotResult};
use crate::spin;
use crate::units;

/// Compute every derivable value for one shot.
///
/// Validation failures abort before any derived computation runs; on success
/// the returned record echoes the supplied fields unchanged and carries the
/// full derived block.
pub fn calculate_shot(input: &ShotInput) -> Result<ShotResult, CoachError> {
    let normalized = normalize::normalize(input)?;
    let spin = spin::decompose(normalized.spin);
    let outcome = flight::simulate(&normalized, &spin);
    let clubs = club::estimate(&normalized, &spin);
    let label = classify::classify(&normalized, &spin, &outcome);

    let derived = DerivedValues {
        carry_distance_meters: outcome.carry_distance_m,
        total_distance_meters: outcome.total_distance_m,
        offline_distance_meters: outcome.offline_distance_m,
        peak_height_meters: outcome.peak_height_m,
        flight_time_seconds: outcome.flight_time_s,
        descent_angle_degrees: outcome.descent_angle_degrees,
        landing_position_meters: units::vec3_out(&outcome.landing_position_m),
        landing_velocity_meters_per_second: units::vec3_out(&outcome.landing_velocity_mps),

        total_spin_rpm: spin.total_rpm,
        spin_axis_degrees: spin.axis_degrees,
        backspin_rpm: spin.backspin_rpm,
        sidespin_rpm: spin.sidespin_rpm,

        club_speed_meters_per_second: clubs.club_speed_mps,
        smash_factor: clubs.smash_factor,
        club_path_degrees: clubs.path_degrees,
        club_face_to_target_degrees: clubs.face_to_target_degrees,
        club_face_to_path_degrees: clubs.face_to_path_degrees,

        shot_name: label.name,
        shot_rank: label.rank.to_string(),
        shot_color_rgb: label.color_rgb.to_string(),

        us_customary_units: units::us_customary(
            normalized.ball_speed,
            clubs.club_speed_mps,
            outcome.carry_distance_m,
            outcome.total_distance_m,
            outcome.offline_distance_m,
            outcome.peak_height_m,
            &outcome.landing_position_m,
            &outcome.landing_velocity_mps,
        ),
    };

    Ok(ShotResult {
        input: input.clone(),
        open_golf_coach: derived,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_input() -> ShotInput {
        ShotInput {
            ball_speed_meters_per_second: Some(70.0),
            vertical_launch_angle_degrees: Some(12.5),
            horizontal_launch_angle_degrees: Some(-2.0),
            total_spin_rpm: Some(2800.0),
            spin_axis_degrees: Some(15.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_fields_are_echoed_unchanged() {
        let input = driver_input();
        let result = calculate_shot(&input).unwrap();
        assert_eq!(result.input, input);
    }

    #[test]
    fn test_spin_components_filled_from_magnitude_axis() {
        let result = calculate_shot(&driver_input()).unwrap();
        let derived = &result.open_golf_coach;
        assert!((derived.backspin_rpm - 2704.63).abs() < 0.01);
        assert!((derived.sidespin_rpm - 724.78).abs() < 0.01);
        assert_eq!(derived.total_spin_rpm, 2800.0);
        assert_eq!(derived.spin_axis_degrees, 15.0);
    }

    #[test]
    fn test_conflict_precedence_magnitude_axis_wins() {
        let mut input = driver_input();
        input.backspin_rpm = Some(100.0);
        input.sidespin_rpm = Some(100.0);
        let result = calculate_shot(&input).unwrap();
        let derived = &result.open_golf_coach;
        // The orthogonal pair is recomputed from magnitude/axis, not echoed
        // into the derived block.
        assert!((derived.backspin_rpm - 2704.63).abs() < 0.01);
        assert!((derived.sidespin_rpm - 724.78).abs() < 0.01);
        // The supplied values still appear in the top-level echo.
        assert_eq!(result.input.backspin_rpm, Some(100.0));
    }

    #[test]
    fn test_idempotence() {
        let first = calculate_shot(&driver_input()).unwrap();
        let refeed = ShotInput::from(&first);
        let second = calculate_shot(&refeed).unwrap();
        assert_eq!(first.open_golf_coach, second.open_golf_coach);
    }

    #[test]
    fn test_idempotence_from_component_input() {
        let input = ShotInput {
            ball_speed_meters_per_second: Some(65.0),
            vertical_launch_angle_degrees: Some(14.0),
            horizontal_launch_angle_degrees: Some(1.5),
            backspin_rpm: Some(3500.0),
            sidespin_rpm: Some(-800.0),
            ..Default::default()
        };
        let first = calculate_shot(&input).unwrap();
        let second = calculate_shot(&ShotInput::from(&first)).unwrap();
        let a = &first.open_golf_coach;
        let b = &second.open_golf_coach;
        // The refeed goes through the magnitude/axis path, so the orthogonal
        // pair is recomputed; everything agrees to floating-point tolerance.
        assert!((a.carry_distance_meters - b.carry_distance_meters).abs() < 1e-6);
        assert!((a.offline_distance_meters - b.offline_distance_meters).abs() < 1e-6);
        assert!((a.backspin_rpm - b.backspin_rpm).abs() < 1e-6);
        assert!((a.sidespin_rpm - b.sidespin_rpm).abs() < 1e-6);
        assert_eq!(a.total_spin_rpm, b.total_spin_rpm);
        assert_eq!(a.spin_axis_degrees, b.spin_axis_degrees);
    }

    #[test]
    fn test_minimal_input_fills_everything() {
        let input = ShotInput {
            ball_speed_meters_per_second: Some(75.0),
            vertical_launch_angle_degrees: Some(11.0),
            ..Default::default()
        };
        let result = calculate_shot(&input).unwrap();
        let derived = &result.open_golf_coach;
        assert!(derived.carry_distance_meters > 0.0);
        assert_eq!(derived.offline_distance_meters, 0.0);
        assert_eq!(derived.total_spin_rpm, 0.0);
        assert_eq!(derived.spin_axis_degrees, 0.0);
        assert_eq!(derived.shot_name, "Straight");
        assert!(derived.us_customary_units.ball_speed_mph > 0.0);
    }

    #[test]
    fn test_validation_failures_propagate() {
        let input = ShotInput {
            ball_speed_meters_per_second: Some(70.0),
            ..Default::default()
        };
        assert!(matches!(
            calculate_shot(&input),
            Err(CoachError::MissingRequiredField(_))
        ));
    }

    #[test]
    fn test_carry_is_never_negative() {
        for &(speed, vla) in &[(0.0, 12.0), (10.0, -30.0), (70.0, 0.0), (90.0, 45.0)] {
            let input = ShotInput {
                ball_speed_meters_per_second: Some(speed),
                vertical_launch_angle_degrees: Some(vla),
                ..Default::default()
            };
            let result = calculate_shot(&input).unwrap();
            assert!(result.open_golf_coach.carry_distance_meters >= 0.0);
        }
    }
}
