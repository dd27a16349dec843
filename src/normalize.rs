//! Input validation and presence classification.
//!
//! First stage of the pipeline: decides which optional fields were supplied,
//! rejects out-of-range and non-finite values, and produces a normalized
//! record for the downstream components. Rejected requests never reach the
//! trajectory estimator.

use crate::error::CoachError;
use crate::shot::ShotInput;

/// Which spin representation the caller supplied.
///
/// A supplied total spin makes the magnitude/axis pair authoritative and the
/// orthogonal pair is discarded here. An axis without a magnitude carries no
/// spin information on its own, so supplied components win over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinObservation {
    /// Total spin plus axis tilt (a missing axis defaults to 0).
    MagnitudeAxis { total_rpm: f64, axis_degrees: f64 },
    /// Orthogonal backspin/sidespin components.
    Components { backspin_rpm: f64, sidespin_rpm: f64 },
    /// No spin information supplied; treated as a spinless launch.
    Absent,
}

/// Range-checked launch parameters with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedShot {
    /// Ball speed (m/s), non-negative.
    pub ball_speed: f64,
    /// Vertical launch angle (degrees).
    pub vertical_launch_angle: f64,
    /// Horizontal launch angle (degrees), 0 when not supplied.
    pub horizontal_launch_angle: f64,
    /// Supplied spin representation.
    pub spin: SpinObservation,
}

fn check_finite(field: &'static str, value: f64) -> Result<f64, CoachError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoachError::InvalidValue { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<f64, CoachError> {
    let value = check_finite(field, value)?;
    if value < 0.0 {
        Err(CoachError::InvalidValue { field, value })
    } else {
        Ok(value)
    }
}

/// Validate a raw shot input and classify its spin representation.
///
/// Ball speed and vertical launch angle are mandatory; their absence is a
/// hard failure. All other fields default to "absent" and downstream
/// components treat absence as zero magnitude.
pub fn normalize(input: &ShotInput) -> Result<NormalizedShot, CoachError> {
    let ball_speed = input
        .ball_speed_meters_per_second
        .ok_or(CoachError::MissingRequiredField(
            "ball_speed_meters_per_second",
        ))?;
    let ball_speed = check_non_negative("ball_speed_meters_per_second", ball_speed)?;

    let vertical_launch_angle = input
        .vertical_launch_angle_degrees
        .ok_or(CoachError::MissingRequiredField(
            "vertical_launch_angle_degrees",
        ))?;
    let vertical_launch_angle =
        check_finite("vertical_launch_angle_degrees", vertical_launch_angle)?;

    let horizontal_launch_angle = match input.horizontal_launch_angle_degrees {
        Some(angle) => check_finite("horizontal_launch_angle_degrees", angle)?,
        None => 0.0,
    };

    // Validate every supplied spin field even when the precedence rule
    // ends up discarding it; a bogus value is a bogus request.
    if let Some(total) = input.total_spin_rpm {
        check_non_negative("total_spin_rpm", total)?;
    }
    if let Some(axis) = input.spin_axis_degrees {
        check_finite("spin_axis_degrees", axis)?;
    }
    if let Some(backspin) = input.backspin_rpm {
        check_non_negative("backspin_rpm", backspin)?;
    }
    if let Some(sidespin) = input.sidespin_rpm {
        check_finite("sidespin_rpm", sidespin)?;
    }

    let spin = if let Some(total_rpm) = input.total_spin_rpm {
        SpinObservation::MagnitudeAxis {
            total_rpm,
            axis_degrees: input.spin_axis_degrees.unwrap_or(0.0),
        }
    } else if input.backspin_rpm.is_some() || input.sidespin_rpm.is_some() {
        SpinObservation::Components {
            backspin_rpm: input.backspin_rpm.unwrap_or(0.0),
            sidespin_rpm: input.sidespin_rpm.unwrap_or(0.0),
        }
    } else if let Some(axis_degrees) = input.spin_axis_degrees {
        // An axis with no magnitude anywhere describes a spinless launch.
        SpinObservation::MagnitudeAxis {
            total_rpm: 0.0,
            axis_degrees,
        }
    } else {
        SpinObservation::Absent
    };

    Ok(NormalizedShot {
        ball_speed,
        vertical_launch_angle,
        horizontal_launch_angle,
        spin,
    })
}
