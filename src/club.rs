//! Club delivery estimates reconstructed from ball flight.
//!
//! Ball-only launch monitors never see the club, so these are heuristics,
//! not measurements: smash factor inferred from spin loft (high-spin strikes
//! transfer energy less efficiently), start direction split between face and
//! path per the ball flight laws. Good enough for range displays; not for
//! fitting work.

use crate::normalize::NormalizedShot;
use crate::spin::SpinComponents;

/// Fraction of the start direction attributable to the club face.
///
/// High-speed camera studies put the ball start line at roughly 80-90%
/// face angle for driver impacts; a single mid-band value is used.
const FACE_BIAS: f64 = 0.85;

/// Spin axis tilt produced per degree of face-to-path difference.
const AXIS_DEGREES_PER_FACE_TO_PATH: f64 = 3.5;

/// Smash factor assumed for a zero-spin strike.
const SMASH_AT_ZERO_SPIN: f64 = 1.5;

/// Smash factor loss per rpm of total spin.
const SMASH_LOSS_PER_RPM: f64 = 2.5e-5;

/// Reconstructed club delivery numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubEstimates {
    /// Estimated clubhead speed (m/s).
    pub club_speed_mps: f64,
    /// Ball speed / club speed.
    pub smash_factor: f64,
    /// Club path relative to the target line (degrees).
    pub path_degrees: f64,
    /// Face orientation relative to the target line at impact (degrees).
    pub face_to_target_degrees: f64,
    /// Face orientation relative to the path (degrees, positive = open).
    pub face_to_path_degrees: f64,
}

/// Estimate the club delivery that produced a normalized shot.
pub fn estimate(shot: &NormalizedShot, spin: &SpinComponents) -> ClubEstimates {
    let smash_factor =
        (SMASH_AT_ZERO_SPIN - spin.total_rpm * SMASH_LOSS_PER_RPM).clamp(1.2, SMASH_AT_ZERO_SPIN);
    let club_speed_mps = shot.ball_speed / smash_factor;

    let face_to_target_degrees = shot.horizontal_launch_angle / FACE_BIAS;
    let face_to_path_degrees = spin.axis_degrees / AXIS_DEGREES_PER_FACE_TO_PATH;
    let path_degrees = face_to_target_degrees - face_to_path_degrees;

    ClubEstimates {
        club_speed_mps,
        smash_factor,
        path_degrees,
        face_to_target_degrees,
        face_to_path_degrees,
    }
}
