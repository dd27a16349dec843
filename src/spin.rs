//! Conversion between the two equivalent spin representations.
//!
//! A launch monitor reports either a combined spin vector (total spin plus
//! axis tilt) or its orthogonal components (backspin/sidespin). Both encode
//! the same physical vector:
//!
//! ```text
//! backspin = total * cos(axis)      total = sqrt(back² + side²)
//! sidespin = total * sin(axis)      axis  = atan2(side, back)
//! ```
//!
//! This module produces the canonical quadruple from whichever half was
//! supplied. It is total over the validated domain; there is no failure path.

use crate::normalize::SpinObservation;

/// Canonical spin state; both representations, mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinComponents {
    /// Magnitude of the combined spin vector (rpm), >= 0.
    pub total_rpm: f64,
    /// Axis tilt from pure backspin toward sidespin (degrees).
    /// Defined as 0 when total spin is 0.
    pub axis_degrees: f64,
    /// Backspin component (rpm).
    pub backspin_rpm: f64,
    /// Sidespin component (rpm), signed.
    pub sidespin_rpm: f64,
}

impl SpinComponents {
    /// A spinless launch.
    pub fn zero() -> Self {
        SpinComponents {
            total_rpm: 0.0,
            axis_degrees: 0.0,
            backspin_rpm: 0.0,
            sidespin_rpm: 0.0,
        }
    }
}

/// Derive the canonical spin quadruple from the supplied representation.
pub fn decompose(observation: SpinObservation) -> SpinComponents {
    match observation {
        SpinObservation::MagnitudeAxis {
            total_rpm,
            axis_degrees,
        } => from_magnitude_axis(total_rpm, axis_degrees),
        SpinObservation::Components {
            backspin_rpm,
            sidespin_rpm,
        } => from_components(backspin_rpm, sidespin_rpm),
        SpinObservation::Absent => SpinComponents::zero(),
    }
}

fn from_magnitude_axis(total_rpm: f64, axis_degrees: f64) -> SpinComponents {
    if total_rpm == 0.0 {
        // Axis is meaningless without magnitude; pin it to 0 so the
        // degenerate case has one canonical form.
        return SpinComponents::zero();
    }
    let axis_rad = axis_degrees.to_radians();
    SpinComponents {
        total_rpm,
        axis_degrees,
        backspin_rpm: total_rpm * axis_rad.cos(),
        sidespin_rpm: total_rpm * axis_rad.sin(),
    }
}

fn from_components(backspin_rpm: f64, sidespin_rpm: f64) -> SpinComponents {
    let total_rpm = backspin_rpm.hypot(sidespin_rpm);
    if total_rpm == 0.0 {
        return SpinComponents::zero();
    }
    SpinComponents {
        total_rpm,
        axis_degrees: sidespin_rpm.atan2(backspin_rpm).to_degrees(),
        backspin_rpm,
        sidespin_rpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.01;

    #[test]
    fn test_magnitude_axis_to_components() {
        // Reference shot: 2800 rpm tilted 15 degrees.
        let spin = decompose(SpinObservation::MagnitudeAxis {
            total_rpm: 2800.0,
            axis_degrees: 15.0,
        });
        assert!((spin.backspin_rpm - 2704.63).abs() < TOLERANCE);
        assert!((spin.sidespin_rpm - 724.78).abs() < TOLERANCE);
        assert_eq!(spin.total_rpm, 2800.0);
        assert_eq!(spin.axis_degrees, 15.0);
    }

    #[test]
    fn test_components_to_magnitude_axis() {
        // Reference shot: 3500 rpm back, 800 rpm cut spin.
        let spin = decompose(SpinObservation::Components {
            backspin_rpm: 3500.0,
            sidespin_rpm: -800.0,
        });
        assert!((spin.total_rpm - 3590.26).abs() < TOLERANCE);
        assert!((spin.axis_degrees - (-12.875)).abs() < 0.01);
        assert_eq!(spin.backspin_rpm, 3500.0);
        assert_eq!(spin.sidespin_rpm, -800.0);
    }

    #[test]
    fn test_round_trip() {
        for &total in &[100.0, 2800.0, 11000.0] {
            for &axis in &[-89.0, -12.86, 0.0, 15.0, 45.0, 89.0] {
                let forward = decompose(SpinObservation::MagnitudeAxis {
                    total_rpm: total,
                    axis_degrees: axis,
                });
                let back = decompose(SpinObservation::Components {
                    backspin_rpm: forward.backspin_rpm,
                    sidespin_rpm: forward.sidespin_rpm,
                });
                assert!((back.total_rpm - total).abs() < 1e-9 * total);
                assert!((back.axis_degrees - axis).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_decomposition_identity_holds() {
        let spin = decompose(SpinObservation::Components {
            backspin_rpm: 3500.0,
            sidespin_rpm: -800.0,
        });
        let recomputed_total = spin.backspin_rpm.hypot(spin.sidespin_rpm);
        assert!((spin.total_rpm - recomputed_total).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_zero_spin() {
        let spin = decompose(SpinObservation::MagnitudeAxis {
            total_rpm: 0.0,
            axis_degrees: 37.0,
        });
        assert_eq!(spin, SpinComponents::zero());

        let spin = decompose(SpinObservation::Components {
            backspin_rpm: 0.0,
            sidespin_rpm: 0.0,
        });
        assert_eq!(spin, SpinComponents::zero());

        assert_eq!(decompose(SpinObservation::Absent), SpinComponents::zero());
    }

    #[test]
    fn test_pure_backspin_has_zero_axis() {
        let spin = decompose(SpinObservation::Components {
            backspin_rpm: 3000.0,
            sidespin_rpm: 0.0,
        });
        assert_eq!(spin.axis_degrees, 0.0);
        assert_eq!(spin.total_rpm, 3000.0);
    }
}
