//! Shot record data model for the JSON boundary.
//!
//! Field names follow the launch-monitor wire schema: metric units only
//! (meters, meters/second, degrees, rpm). US customary conversions are
//! provided as a convenience block in the output and never accepted as input.

use serde::{Deserialize, Serialize};

/// Raw launch parameters as supplied by a tracking sensor or manual entry.
///
/// Every field is independently optional; absence is tracked explicitly
/// rather than encoded as zero, so a genuine 0.0° horizontal launch angle
/// is distinguishable from "not measured".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotInput {
    /// Ball speed (m/s). Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_speed_meters_per_second: Option<f64>,

    /// Vertical launch angle (degrees above the ground plane). Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_launch_angle_degrees: Option<f64>,

    /// Horizontal launch angle (degrees off the target line, positive toward
    /// the positive-offline side).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_launch_angle_degrees: Option<f64>,

    /// Total spin magnitude (rpm).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spin_rpm: Option<f64>,

    /// Spin axis tilt from pure backspin toward sidespin (degrees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_axis_degrees: Option<f64>,

    /// Backspin component (rpm).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backspin_rpm: Option<f64>,

    /// Sidespin component (rpm, signed toward the positive-offline side).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidespin_rpm: Option<f64>,
}

/// Plain x/y/z triple for vector-valued output fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3Out {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3Out {
    pub fn scaled(&self, factor: f64) -> Vec3Out {
        Vec3Out {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

/// Convenience conversions of the derived output into yards and mph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsCustomaryUnits {
    pub ball_speed_mph: f64,
    pub club_speed_mph: f64,
    pub carry_distance_yards: f64,
    pub total_distance_yards: f64,
    pub offline_distance_yards: f64,
    pub peak_height_yards: f64,
    pub landing_position_yards: Vec3Out,
    pub landing_velocity_mph: Vec3Out,
}

/// All values the engine derives for one shot.
///
/// The canonical spin quadruple always satisfies
/// `total == sqrt(back² + side²)` and `axis == atan2(side, back)` (degrees).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedValues {
    pub carry_distance_meters: f64,
    pub total_distance_meters: f64,
    pub offline_distance_meters: f64,
    pub peak_height_meters: f64,
    pub flight_time_seconds: f64,
    pub descent_angle_degrees: f64,
    pub landing_position_meters: Vec3Out,
    pub landing_velocity_meters_per_second: Vec3Out,

    pub total_spin_rpm: f64,
    pub spin_axis_degrees: f64,
    pub backspin_rpm: f64,
    pub sidespin_rpm: f64,

    pub club_speed_meters_per_second: f64,
    pub smash_factor: f64,
    pub club_path_degrees: f64,
    pub club_face_to_target_degrees: f64,
    pub club_face_to_path_degrees: f64,

    pub shot_name: String,
    pub shot_rank: String,
    pub shot_color_rgb: String,

    pub us_customary_units: UsCustomaryUnits,
}

/// Complete shot record: the echoed input plus the derived block.
///
/// Supplied fields are echoed at the top level byte-for-value unchanged;
/// everything the engine computed lives under the `open_golf_coach` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResult {
    #[serde(flatten)]
    pub input: ShotInput,
    pub open_golf_coach: DerivedValues,
}

impl From<&ShotResult> for ShotInput {
    /// Reinterpret a complete result as a fully-supplied input.
    ///
    /// The canonical spin quadruple is taken from the derived block, the
    /// launch fields from the echo (defaulted horizontal angle becomes an
    /// explicit 0.0). Running the engine on the converted input reproduces
    /// the same derived values.
    fn from(result: &ShotResult) -> Self {
        let derived = &result.open_golf_coach;
        ShotInput {
            ball_speed_meters_per_second: result.input.ball_speed_meters_per_second,
            vertical_launch_angle_degrees: result.input.vertical_launch_angle_degrees,
            horizontal_launch_angle_degrees: result
                .input
                .horizontal_launch_angle_degrees
                .or(Some(0.0)),
            total_spin_rpm: Some(derived.total_spin_rpm),
            spin_axis_degrees: Some(derived.spin_axis_degrees),
            backspin_rpm: Some(derived.backspin_rpm),
            sidespin_rpm: Some(derived.sidespin_rpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let input = ShotInput {
            ball_speed_meters_per_second: Some(70.0),
            vertical_launch_angle_degrees: Some(12.5),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("ball_speed_meters_per_second"));
        assert!(!json.contains("horizontal_launch_angle_degrees"));
        assert!(!json.contains("total_spin_rpm"));
    }

    #[test]
    fn test_unknown_keys_are_ignored_on_parse() {
        let json = r#"{
            "ball_speed_meters_per_second": 70.0,
            "vertical_launch_angle_degrees": 12.5,
            "open_golf_coach": {"carry_distance_meters": 200.0}
        }"#;
        let input: ShotInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.ball_speed_meters_per_second, Some(70.0));
        assert_eq!(input.total_spin_rpm, None);
    }

    #[test]
    fn test_zero_is_distinct_from_absent() {
        let json = r#"{
            "ball_speed_meters_per_second": 70.0,
            "vertical_launch_angle_degrees": 12.5,
            "horizontal_launch_angle_degrees": 0.0
        }"#;
        let input: ShotInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.horizontal_launch_angle_degrees, Some(0.0));
        assert_eq!(input.sidespin_rpm, None);
    }
}
