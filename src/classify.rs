//! Shot shape naming and quality ranking.
//!
//! Names come from the classic nine-window chart: start direction from the
//! horizontal launch angle, curvature from the spin axis tilt. The rank is a
//! display grade based on how far offline the shot finished relative to its
//! carry. Both exist purely for UI surfaces; nothing downstream consumes them.

use crate::flight::FlightOutcome;
use crate::normalize::NormalizedShot;
use crate::spin::SpinComponents;

/// Start direction window (degrees of horizontal launch angle).
const START_WINDOW_DEG: f64 = 1.5;

/// Spin axis windows separating straight / gentle / heavy curvature.
const GENTLE_CURVE_AXIS_DEG: f64 = 3.0;
const HEAVY_CURVE_AXIS_DEG: f64 = 12.0;

/// Carry floor used when grading very short shots (m); keeps chip-length
/// shots from grading on a meaningless offline ratio.
const RANK_CARRY_FLOOR_M: f64 = 20.0;

/// Display classification for one shot.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub name: String,
    pub rank: &'static str,
    pub color_rgb: &'static str,
}

/// Classify a shot from its launch direction, curvature and outcome.
pub fn classify(
    shot: &NormalizedShot,
    spin: &SpinComponents,
    outcome: &FlightOutcome,
) -> Classification {
    let start = if shot.horizontal_launch_angle > START_WINDOW_DEG {
        Some("Push")
    } else if shot.horizontal_launch_angle < -START_WINDOW_DEG {
        Some("Pull")
    } else {
        None
    };

    let curve = if spin.axis_degrees >= HEAVY_CURVE_AXIS_DEG {
        Some("Slice")
    } else if spin.axis_degrees >= GENTLE_CURVE_AXIS_DEG {
        Some("Fade")
    } else if spin.axis_degrees <= -HEAVY_CURVE_AXIS_DEG {
        Some("Hook")
    } else if spin.axis_degrees <= -GENTLE_CURVE_AXIS_DEG {
        Some("Draw")
    } else {
        None
    };

    let name = match (start, curve) {
        (None, None) => "Straight".to_string(),
        (Some(start), None) => start.to_string(),
        (None, Some(curve)) => curve.to_string(),
        (Some(start), Some(curve)) => format!("{start} {curve}"),
    };

    let offline_ratio =
        outcome.offline_distance_m.abs() / outcome.carry_distance_m.max(RANK_CARRY_FLOOR_M);
    let (rank, color_rgb) = grade(offline_ratio);

    Classification {
        name,
        rank,
        color_rgb,
    }
}

fn grade(offline_ratio: f64) -> (&'static str, &'static str) {
    if offline_ratio < 0.01 {
        ("S+", "#00C853")
    } else if offline_ratio < 0.025 {
        ("S", "#64DD17")
    } else if offline_ratio < 0.05 {
        ("A", "#AEEA00")
    } else if offline_ratio < 0.10 {
        ("B", "#FFD600")
    } else if offline_ratio < 0.18 {
        ("C", "#FF6D00")
    } else {
        ("D", "#D50000")
    }
}
