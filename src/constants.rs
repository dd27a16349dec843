/// Physical constants used in golf shot calculations

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.80665;

/// Air density at sea level, standard conditions (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Mass of a conforming golf ball (kg)
///
/// The R&A/USGA limit is 1.620 oz = 45.93 g; manufacturers build to the limit.
pub const BALL_MASS_KG: f64 = 0.04593;

/// Diameter of a conforming golf ball (m)
///
/// Minimum legal diameter is 1.680 inches.
pub const BALL_DIAMETER_M: f64 = 0.04267;

/// Ball radius (m)
pub const BALL_RADIUS_M: f64 = BALL_DIAMETER_M / 2.0;

/// Ball cross-sectional area (m²)
pub const BALL_CROSS_SECTION_M2: f64 = std::f64::consts::PI * BALL_RADIUS_M * BALL_RADIUS_M;

/// Drag coefficient for a dimpled golf ball in the post-critical regime
///
/// Measured values for modern balls at driver speeds cluster around 0.24-0.27
/// (Bearman & Harvey wind-tunnel data). A single mid-band constant is used;
/// Reynolds-number dependence is out of scope for this engine.
pub const DRAG_COEFFICIENT: f64 = 0.25;

/// Lift coefficient slope with respect to spin ratio
///
/// Cl ≈ slope * S where S = ω·r / v is the non-dimensional spin ratio.
/// Fitted so a 2,700 rpm drive at 70 m/s produces Cl ≈ 0.19, in line with
/// published golf ball lift data.
pub const MAGNUS_LIFT_SLOPE: f64 = 2.2;

/// Upper bound on the lift coefficient
///
/// Lift saturates at high spin ratios; without the cap, wedge-speed shots
/// with tour spin rates would generate unphysical lift.
pub const LIFT_COEFFICIENT_CAP: f64 = 0.45;

/// In-flight spin decay rate (fraction per second)
///
/// Radar studies show golf ball spin decays roughly 3-5% per second of flight.
pub const SPIN_DECAY_RATE_PER_S: f64 = 0.04;

/// Height of a teed ball above the ground plane (m)
pub const TEE_HEIGHT_M: f64 = 0.04;

/// Fixed integration step (s)
pub const TIME_STEP_S: f64 = 0.001;

/// Hard ceiling on simulated flight time (s)
///
/// No real golf shot stays airborne longer than about 8 seconds; the ceiling
/// only guards the integration loop against pathological inputs.
pub const MAX_FLIGHT_TIME_S: f64 = 20.0;

/// Minimum velocity magnitude for aerodynamic force evaluation (m/s)
pub const MIN_VELOCITY_THRESHOLD: f64 = 1e-6;

/// Conversion factor: revolutions per minute to radians per second
pub const RPM_TO_RAD_PER_S: f64 = 2.0 * std::f64::consts::PI / 60.0;

/// Conversion factor: meters to yards
pub const METERS_TO_YARDS: f64 = 1.0936132983377078;

/// Conversion factor: meters per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.2369362920544025;

// Fairway roll model constants (see flight.rs)

/// Scale between landing horizontal speed and roll-out distance (s)
pub const ROLL_VELOCITY_SECONDS: f64 = 2.5;

/// Reference backspin at which roll is halved (rpm)
pub const ROLL_SPIN_REFERENCE_RPM: f64 = 2500.0;
