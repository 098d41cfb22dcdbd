//! Constants module for angle normalization and twilight calculations

// Angles
/// Degrees in a complete circle
pub const FULL_CIRCLE_DEG: f64 = 360.0;
/// Degrees in a half circle
pub const HALF_CIRCLE_DEG: f64 = 180.0;

// Night portions
/// Fraction of the night used by the middle-of-the-night rule
pub const MIDDLE_OF_THE_NIGHT_PORTION: f64 = 1.0 / 2.0;
/// Fraction of the night used by the seventh-of-the-night rule
pub const SEVENTH_OF_THE_NIGHT_PORTION: f64 = 1.0 / 7.0;
/// Divisor turning a twilight angle (degrees) into a night fraction
pub const TWILIGHT_ANGLE_DIVISOR: f64 = 60.0;

// Locations
/// Latitude (degrees) above which the seventh-of-the-night rule is recommended
pub const HIGH_LATITUDE_THRESHOLD_DEG: f64 = 48.0;

// Methods
/// Method name used when none is given
pub const DEFAULT_METHOD: &str = "Other";
