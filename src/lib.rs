//! Miqat: angle math and calculation parameters for prayer-time engines
//!
//! This crate provides the numeric and configuration foundation a
//! sun-position solver and prayer-time scheduler build on:
//!
//! - [`angles`]: degree/radian conversion and wrap-around normalization
//! - [`params`]: the [`CalculationParameters`] policy object and its
//!   derived [`NightPortions`]
//!
//! ```rust
//! use miqat::{CalculationParameters, HighLatitudeRule};
//!
//! let params = CalculationParameters::with_angles(Some("MuslimWorldLeague"), 18.0, 17.0)
//!     .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);
//! let portions = params.night_portions().unwrap();
//! assert_eq!(portions.fajr, 1.0 / 7.0);
//! ```

use thiserror::Error;

pub mod angles;
pub mod constants;
pub mod params;

// Re-export commonly used types
pub use angles::{
    degrees_to_radians, normalize_to_scale, quadrant_shift_angle, radians_to_degrees,
    unwind_angle,
};
pub use params::{
    CalculationParameters, HighLatitudeRule, IshaCriterion, Madhab, NightPortions,
    PolarCircleResolution, Prayer, PrayerAdjustments, Rounding, Shafaq,
};

/// Main error type for the miqat library
#[derive(Debug, Error)]
pub enum MiqatError {
    /// A setting holds a value outside its defined options
    #[error("Invalid {setting}: {value}")]
    InvalidConfiguration {
        /// The setting that was rejected
        setting: &'static str,
        /// The offending value as written
        value: String,
    },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for miqat operations
pub type Result<T> = std::result::Result<T, MiqatError>;
