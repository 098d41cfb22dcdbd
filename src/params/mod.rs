//! Calculation parameters for prayer-time schedulers
//!
//! A [`CalculationParameters`] value captures one complete calculation policy:
//! twilight angles, the Isha interval, rule selections and minute adjustments.
//! Schedulers build one per method, tweak fields as needed, then read it for
//! the rest of the run. The only derived value computed here is
//! [`CalculationParameters::night_portions`].
//!
//! Parameters can also be loaded from JSON using the camelCase field names
//! common to prayer-time configuration files:
//!
//! ```rust
//! use miqat::{CalculationParameters, Madhab};
//!
//! let params = CalculationParameters::from_json_str(
//!     r#"{ "method": "MuslimWorldLeague", "fajrAngle": 18, "ishaAngle": 17, "madhab": "hanafi" }"#,
//! ).unwrap();
//! assert_eq!(params.madhab, Madhab::Hanafi);
//! assert_eq!(params.isha_angle, 17.0);
//! ```

pub mod adjustments;
pub mod options;

pub use adjustments::{Prayer, PrayerAdjustments};
pub use options::{HighLatitudeRule, Madhab, PolarCircleResolution, Rounding, Shafaq};

use crate::constants::{
    DEFAULT_METHOD, MIDDLE_OF_THE_NIGHT_PORTION, SEVENTH_OF_THE_NIGHT_PORTION,
    TWILIGHT_ANGLE_DIVISOR,
};
use crate::{MiqatError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Fractions of the night bounding Fajr and Isha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightPortions {
    /// Fraction of the night before sunrise at which Fajr may start
    pub fajr: f64,
    /// Fraction of the night after sunset by which Isha must start
    pub isha: f64,
}

/// Which setting decides the start of Isha
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IshaCriterion {
    /// Sun depression angle in degrees
    Angle(f64),
    /// Minutes after Maghrib
    Interval(f64),
}

/// One fully specified calculation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationParameters {
    /// Name of the method preset; should not be modified after construction
    #[serde(deserialize_with = "deserialize_method")]
    pub method: String,
    /// Sun angle below the horizon defining Fajr (degrees)
    pub fajr_angle: f64,
    /// Sun angle below the horizon defining Isha (degrees)
    pub isha_angle: f64,
    /// Minutes after Maghrib defining Isha; overrides `isha_angle` when positive
    pub isha_interval: f64,
    /// Sun angle below the horizon defining Maghrib (degrees)
    pub maghrib_angle: f64,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
    /// Manual adjustments in minutes
    pub adjustments: PrayerAdjustments,
    /// Adjustments belonging to the method preset
    pub method_adjustments: PrayerAdjustments,
    pub polar_circle_resolution: PolarCircleResolution,
    pub rounding: Rounding,
    /// Used by the Moonsighting Committee method to determine Isha
    pub shafaq: Shafaq,
}

impl CalculationParameters {
    /// Create parameters for a method with every angle set to zero
    ///
    /// A missing or empty method name becomes `"Other"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use miqat::CalculationParameters;
    ///
    /// assert_eq!(CalculationParameters::new(None).method, "Other");
    /// assert_eq!(CalculationParameters::new(Some("Karachi")).method, "Karachi");
    /// ```
    pub fn new(method: Option<&str>) -> Self {
        Self {
            method: normalize_method(method),
            fajr_angle: 0.0,
            isha_angle: 0.0,
            isha_interval: 0.0,
            maghrib_angle: 0.0,
            madhab: Madhab::default(),
            high_latitude_rule: HighLatitudeRule::default(),
            adjustments: PrayerAdjustments::default(),
            method_adjustments: PrayerAdjustments::default(),
            polar_circle_resolution: PolarCircleResolution::default(),
            rounding: Rounding::default(),
            shafaq: Shafaq::default(),
        }
    }

    /// Create parameters for a method defined by its Fajr and Isha angles
    pub fn with_angles(method: Option<&str>, fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            fajr_angle,
            isha_angle,
            ..Self::new(method)
        }
    }

    /// Set the Isha interval in minutes after Maghrib
    pub fn with_isha_interval(mut self, minutes: f64) -> Self {
        self.isha_interval = minutes;
        self
    }

    /// Set the Maghrib angle in degrees
    pub fn with_maghrib_angle(mut self, degrees: f64) -> Self {
        self.maghrib_angle = degrees;
        self
    }

    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    pub fn with_method_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.method_adjustments = adjustments;
        self
    }

    pub fn with_polar_circle_resolution(mut self, resolution: PolarCircleResolution) -> Self {
        self.polar_circle_resolution = resolution;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_shafaq(mut self, shafaq: Shafaq) -> Self {
        self.shafaq = shafaq;
        self
    }

    /// Fractions of the night bounding Fajr and Isha under the current rule
    ///
    /// - Middle of the night: `1/2` for both
    /// - Seventh of the night: `1/7` for both
    /// - Twilight angle: each angle divided by 60
    ///
    /// Only the high latitude rule picks the branch; the angles matter only
    /// for the twilight-angle rule. Nothing is cached, so the result always
    /// reflects the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`MiqatError::InvalidConfiguration`] when the rule is
    /// [`HighLatitudeRule::Unrecognized`]. No fallback rule is substituted.
    pub fn night_portions(&self) -> Result<NightPortions> {
        match &self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => Ok(NightPortions {
                fajr: MIDDLE_OF_THE_NIGHT_PORTION,
                isha: MIDDLE_OF_THE_NIGHT_PORTION,
            }),
            HighLatitudeRule::SeventhOfTheNight => Ok(NightPortions {
                fajr: SEVENTH_OF_THE_NIGHT_PORTION,
                isha: SEVENTH_OF_THE_NIGHT_PORTION,
            }),
            HighLatitudeRule::TwilightAngle => Ok(NightPortions {
                fajr: self.fajr_angle / TWILIGHT_ANGLE_DIVISOR,
                isha: self.isha_angle / TWILIGHT_ANGLE_DIVISOR,
            }),
            HighLatitudeRule::Unrecognized(name) => {
                log::error!(
                    "Invalid high latitude rule found when computing night portions for method {}: {}",
                    self.method,
                    name
                );
                Err(MiqatError::InvalidConfiguration {
                    setting: "high latitude rule",
                    value: name.clone(),
                })
            }
        }
    }

    /// The setting that decides Isha: the interval when positive, else the angle
    pub fn isha_criterion(&self) -> IshaCriterion {
        if self.isha_interval > 0.0 {
            IshaCriterion::Interval(self.isha_interval)
        } else {
            IshaCriterion::Angle(self.isha_angle)
        }
    }

    /// Load parameters from a JSON string
    ///
    /// Missing fields take their defaults; a missing or null method becomes `"Other"`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        log::debug!(
            "Loaded calculation parameters for method {} (rule {})",
            params.method,
            params.high_latitude_rule
        );
        Ok(params)
    }

    /// Load parameters from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading calculation parameters from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the parameters as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CalculationParameters {
    fn default() -> Self {
        Self::new(None)
    }
}

fn normalize_method(method: Option<&str>) -> String {
    match method {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_METHOD.to_string(),
    }
}

fn deserialize_method<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let method: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_method(method.as_deref()))
}
