//! Option sets selecting between mutually exclusive calculation strategies
//!
//! Each set is a closed enum whose serialized names match the strings used by
//! existing prayer-time configuration files. Parsing with [`FromStr`] is
//! case-insensitive.

use crate::constants::HIGH_LATITUDE_THRESHOLD_DEG;
use crate::{MiqatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asr calculation school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Madhab {
    /// Earlier Asr: shadow equals object length (Shafi, Maliki, Hanbali)
    #[default]
    Shafi,
    /// Later Asr: shadow equals twice the object length
    Hanafi,
}

impl Madhab {
    /// Get the option's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Madhab::Shafi => "shafi",
            Madhab::Hanafi => "hanafi",
        }
    }

    /// Multiple of an object's length its shadow must reach for Asr to begin
    pub fn shadow_length(&self) -> f64 {
        match self {
            Madhab::Shafi => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }
}

/// Rule bounding Fajr and Isha at latitudes where twilight may never end
///
/// The three named rules are the supported strategies. `Unrecognized` only
/// arises when a configuration file names a rule this crate does not know;
/// it is kept instead of rejected so the failure surfaces at the point the
/// rule is actually needed, see
/// [`CalculationParameters::night_portions`](crate::CalculationParameters::night_portions).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HighLatitudeRule {
    /// Fajr no earlier and Isha no later than the middle of the night
    #[default]
    MiddleOfTheNight,
    /// Fajr no earlier than the last seventh of the night, Isha no later than the first
    SeventhOfTheNight,
    /// Night split in proportion to the configured twilight angles
    TwilightAngle,
    /// A rule name read from configuration that matches none of the above
    Unrecognized(String),
}

impl HighLatitudeRule {
    /// Get the rule's name as a string
    pub fn name(&self) -> &str {
        match self {
            HighLatitudeRule::MiddleOfTheNight => "middleofthenight",
            HighLatitudeRule::SeventhOfTheNight => "seventhofthenight",
            HighLatitudeRule::TwilightAngle => "twilightangle",
            HighLatitudeRule::Unrecognized(name) => name.as_str(),
        }
    }

    /// Rule recommended for a location at the given latitude in degrees
    ///
    /// ```rust
    /// use miqat::HighLatitudeRule;
    ///
    /// assert_eq!(HighLatitudeRule::recommended(21.4), HighLatitudeRule::MiddleOfTheNight);
    /// assert_eq!(HighLatitudeRule::recommended(59.9), HighLatitudeRule::SeventhOfTheNight);
    /// ```
    pub fn recommended(latitude: f64) -> Self {
        if latitude > HIGH_LATITUDE_THRESHOLD_DEG {
            HighLatitudeRule::SeventhOfTheNight
        } else {
            HighLatitudeRule::MiddleOfTheNight
        }
    }

    fn known(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "middleofthenight" => Some(HighLatitudeRule::MiddleOfTheNight),
            "seventhofthenight" => Some(HighLatitudeRule::SeventhOfTheNight),
            "twilightangle" => Some(HighLatitudeRule::TwilightAngle),
            _ => None,
        }
    }
}

impl From<String> for HighLatitudeRule {
    fn from(name: String) -> Self {
        HighLatitudeRule::known(&name).unwrap_or_else(|| {
            log::warn!("Unrecognized high latitude rule in configuration: {}", name);
            HighLatitudeRule::Unrecognized(name)
        })
    }
}

impl From<HighLatitudeRule> for String {
    fn from(rule: HighLatitudeRule) -> Self {
        match rule {
            HighLatitudeRule::Unrecognized(name) => name,
            known => known.name().to_string(),
        }
    }
}

/// Strategy for days inside the polar circles where Fajr or Isha never occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PolarCircleResolution {
    /// Borrow times from the nearest latitude where they exist
    AqrabBalad,
    /// Borrow times from the nearest date where they exist
    AqrabYaum,
    /// Leave missing times unresolved
    #[default]
    Unresolved,
}

impl PolarCircleResolution {
    /// Get the option's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            PolarCircleResolution::AqrabBalad => "AqrabBalad",
            PolarCircleResolution::AqrabYaum => "AqrabYaum",
            PolarCircleResolution::Unresolved => "Unresolved",
        }
    }
}

/// How seconds are rounded on final prayer times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round to the nearest minute
    #[default]
    Nearest,
    /// Always round up to the next minute
    Up,
    /// Keep seconds
    None,
}

impl Rounding {
    /// Get the option's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Rounding::Nearest => "nearest",
            Rounding::Up => "up",
            Rounding::None => "none",
        }
    }
}

/// Twilight color criterion for the Moonsighting Committee Isha rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shafaq {
    /// Combination of ahmer and abyad
    #[default]
    General,
    /// Red twilight
    Ahmer,
    /// White twilight
    Abyad,
}

impl Shafaq {
    /// Get the option's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Shafaq::General => "general",
            Shafaq::Ahmer => "ahmer",
            Shafaq::Abyad => "abyad",
        }
    }
}

fn invalid(setting: &'static str, value: &str) -> MiqatError {
    MiqatError::InvalidConfiguration {
        setting,
        value: value.to_string(),
    }
}

impl FromStr for Madhab {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "shafi" => Ok(Madhab::Shafi),
            "hanafi" => Ok(Madhab::Hanafi),
            _ => Err(invalid("madhab", s)),
        }
    }
}

impl FromStr for HighLatitudeRule {
    type Err = MiqatError;

    // Strict: deserialization keeps unknown names, parsing rejects them.
    fn from_str(s: &str) -> Result<Self> {
        HighLatitudeRule::known(s).ok_or_else(|| invalid("high latitude rule", s))
    }
}

impl FromStr for PolarCircleResolution {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aqrabbalad" => Ok(PolarCircleResolution::AqrabBalad),
            "aqrabyaum" => Ok(PolarCircleResolution::AqrabYaum),
            "unresolved" => Ok(PolarCircleResolution::Unresolved),
            _ => Err(invalid("polar circle resolution", s)),
        }
    }
}

impl FromStr for Rounding {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Rounding::Nearest),
            "up" => Ok(Rounding::Up),
            "none" => Ok(Rounding::None),
            _ => Err(invalid("rounding", s)),
        }
    }
}

impl FromStr for Shafaq {
    type Err = MiqatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(Shafaq::General),
            "ahmer" => Ok(Shafaq::Ahmer),
            "abyad" => Ok(Shafaq::Abyad),
            _ => Err(invalid("shafaq", s)),
        }
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HighLatitudeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for PolarCircleResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Shafaq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
