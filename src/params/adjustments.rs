//! Per-prayer minute offsets

use serde::{Deserialize, Serialize};

/// The seven time points a schedule reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Dahwa,
}

impl Prayer {
    /// All time points in schedule order
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Dahwa,
    ];

    /// Get the prayer's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
            Prayer::Dahwa => "dahwa",
        }
    }
}

/// Minutes added to each computed time
///
/// The record always carries exactly one entry per [`Prayer`]. Missing keys
/// in configuration default to 0 and unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrayerAdjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
    pub dahwa: i32,
}

impl PrayerAdjustments {
    /// Get the adjustment for a prayer in minutes
    pub fn get(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Dahwa => self.dahwa,
        }
    }

    /// Set the adjustment for a prayer in minutes
    pub fn set(&mut self, prayer: Prayer, minutes: i32) {
        let slot = match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
            Prayer::Dahwa => &mut self.dahwa,
        };
        *slot = minutes;
    }

    /// Iterate over `(prayer, minutes)` pairs in schedule order
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, i32)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(move |prayer| (prayer, self.get(prayer)))
    }

    /// True when every entry is zero
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, minutes)| minutes == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let adjustments = PrayerAdjustments::default();
        assert!(adjustments.is_zero());
        assert_eq!(adjustments.iter().count(), 7);
    }

    #[test]
    fn test_get_and_set() {
        let mut adjustments = PrayerAdjustments::default();
        adjustments.set(Prayer::Dhuhr, 3);
        adjustments.set(Prayer::Isha, -2);

        assert_eq!(adjustments.dhuhr, 3);
        assert_eq!(adjustments.get(Prayer::Isha), -2);
        assert_eq!(adjustments.get(Prayer::Fajr), 0);
        assert!(!adjustments.is_zero());
    }

    #[test]
    fn test_iter_follows_schedule_order() {
        let adjustments = PrayerAdjustments {
            fajr: 1,
            sunrise: 2,
            dhuhr: 3,
            asr: 4,
            maghrib: 5,
            isha: 6,
            dahwa: 7,
        };
        let names: Vec<_> = adjustments.iter().map(|(p, _)| p.name()).collect();
        assert_eq!(
            names,
            vec!["fajr", "sunrise", "dhuhr", "asr", "maghrib", "isha", "dahwa"]
        );
        let minutes: Vec<_> = adjustments.iter().map(|(_, m)| m).collect();
        assert_eq!(minutes, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_deserialize_partial_and_unknown_keys() {
        let adjustments: PrayerAdjustments = serde_json::from_str(r#"{"dhuhr": 1}"#).unwrap();
        assert_eq!(adjustments.dhuhr, 1);
        assert_eq!(adjustments.fajr, 0);

        let result = serde_json::from_str::<PrayerAdjustments>(r#"{"tahajjud": 5}"#);
        assert!(result.is_err());
    }
}
