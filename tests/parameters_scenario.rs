//! End-to-end checks of how a scheduler drives the parameters and angle helpers

use std::io::Write;

use approx::assert_abs_diff_eq;
use miqat::{
    quadrant_shift_angle, unwind_angle, CalculationParameters, HighLatitudeRule, Madhab,
    MiqatError, NightPortions, Prayer,
};
use tempfile::NamedTempFile;

#[test]
fn test_muslim_world_league_with_hanafi_asr() {
    let mut params = CalculationParameters::with_angles(Some("MuslimWorldLeague"), 18.0, 17.0);
    params.madhab = Madhab::Hanafi;

    assert_eq!(params.method, "MuslimWorldLeague");
    assert_eq!(params.fajr_angle, 18.0);
    assert_eq!(params.isha_angle, 17.0);
    assert_eq!(params.isha_interval, 0.0);
    assert_eq!(params.maghrib_angle, 0.0);
    assert_eq!(params.madhab, Madhab::Hanafi);
    assert_eq!(params.madhab.shadow_length(), 2.0);

    // The rule, not the angles, governs this branch
    assert_eq!(
        params.night_portions().unwrap(),
        NightPortions {
            fajr: 0.5,
            isha: 0.5
        }
    );
}

#[test]
fn test_parameters_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "method": "NorthAmerica",
            "fajrAngle": 15,
            "ishaAngle": 15,
            "highLatitudeRule": "twilightangle",
            "adjustments": {{ "dhuhr": 1 }}
        }}"#
    )
    .unwrap();

    let params = CalculationParameters::from_json_file(file.path()).unwrap();
    assert_eq!(params.method, "NorthAmerica");
    assert_eq!(params.adjustments.get(Prayer::Dhuhr), 1);

    let portions = params.night_portions().unwrap();
    assert_abs_diff_eq!(portions.fajr, 0.25);
    assert_abs_diff_eq!(portions.isha, 0.25);
}

#[test]
fn test_forward_incompatible_rule_fails_at_night_portions() {
    let params = CalculationParameters::from_json_str(
        r#"{ "method": "Custom", "highLatitudeRule": "quarterofthenight" }"#,
    )
    .unwrap();

    assert_eq!(
        params.high_latitude_rule,
        HighLatitudeRule::Unrecognized("quarterofthenight".to_string())
    );
    let err = params.night_portions().unwrap_err();
    assert!(matches!(err, MiqatError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("quarterofthenight"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CalculationParameters::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(MiqatError::IoError(_))));
}

#[test]
fn test_hour_angle_wraps_across_day_boundary() {
    // Right ascension drifting past 360 between consecutive days
    let yesterday = unwind_angle(359.2);
    let today = unwind_angle(360.8);
    assert_abs_diff_eq!(today, 0.8, epsilon = 1e-9);

    let delta = quadrant_shift_angle(today - yesterday);
    assert_abs_diff_eq!(delta, 1.6, epsilon = 1e-9);
}
