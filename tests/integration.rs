use chrono::{TimeZone, Utc};
use qtty::Days;
use sunclock::{
    greenwich_sidereal_hours, sun_position, sun_position_at, Daylight, JulianDate, Observer,
    SunPosition, Time, E1990, MEAN_OBLIQUITY,
};

#[test]
fn chrono_and_unix_entry_points_agree() {
    let dt = Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap();
    assert_eq!(sun_position_at(dt), sun_position(dt.timestamp()));
}

#[test]
fn equinox_and_solstice_signature_across_2024() {
    let dec = |y, m, d| {
        let dt = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        sun_position_at(dt).declination()
    };
    assert!(dec(2024, 3, 20).abs() < 1.0);
    assert!(dec(2024, 9, 22).abs() < 1.0);
    assert!(dec(2024, 6, 21) > MEAN_OBLIQUITY - 0.1);
    assert!(dec(2024, 12, 21) < -MEAN_OBLIQUITY + 0.1);
}

#[test]
fn subsolar_longitude_tracks_earth_rotation() {
    // One hour later the subsolar point moves ~15° west.
    let a = sun_position(1_700_000_000).lon;
    let b = sun_position(1_700_000_000 + 3_600).lon;
    let step = sunclock::normalize_degrees(a - b);
    assert!((step - 15.0).abs() < 0.1, "step = {step}");
}

#[test]
fn sidereal_and_sun_longitude_share_one_clock() {
    // lon = RA − 15·GST, so over one solar day lon returns within a degree.
    let t = 1_650_000_000;
    let drift = sunclock::signed_degrees(sun_position(t + 86_400).lon - sun_position(t).lon);
    assert!(drift.abs() < 1.0, "drift = {drift}");
    assert!((0.0..24.0).contains(&greenwich_sidereal_hours(t)));
}

#[test]
fn day_night_boundary_moves_across_a_city() {
    let paris = Observer::new(48.8566, 2.3522).unwrap();
    let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap().timestamp();
    let midnight = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap().timestamp();
    assert_eq!(paris.daylight_at(noon), Daylight::Day);
    assert_eq!(paris.daylight_at(midnight), Daylight::Night);
}

#[test]
fn orbital_epoch_days_match_clock_axis() {
    let jd = JulianDate::from_clock_seconds(0);
    let d: Time<E1990> = jd.into();
    assert!((d.quantity() - Days::new(-7_305.0)).abs() < Days::new(1e-9));
}

#[test]
fn wrapped_position_feeds_observer_unchanged() {
    let sun = sun_position(0);
    let unwrapped = SunPosition {
        lat: sun.declination(),
        lon: sun.lon,
    };
    let oslo = Observer::new(59.91, 10.75).unwrap();
    let a = oslo.solar_altitude(&sun);
    let b = oslo.solar_altitude(&unwrapped);
    assert!((a - b).abs() < 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn serde_observer_config_roundtrip() {
    let json = r#"{"latitude":40.4168,"longitude":-3.7038}"#;
    let madrid: Observer = serde_json::from_str(json).unwrap();
    assert_eq!(madrid, Observer::new(40.4168, -3.7038).unwrap());

    let out = serde_json::to_string(&sun_position(0)).unwrap();
    assert!(out.contains("\"lat\""));
    assert!(out.contains("\"lon\""));
}

#[cfg(feature = "serde")]
#[test]
fn serde_time_is_bare_float() {
    let jd = JulianDate::new(2_451_545.0);
    assert_eq!(serde_json::to_string(&jd).unwrap(), "2451545.0");
}
