// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich mean sidereal time for the clock model.
//!
//! The polynomial is the standard low-order one evaluated at the preceding
//! 0h UT, advanced by the elapsed part of the day at the sidereal rate:
//!
//! ```text
//! T   = (JD₀ − 2451545) / 36525
//! T₀  = 6.697374558 + 2400.051336·T + 0.000025862·T²      (mod 24)
//! GST = T₀ + 1.002737909·UT                               (mod 24)
//! ```
//!
//! `JD₀` is taken on the clock model's Julian axis
//! ([`JulianDate::from_clock_seconds`]).

use crate::angle::normalize_hours;
use crate::instant::SECONDS_PER_DAY;
use crate::JulianDate;
use qtty::Days;

const GMST_A0_H: f64 = 6.697_374_558;
const GMST_A1_H: f64 = 2_400.051_336;
const GMST_A2_H: f64 = 0.000_025_862;

/// Sidereal hours elapsed per solar hour.
pub const SIDEREAL_RATE: f64 = 1.002_737_909;

/// Greenwich sidereal time, in hours within `[0, 24)`, at a Unix instant.
///
/// Seconds-of-day are reduced with Euclidean remainder, so pre-1970 instants
/// still count forward from their own midnight.  The day boundary is built
/// from the day index, so every `i64` is accepted without overflow.
pub fn greenwich_sidereal_hours(instant: i64) -> f64 {
    let day = instant.div_euclid(SECONDS_PER_DAY as i64);
    let seconds_of_day = instant.rem_euclid(SECONDS_PER_DAY as i64);
    let jd0 = JulianDate::CLOCK_UNIX_EPOCH + Days::new(day as f64);
    let t = jd0.julian_centuries().value();

    let t0 = normalize_hours(GMST_A0_H + GMST_A1_H * t + GMST_A2_H * t * t);
    let ut = seconds_of_day as f64 / 3_600.0;
    normalize_hours(t0 + ut * SIDEREAL_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        // With the clock axis one day behind, J2000 noon evaluates the
        // polynomial at 1999-12-31 0h: ≈ 18.632 h.
        let gst = greenwich_sidereal_hours(946_728_000);
        assert!((gst - 18.6317).abs() < 1e-3, "gst = {gst}");
    }

    #[test]
    fn advances_four_minutes_per_day() {
        let a = greenwich_sidereal_hours(1_700_000_000);
        let b = greenwich_sidereal_hours(1_700_000_000 + 86_400);
        let step = normalize_hours(b - a);
        assert!((step - 0.0657).abs() < 1e-3, "step = {step}");
    }

    #[test]
    fn one_solar_hour_is_slightly_more_than_one_sidereal_hour() {
        let a = greenwich_sidereal_hours(1_700_000_000);
        let b = greenwich_sidereal_hours(1_700_000_000 + 3_600);
        assert!((normalize_hours(b - a) - SIDEREAL_RATE).abs() < 1e-9);
    }

    #[test]
    fn day_boundary_matches_clock_axis_midnight() {
        // 2024-03-20T06:00Z: the polynomial is evaluated at that day's 0h.
        let midnight = greenwich_sidereal_hours(1_710_892_800);
        let morning = greenwich_sidereal_hours(1_710_892_800 + 6 * 3_600);
        assert!((normalize_hours(morning - midnight) - 6.0 * SIDEREAL_RATE).abs() < 1e-9);
    }

    #[test]
    fn stays_in_range_for_distant_instants() {
        for instant in [
            i64::MIN,
            i64::MIN + 1,
            -4_000_000_000,
            -1,
            0,
            86_399,
            4_102_444_800,
            10_000_000_000,
            i64::MAX,
        ] {
            let gst = greenwich_sidereal_hours(instant);
            assert!((0.0..24.0).contains(&gst), "{instant} → {gst}");
        }
    }
}
