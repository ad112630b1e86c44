// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Range reduction for angles and clock hours.

/// Reduce `x` into `[0, period)`.
///
/// `rem_euclid` may round tiny negative inputs up to exactly `period`,
/// which is folded back to zero. NaN stays NaN.
#[inline]
fn wrap(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    if r >= period {
        r - period
    } else {
        r
    }
}

/// Normalise an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap(degrees, 360.0)
}

/// Normalise a time of day in hours into `[0, 24)`.
#[inline]
pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// Map an angle in degrees onto `(-180, 180]`.
#[inline]
pub fn signed_degrees(degrees: f64) -> f64 {
    let d = normalize_degrees(degrees);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_wrap_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }

    #[test]
    fn tiny_negative_never_yields_full_turn() {
        let d = normalize_degrees(-1e-18);
        assert!((0.0..360.0).contains(&d), "got {d}");
    }

    #[test]
    fn hours_wrap_into_range() {
        assert_eq!(normalize_hours(25.5), 1.5);
        assert_eq!(normalize_hours(-1.0), 23.0);
    }

    #[test]
    fn signed_degrees_range() {
        assert_eq!(signed_degrees(336.0), -24.0);
        assert_eq!(signed_degrees(180.0), 180.0);
        assert_eq!(signed_degrees(-180.0), 180.0);
        assert_eq!(signed_degrees(23.5), 23.5);
    }

    #[test]
    fn nan_propagates() {
        assert!(normalize_degrees(f64::NAN).is_nan());
        assert!(signed_degrees(f64::NAN).is_nan());
    }
}
