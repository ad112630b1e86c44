// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent Solar Position — Low-Precision Orbital Model
//!
//! Computes the **subsolar point** for a Unix instant: the sun's declination
//! and the geographic longitude where it currently culminates.  The model is
//! the classic two-body ellipse of *Duffett-Smith, Practical Astronomy with
//! your Calculator* referred to epoch 1990.0:
//!
//! 1. days since the orbital epoch → mean anomaly,
//! 2. Kepler's equation → eccentric anomaly → true anomaly,
//! 3. ecliptic longitude → right ascension / declination,
//! 4. right ascension − Greenwich sidereal time → subsolar longitude.
//!
//! Accuracy is a fraction of a degree for several decades around 1990, which
//! is plenty for shading a world map by day and night.
//!
//! ## Output convention
//! Both angles of [`SunPosition`] are reported in `[0, 360)` degrees.  This
//! includes the declination: a southern declination of −23° comes back as
//! 337°.  Trigonometric consumers are unaffected; use
//! [`SunPosition::declination`] for the signed value.
//!
//! ## Quick Example
//! ```rust
//! use sunclock::sun_position;
//!
//! let pos = sun_position(1_718_928_000); // 2024-06-21T00:00:00Z
//! assert!((pos.declination() - 23.44).abs() < 0.1);
//! assert!((0.0..360.0).contains(&pos.lon));
//! ```

use chrono::{DateTime, Utc};
use std::f64::consts::PI;

use crate::angle::{normalize_degrees, signed_degrees};
use crate::kepler::solve_kepler;
use crate::sidereal::greenwich_sidereal_hours;
use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ecliptic longitude of the sun at epoch 1990.0 (degrees).
pub const EPSILON_G: f64 = 279.403_303;

/// Ecliptic longitude of perigee at epoch 1990.0 (degrees).
pub const MU_G: f64 = 282.768_422;

/// Eccentricity of the Earth–sun orbit.
pub const ECCENTRICITY: f64 = 0.016_713;

/// Mean obliquity of the ecliptic (degrees).
pub const MEAN_OBLIQUITY: f64 = 23.440_592;

/// Apparent position of the sun as seen from the Earth's centre.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunPosition {
    /// Declination in degrees, wrapped into `[0, 360)`.
    pub lat: f64,
    /// Subsolar longitude in degrees east, in `[0, 360)`.
    pub lon: f64,
}

impl SunPosition {
    /// Declination in degrees within `(-180, 180]`; physically `±23.44°`.
    #[inline]
    pub fn declination(&self) -> f64 {
        signed_degrees(self.lat)
    }

    /// Subsolar longitude in degrees within `(-180, 180]`, east positive.
    #[inline]
    pub fn subsolar_longitude(&self) -> f64 {
        signed_degrees(self.lon)
    }
}

/// Ecliptic longitude of the sun (degrees) on the clock model's Julian axis.
fn ecliptic_longitude(jd: JulianDate) -> f64 {
    let days = jd.days_since_1990().value();
    let n = normalize_degrees(360.0 / JulianDate::TROPICAL_YEAR.value() * days);
    let mean_anomaly = normalize_degrees(n + EPSILON_G - MU_G);

    let kepler = solve_kepler(mean_anomaly.to_radians(), ECCENTRICITY);
    let e_anom = kepler.eccentric_anomaly;

    let half_angle = ((1.0 + ECCENTRICITY) / (1.0 - ECCENTRICITY)).sqrt() * (e_anom / 2.0).tan();
    let true_anomaly = normalize_degrees((2.0 * half_angle.atan()).to_degrees());

    tracing::trace!(
        days,
        mean_anomaly,
        true_anomaly,
        iterations = kepler.iterations,
        "solar anomalies"
    );
    normalize_degrees(true_anomaly + MU_G)
}

/// Ecliptic (λ, β) → equatorial (α, δ), all in radians.
fn ecliptic_to_equatorial(lambda: f64, beta: f64) -> (f64, f64) {
    let obliquity = MEAN_OBLIQUITY.to_radians();
    let (sin_eps, cos_eps) = obliquity.sin_cos();
    let ra = (lambda.sin() * cos_eps - beta.tan() * sin_eps).atan2(lambda.cos());
    let dec = (beta.sin() * cos_eps + beta.cos() * sin_eps * lambda.sin()).asin();
    (ra, dec)
}

/// Position of the sun at `instant` (seconds since 1970-01-01T00:00:00Z).
///
/// Pure and total: any `i64` is accepted, accuracy fades gracefully far
/// from 1990, and degenerate arithmetic surfaces as NaN rather than an
/// error.
pub fn sun_position(instant: i64) -> SunPosition {
    let jd = JulianDate::from_clock_seconds(instant);
    let lambda = ecliptic_longitude(jd).to_radians();
    let (ra, dec) = ecliptic_to_equatorial(lambda, 0.0);

    let gst = greenwich_sidereal_hours(instant);
    let ra = ra - PI / 12.0 * gst;

    SunPosition {
        lat: normalize_degrees(dec.to_degrees()),
        lon: normalize_degrees(ra.to_degrees()),
    }
}

/// [`sun_position`] for a `chrono` timestamp; sub-second precision is dropped.
#[inline]
pub fn sun_position_at(datetime: DateTime<Utc>) -> SunPosition {
    sun_position(datetime.timestamp())
}
