// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day, night, and twilight for a point on the Earth.
//!
//! The sun's zenith angle at an observer is the great-circle distance to the
//! subsolar point `(δ, λₛ)`:
//!
//! ```text
//! cos z = sin φ · sin δ + cos φ · cos δ · cos(λ − λₛ)
//! ```
//!
//! Refraction and the solar semi-diameter are ignored; the map shading this
//! feeds does not resolve them.

use crate::error::ObserverError;
use crate::sun::{sun_position, SunPosition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth below the horizon over which [`Observer::illumination`] fades out.
pub const TWILIGHT_DEPTH: f64 = 6.0;

/// Illumination phase named after the sun's altitude band.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Daylight {
    /// Sun above the horizon.
    Day,
    /// Altitude in `(-6°, 0°]`.
    CivilTwilight,
    /// Altitude in `(-12°, -6°]`.
    NauticalTwilight,
    /// Altitude in `(-18°, -12°]`.
    AstronomicalTwilight,
    /// Altitude at or below −18°.
    Night,
}

impl Daylight {
    /// Classify a solar altitude in degrees.  NaN is treated as night.
    pub fn from_altitude(altitude: f64) -> Self {
        match altitude {
            a if a > 0.0 => Self::Day,
            a if a > -6.0 => Self::CivilTwilight,
            a if a > -12.0 => Self::NauticalTwilight,
            a if a > -18.0 => Self::AstronomicalTwilight,
            _ => Self::Night,
        }
    }

    /// `true` only while the sun is above the horizon.
    #[inline]
    pub fn is_daytime(self) -> bool {
        self == Self::Day
    }
}

/// A fixed geographic location.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
}

impl Observer {
    /// Validate and build an observer.
    ///
    /// Longitude may be any finite value; it is only used inside a cosine.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ObserverError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ObserverError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ObserverError::LatitudeOutOfRange(latitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Angular distance from the zenith to the sun, in `[0, 180]` degrees.
    pub fn zenith_angle(&self, sun: &SunPosition) -> f64 {
        let phi = self.latitude.to_radians();
        // The wrapped declination is fine here: sin and cos are periodic.
        let dec = sun.lat.to_radians();
        let hour_angle = (self.longitude - sun.lon).to_radians();

        let cos_z = phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos();
        cos_z.clamp(-1.0, 1.0).acos().to_degrees()
    }

    /// Altitude of the sun above the horizon, in `[-90, 90]` degrees.
    #[inline]
    pub fn solar_altitude(&self, sun: &SunPosition) -> f64 {
        90.0 - self.zenith_angle(sun)
    }

    /// Classify the sky for an already computed sun position.
    pub fn daylight(&self, sun: &SunPosition) -> Daylight {
        Daylight::from_altitude(self.solar_altitude(sun))
    }

    /// Classify the sky at a Unix instant.
    pub fn daylight_at(&self, instant: i64) -> Daylight {
        let sun = sun_position(instant);
        let phase = self.daylight(&sun);
        tracing::debug!(
            instant,
            latitude = self.latitude,
            longitude = self.longitude,
            ?phase,
            "classified daylight"
        );
        phase
    }

    /// Map-shading weight: `1` in daylight, `0` once the sun is
    /// [`TWILIGHT_DEPTH`] below the horizon, linear in between.
    pub fn illumination(&self, sun: &SunPosition) -> f64 {
        let altitude = self.solar_altitude(sun);
        ((altitude + TWILIGHT_DEPTH) / TWILIGHT_DEPTH).clamp(0.0, 1.0)
    }
}
