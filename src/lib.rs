// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun Clock
//!
//! A low-precision solar ephemeris for clocks that shade a world map by day
//! and night.
//!
//! # Core operations
//!
//! - [`sun_position`] — subsolar point (declination, longitude) for a Unix
//!   instant.
//! - [`greenwich_sidereal_hours`] — Greenwich sidereal time used to place the
//!   sun over the rotating Earth.
//! - [`solve_kepler`] — capped Newton–Raphson solver for Kepler's equation.
//! - [`Observer`] — day / twilight / night classification at a location.
//!
//! # Time scales
//!
//! The ephemeris works on Julian days.  The following markers implement
//! [`TimeScale`]:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`UnixTime`] | Unix / POSIX time, in days |
//! | [`E1990`] | Days since the 1990.0 orbital epoch |
//!
//! # Example
//!
//! ```rust
//! use sunclock::{sun_position, Daylight, Observer};
//!
//! let sun = sun_position(1_718_928_000); // 2024-06-21T00:00:00Z
//! let london = Observer::new(51.48, 0.0).unwrap();
//! assert_eq!(london.daylight(&sun), Daylight::AstronomicalTwilight);
//! ```

mod angle;
mod daylight;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod kepler;
pub(crate) mod scales;
mod sidereal;
mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{normalize_degrees, normalize_hours, signed_degrees};
pub use daylight::{Daylight, Observer, TWILIGHT_DEPTH};
pub use error::ObserverError;
pub use instant::{Time, TimeScale};
pub use kepler::{solve_kepler, KeplerSolution, KEPLER_TOLERANCE, MAX_KEPLER_ITERATIONS};
pub use scales::{UnixTime, E1990, JD};
pub use sidereal::{greenwich_sidereal_hours, SIDEREAL_RATE};
pub use sun::{
    sun_position, sun_position_at, SunPosition, ECCENTRICITY, EPSILON_G, MEAN_OBLIQUITY, MU_G,
};

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;
