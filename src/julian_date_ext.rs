// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::{Time, SECONDS_PER_DAY};
use super::scales::{E1990, JD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Mean tropical year at 1990.0, the sun's mean motion period.
    pub const TROPICAL_YEAR: Days = Days::new(365.242_191);

    /// Julian Day the solar clock model assigns to Unix time zero.
    ///
    /// This sits one day before the civil value used by
    /// [`UnixTime`](crate::UnixTime). Positions computed from it match the
    /// day/night maps that existing clock applets draw.
    pub const CLOCK_UNIX_EPOCH: Self = Self::new(2_440_586.5);

    /// Julian Date of a Unix timestamp on the clock model's axis.
    #[inline]
    pub fn from_clock_seconds(seconds: i64) -> Self {
        Self::CLOCK_UNIX_EPOCH + Days::new(seconds as f64 / SECONDS_PER_DAY)
    }

    /// Julian centuries since J2000.0 (used by sidereal time).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Days elapsed since the 1990.0 orbital epoch.
    #[inline]
    pub fn days_since_1990(&self) -> Days {
        self.to::<E1990>().quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_since_j2000() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn centuries_are_negative_before_j2000() {
        let jd = Time::<JD>::J2000 - Days::new(36_525.0 / 2.0);
        assert!((jd.julian_centuries() - Centuries::new(-0.5)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn clock_seconds_use_legacy_epoch() {
        assert_eq!(Time::<JD>::from_clock_seconds(0), Time::<JD>::CLOCK_UNIX_EPOCH);
        let noon = Time::<JD>::from_clock_seconds(43_200);
        assert!((noon.quantity() - Days::new(2_440_587.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn clock_seconds_trail_civil_unix_days_by_one_day() {
        let clock = Time::<JD>::from_clock_seconds(1_718_928_000);
        let civil = Time::<JD>::from_unix_seconds(1_718_928_000);
        assert!((civil - clock - Days::new(1.0)).abs() < Days::new(1e-6));
    }

    #[test]
    fn days_since_1990_at_j2000() {
        let d = Time::<JD>::J2000.days_since_1990();
        assert!((d - Days::new(3_653.5)).abs() < Days::new(1e-9));
    }
}
