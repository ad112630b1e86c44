// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian-day instants tagged by an epoch counter.
//!
//! [`Time<S>`] stores a single [`Days`] quantity whose origin is fixed by the
//! compile-time marker `S: TimeScale`.  The ephemeris only needs pure epoch
//! counters (Julian Date, Unix days, days since the 1990.0 orbital epoch),
//! so every conversion is a constant offset through the absolute Julian Day.
//!
//! No ΔT or leap-second correction is applied anywhere: the sun model treats
//! a Unix timestamp as Universal Time directly.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seconds in one civil day.
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for epoch counters.
///
/// A scale defines a display **label** and the offset between its native
/// day count and the absolute Julian Day.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a day count on this scale to an absolute Julian Day.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute Julian Day back to this scale's day count.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to `Days`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Convert this instant to another scale.
    ///
    /// ```text
    /// self → JD → target
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    /// Build an instant from whole seconds since 1970-01-01T00:00:00Z.
    ///
    /// This uses the civil Unix epoch (JD 2 440 587.5). The sun model runs
    /// one day behind it, see
    /// [`JulianDate::from_clock_seconds`](crate::JulianDate::from_clock_seconds).
    pub fn from_unix_seconds(seconds: i64) -> Self {
        use super::scales::UnixTime;
        Time::<UnixTime>::new(seconds as f64 / SECONDS_PER_DAY).to::<S>()
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use super::scales::UnixTime;
        let seconds_since_epoch = self.to::<UnixTime>().quantity().to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`, sub-second part included.
    ///
    /// Like [`Time::from_unix_seconds`], this lands on the civil axis, one day
    /// ahead of the Julian Date the sun model uses for the same timestamp.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UnixTime;
        let seconds = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Time::<UnixTime>::from_days((seconds + nanos).to::<Day>()).to::<S>()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
