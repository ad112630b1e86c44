// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch-counter marker types.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00:00Z | 2 440 587.5 |
//! | [`E1990`] | Days since the 1990.0 solar orbital epoch | 2 447 891.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Unix Time — seconds since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// Leap seconds are ignored, as POSIX does.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

/// Days elapsed since the epoch of the solar orbital elements (1990.0).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct E1990;

/// JD at which the solar orbital elements are referred.
pub(crate) const E1990_EPOCH_JD: Days = Days::new(2_447_891.5);

impl TimeScale for E1990 {
    const LABEL: &'static str = "E1990";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + E1990_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - E1990_EPOCH_JD
    }
}

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, UnixTime, E1990);
