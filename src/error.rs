// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::fmt;

/// Reasons an [`Observer`](crate::Observer) cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObserverError {
    /// Latitude outside `[-90, 90]` degrees.
    LatitudeOutOfRange(f64),
    /// Latitude or longitude is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat}° is outside [-90°, 90°]")
            }
            Self::NonFinite => f.write_str("observer coordinates must be finite"),
        }
    }
}

impl std::error::Error for ObserverError {}
