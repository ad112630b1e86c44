// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Newton–Raphson solver for Kepler's equation `E − e·sin E = M`.
//!
//! For near-circular orbits such as the Earth's (`e ≈ 0.0167`) the iteration
//! starting at `E = M` settles in two or three steps.  The loop is still
//! capped: an eccentricity close to one can make the derivative
//! `1 − e·cos E` vanish, and the solver then hands back its last estimate
//! instead of spinning.

/// Residual below which the eccentric anomaly is accepted (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Hard upper bound on Newton steps.
pub const MAX_KEPLER_ITERATIONS: u32 = 100;

/// Outcome of [`solve_kepler`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians.
    pub eccentric_anomaly: f64,
    /// Number of Newton corrections applied.
    pub iterations: u32,
    /// `false` when [`MAX_KEPLER_ITERATIONS`] ran out first.
    pub converged: bool,
}

/// Solve `E − e·sin E = M` for the eccentric anomaly `E`.
///
/// `mean_anomaly` is in radians.  Never fails: on cap exhaustion the best
/// estimate is returned with `converged == false`, and NaN inputs come back
/// as NaN.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let mut e_anom = mean_anomaly;
    let mut iterations = 0;

    loop {
        let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        // NaN compares false and falls through to the cap check.
        if residual.abs() < KEPLER_TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations,
                converged: true,
            };
        }
        if iterations >= MAX_KEPLER_ITERATIONS {
            tracing::warn!(
                mean_anomaly,
                eccentricity,
                residual,
                "Kepler iteration did not converge; using last estimate"
            );
            return KeplerSolution {
                eccentric_anomaly: e_anom,
                iterations,
                converged: false,
            };
        }
        e_anom -= residual / (1.0 - eccentricity * e_anom.cos());
        iterations += 1;
    }
}
