use log::debug;

use crate::angles::{cosd, sind};
use crate::constants::{Degree, DEGRAD, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};

/// Result of the eccentric-anomaly iteration.
///
/// Reaching the iteration cap is not an error: `eccentric_anomaly` then holds the last
/// iterate and `converged` is `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: Degree,
    pub iterations: usize,
    pub converged: bool,
}

/// Solve Kepler's equation `M = E - e·sin(E)` for the eccentric anomaly, in degrees.
///
/// The first guess is `E₀ = M + e·sin(M)·(1 + e·cos(M))` and Newton steps are applied until two
/// successive iterates differ by at most [`KEPLER_TOLERANCE`] or [`KEPLER_MAX_ITERATIONS`] steps
/// have been taken.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in degrees.
/// * `eccentricity`: orbital eccentricity `e`, expected in `[0, 1)`.
///
/// Return
/// ------
/// * A [`KeplerSolution`] carrying the eccentric anomaly, the number of Newton steps and the
///   convergence flag.
pub fn solve_kepler(mean_anomaly: Degree, eccentricity: f64) -> KeplerSolution {
    solve_kepler_capped(mean_anomaly, eccentricity, KEPLER_MAX_ITERATIONS)
}

pub(crate) fn solve_kepler_capped(
    mean_anomaly: Degree,
    eccentricity: f64,
    max_iterations: usize,
) -> KeplerSolution {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut ecc_anomaly = m + e * DEGRAD * sind(m) * (1.0 + e * cosd(m));
    for iteration in 0..max_iterations {
        let previous = ecc_anomaly;
        ecc_anomaly =
            previous - (previous - e * DEGRAD * sind(previous) - m) / (1.0 - e * cosd(previous));
        if (ecc_anomaly - previous).abs() <= KEPLER_TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: ecc_anomaly,
                iterations: iteration + 1,
                converged: true,
            };
        }
    }

    debug!(
        "Kepler iteration capped after {max_iterations} steps (M = {m}°, e = {e}), using E = {ecc_anomaly}°"
    );
    KeplerSolution {
        eccentric_anomaly: ecc_anomaly,
        iterations: max_iterations,
        converged: false,
    }
}
