//! Keplerian orbit placement — pure math, no engine dependencies.
//!
//! Uses f64 throughout. Only the wire protocol narrows to f32.

use std::f64::consts::TAU;

use glam::DVec3;

use super::elements::OrbitalElements;

/// Newton–Raphson iterations used by [`solve_eccentric_anomaly`].
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve Kepler's equation: E - e·sin(E) = M
/// using a fixed number of Newton-Raphson steps starting from E = M.
///
/// There is no convergence check. Ten steps are plenty for planetary
/// eccentricities (all below 0.25); near-parabolic orbits lose accuracy.
/// `mean_anomaly` in radians, returns eccentric anomaly in radians.
/// No range reduction is applied to either angle.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ea = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let delta = ea - eccentricity * ea.sin() - mean_anomaly;
        let derivative = 1.0 - eccentricity * ea.cos();
        ea -= delta / derivative;
    }
    ea
}

/// True anomaly (radians) from eccentric anomaly.
///
/// Diverges as `eccentricity` approaches 1.
pub fn true_anomaly_from_eccentric(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let k = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (k * (eccentric_anomaly / 2.0).tan()).atan()
}

/// Distance from the focus at eccentric anomaly `E`.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Mean anomaly after `time` units on an orbit of `orbital_period` units.
///
/// Not reduced modulo 2π: the downstream trig is periodic.
pub fn mean_anomaly_at_time(time: f64, orbital_period: f64) -> f64 {
    TAU * time / orbital_period
}

/// Position on the inclined orbit at mean anomaly `M`.
///
/// The in-plane `y` is split across `y`/`z` by the inclination, so the
/// orbit tilts about the x axis (the periapsis direction).
pub fn position_at_mean_anomaly(elements: &OrbitalElements, mean_anomaly: f64) -> DVec3 {
    let e = elements.eccentricity();
    let ea = solve_eccentric_anomaly(mean_anomaly, e);
    let nu = true_anomaly_from_eccentric(ea, e);
    let r = orbital_radius(elements.semi_major_axis(), e, ea);

    let x = r * nu.cos();
    let y_flat = r * nu.sin();
    let (sin_i, cos_i) = elements.inclination_radians().sin_cos();

    DVec3::new(x, y_flat * cos_i, y_flat * sin_i)
}

/// Position at simulation `time`. Same math as the path sampler, driven by time.
pub fn position_at_time(elements: &OrbitalElements, time: f64) -> DVec3 {
    let m = mean_anomaly_at_time(time, elements.orbital_period());
    position_at_mean_anomaly(elements, m)
}
