use std::f64::consts::TAU;

use glam::DVec3;

use super::elements::OrbitalElements;
use super::kepler::position_at_mean_anomaly;

/// Segments in the default orbit path (one per degree of mean anomaly).
pub const DEFAULT_PATH_SEGMENTS: usize = 360;

/// Sample a closed orbit path.
///
/// Returns `segments + 1` points at evenly spaced mean anomalies over
/// `[0, 2π]` inclusive, so the last point repeats the first and a line strip
/// through them closes the loop.
pub fn sample_orbit_path(elements: &OrbitalElements, segments: usize) -> Vec<DVec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let m = (i as f64 / segments as f64) * TAU;
            position_at_mean_anomaly(elements, m)
        })
        .collect()
}
