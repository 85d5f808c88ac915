pub mod elements;
pub mod kepler;
pub mod path;
pub mod spin;

pub use elements::{ElementsDesc, OrbitalElements};
pub use kepler::{
    mean_anomaly_at_time, orbital_radius, position_at_mean_anomaly, position_at_time,
    solve_eccentric_anomaly, true_anomaly_from_eccentric, KEPLER_ITERATIONS,
};
pub use path::{sample_orbit_path, DEFAULT_PATH_SEGMENTS};
pub use spin::{spin_angle_delta, wrap_degrees};
