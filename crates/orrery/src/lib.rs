pub mod bodies;
pub mod bridge;
pub mod config;
pub mod core;
pub mod error;
pub mod orbit;
pub mod system;

// Re-export key types at crate root for convenience
pub use bodies::{BodyDesc, BodyFacts, SystemManifest};
pub use bridge::protocol::{BodyInstance, InstanceBuffer, PathBuffer};
pub use config::OrreryConfig;
pub use crate::core::time::{FixedTimestep, SimulationClock};
pub use error::{InvalidConfig, InvalidOrbitalElements, ManifestError};
pub use orbit::{
    mean_anomaly_at_time, orbital_radius, position_at_mean_anomaly, position_at_time,
    sample_orbit_path, solve_eccentric_anomaly, spin_angle_delta, true_anomaly_from_eccentric,
    wrap_degrees, ElementsDesc, OrbitalElements,
};
pub use system::{BodyState, Orrery};
