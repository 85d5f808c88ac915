//! Error types for element validation and manifest loading.

/// A set of orbital elements the solver cannot place a body with.
///
/// Raised when [`OrbitalElements`](crate::OrbitalElements) are constructed;
/// the solver itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidOrbitalElements {
    #[error("eccentricity {0} is outside [0, 1)")]
    Eccentricity(f64),

    #[error("semi-major axis must be positive, got {0}")]
    SemiMajorAxis(f64),

    #[error("orbital period must be positive, got {0}")]
    OrbitalPeriod(f64),

    #[error("rotation period must be non-zero")]
    RotationPeriod(f64),

    #[error("display radius must be positive, got {0}")]
    Radius(f64),

    #[error("{field} is not finite")]
    NonFinite { field: &'static str },
}

/// A simulation config that would stall, reverse or overflow the orrery.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("time_step must be positive, got {0}")]
    TimeStep(f64),

    #[error("fixed_dt must be positive, got {0}")]
    FixedDt(f32),

    #[error("path_samples must be in 1..={max}, got {got}")]
    PathSamples { got: usize, max: usize },

    #[error("max_bodies must be at least 1")]
    MaxBodies,
}

/// Errors that can occur when loading a system manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The JSON document could not be parsed.
    #[error("failed to parse manifest: {0}")]
    Parse(#[source] serde_json::Error),

    /// The manifest lists no orbiting bodies.
    #[error("manifest contains no bodies")]
    Empty,

    /// Two bodies share a name (names are case-insensitive).
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// A body uses a name reserved for the central star.
    #[error("body name `{0}` is reserved for the Sun")]
    ReservedName(String),

    /// A body's elements failed validation.
    #[error("body `{name}`: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: InvalidOrbitalElements,
    },

    /// The `config` section failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[source] InvalidConfig),
}
