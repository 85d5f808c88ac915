use serde::{Deserialize, Serialize};

use crate::error::InvalidConfig;
use crate::orbit::DEFAULT_PATH_SEGMENTS;

/// Configuration for an [`Orrery`](crate::Orrery).
///
/// Every field has a default, so a manifest may give any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Real seconds per simulation tick (default: 1/60).
    pub fixed_dt: f32,
    /// Simulation time units added per tick (default: 0.5).
    pub time_step: f64,
    /// Segments per sampled orbit path (default: 360, i.e. 361 points).
    pub path_samples: usize,
    /// Capacity of the per-body instance buffer (default: 16).
    pub max_bodies: usize,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            time_step: 0.5,
            path_samples: DEFAULT_PATH_SEGMENTS,
            max_bodies: 16,
        }
    }
}

impl OrreryConfig {
    /// Largest accepted `path_samples`; paths for every body are kept in memory.
    pub const MAX_PATH_SAMPLES: usize = 8192;

    /// Reject settings that would run the clock backwards, never tick,
    /// or size the path buffer without bound.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(InvalidConfig::TimeStep(self.time_step));
        }
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(InvalidConfig::FixedDt(self.fixed_dt));
        }
        if self.path_samples == 0 || self.path_samples > Self::MAX_PATH_SAMPLES {
            return Err(InvalidConfig::PathSamples {
                got: self.path_samples,
                max: Self::MAX_PATH_SAMPLES,
            });
        }
        if self.max_bodies == 0 {
            return Err(InvalidConfig::MaxBodies);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(OrreryConfig::default().validate(), Ok(()));
    }

    #[test]
    fn clock_settings_must_be_positive_and_finite() {
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let cfg = OrreryConfig { time_step: step, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(InvalidConfig::TimeStep(_))), "time_step {step}");
        }
        for dt in [0.0, -1.0 / 60.0, f32::NAN, f32::INFINITY] {
            let cfg = OrreryConfig { fixed_dt: dt, ..Default::default() };
            assert!(matches!(cfg.validate(), Err(InvalidConfig::FixedDt(_))), "fixed_dt {dt}");
        }
    }

    #[test]
    fn buffer_sizes_are_bounded() {
        let cfg = OrreryConfig { path_samples: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(InvalidConfig::PathSamples { got: 0, .. })));

        let huge = OrreryConfig::MAX_PATH_SAMPLES + 1;
        let cfg = OrreryConfig { path_samples: huge, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(InvalidConfig::PathSamples { got, .. }) if got == huge));

        let cfg = OrreryConfig { path_samples: OrreryConfig::MAX_PATH_SAMPLES, ..Default::default() };
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = OrreryConfig { max_bodies: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(InvalidConfig::MaxBodies));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: OrreryConfig = serde_json::from_str(r#"{ "time_step": 2.0 }"#).unwrap();
        assert_eq!(cfg.time_step, 2.0);
        assert_eq!(cfg.path_samples, 360);
        assert_eq!(cfg.max_bodies, 16);
    }
}
