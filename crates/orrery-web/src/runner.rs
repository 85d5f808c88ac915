use orrery::{FixedTimestep, InstanceBuffer, ManifestError, Orrery, SystemManifest};

/// Drives an [`Orrery`] from browser frame times.
///
/// The wasm exports in `lib.rs` keep one runner in a `thread_local!` and
/// forward every call to it, because wasm-bindgen cannot hand out borrowed
/// Rust state across the JS boundary.
pub struct OrreryRunner {
    orrery: Orrery,
    timestep: FixedTimestep,
    instances: InstanceBuffer,
}

impl OrreryRunner {
    pub fn new(manifest: SystemManifest) -> Self {
        let orrery = Orrery::new(manifest);
        let timestep = FixedTimestep::new(orrery.config().fixed_dt);
        let instances = InstanceBuffer::with_capacity(orrery.config().max_bodies);

        let mut runner = Self {
            orrery,
            timestep,
            instances,
        };
        runner.orrery.write_instances(&mut runner.instances);
        runner
    }

    /// Replace the whole system from a JSON manifest.
    /// On error the current system is left untouched.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), ManifestError> {
        let manifest = SystemManifest::from_json(json)?;
        *self = Self::new(manifest);
        Ok(())
    }

    /// Run one frame: as many fixed ticks as `dt` seconds cover, then
    /// repack the instance buffer. Returns the number of ticks run.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.orrery.tick();
        }
        self.orrery.write_instances(&mut self.instances);
        steps
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Mutable access for view-state changes. The instance buffer is
    /// repacked immediately so flags show up before the next tick.
    pub fn with_orrery<R>(&mut self, f: impl FnOnce(&mut Orrery) -> R) -> R {
        let r = f(&mut self.orrery);
        self.orrery.write_instances(&mut self.instances);
        r
    }

    pub fn instances(&self) -> &InstanceBuffer {
        &self.instances
    }

    // ---- Pointer accessors for direct wasm-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn paths_ptr(&self) -> *const f32 {
        self.orrery.paths().paths_ptr()
    }

    pub fn paths_len(&self) -> u32 {
        self.orrery.paths().len() as u32
    }

    pub fn path_points_per_body(&self) -> u32 {
        self.orrery.paths().points_per_body() as u32
    }
}

impl Default for OrreryRunner {
    fn default() -> Self {
        Self::new(SystemManifest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_packed_instances() {
        let runner = OrreryRunner::default();
        assert_eq!(runner.instance_count(), 9);
        assert_eq!(runner.path_points_per_body(), 361);
        assert_eq!(runner.paths_len(), 9 * 361 * 3);
    }

    #[test]
    fn frame_time_drives_ticks() {
        let mut runner = OrreryRunner::default();
        assert_eq!(runner.tick(0.0), 0);
        assert_eq!(runner.tick(1.0 / 60.0), 1);
        assert_eq!(runner.orrery().time(), 0.5);
        // Long stall is capped
        assert_eq!(runner.tick(5.0), FixedTimestep::MAX_STEPS);
        assert_eq!(runner.orrery().time(), 0.5 * (1 + FixedTimestep::MAX_STEPS) as f64);
    }

    #[test]
    fn view_changes_repack_instances() {
        let mut runner = OrreryRunner::default();
        runner.with_orrery(|o| o.select("earth"));
        assert_eq!(runner.instances().instances()[2].selected, 1.0);
        runner.with_orrery(|o| o.toggle_orbits());
        assert_eq!(runner.instances().instances()[0].orbit_visible, 0.0);
    }

    #[test]
    fn bad_manifest_keeps_current_system() {
        let mut runner = OrreryRunner::default();
        runner.tick(1.0 / 60.0);
        assert!(runner.load_manifest(r#"{ "bodies": [] }"#).is_err());
        assert_eq!(runner.orrery().body_count(), 9);
        assert_eq!(runner.orrery().time(), 0.5);
    }

    #[test]
    fn bad_config_keeps_current_system() {
        let mut runner = OrreryRunner::default();
        let json = r#"{ "bodies": [ { "name": "Solo",
            "elements": { "radius": 1, "semi_major_axis": 10, "eccentricity": 0.1,
                          "orbital_period": 50, "rotation_period": 2 } } ],
            "config": { "time_step": -0.5, "fixed_dt": 0.0 } }"#;
        assert!(matches!(
            runner.load_manifest(json),
            Err(ManifestError::InvalidConfig(_))
        ));
        assert_eq!(runner.orrery().body_count(), 9);
        assert_eq!(runner.tick(1.0 / 60.0), 1);
        assert_eq!(runner.orrery().time(), 0.5);
    }

    #[test]
    fn manifest_replaces_system() {
        let mut runner = OrreryRunner::default();
        let json = r#"{ "bodies": [ { "name": "Solo",
            "elements": { "radius": 1, "semi_major_axis": 10, "eccentricity": 0.1,
                          "orbital_period": 50, "rotation_period": 2 } } ],
            "config": { "path_samples": 36 } }"#;
        runner.load_manifest(json).unwrap();
        assert_eq!(runner.instance_count(), 1);
        assert_eq!(runner.path_points_per_body(), 37);
    }
}
