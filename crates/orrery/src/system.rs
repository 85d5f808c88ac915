//! Orrery — the solar system as explicit state.
//!
//! Owns the clock, per-body spin, selection and orbit-line visibility that a
//! render loop would otherwise keep in globals. Positions are recomputed from
//! `(elements, time)` every tick; only spin and time carry over.

use glam::DVec3;

use crate::bodies::{catalog, BodyDesc, BodyFacts, SystemManifest};
use crate::bridge::protocol::{BodyInstance, InstanceBuffer, PathBuffer};
use crate::config::OrreryConfig;
use crate::core::time::SimulationClock;
use crate::orbit::{self, OrbitalElements};

/// Derived state of one body at the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub position: DVec3,
    /// Accumulated self-rotation, degrees in `[0, 360)`.
    pub spin_angle: f64,
}

impl BodyState {
    /// Place the body at `time` and apply one tick of spin.
    pub fn advance(&mut self, elements: &OrbitalElements, time: f64) {
        self.position = orbit::position_at_time(elements, time);
        self.spin_angle =
            orbit::wrap_degrees(self.spin_angle + orbit::spin_angle_delta(elements.rotation_period()));
    }
}

struct Body {
    desc: BodyDesc,
    state: BodyState,
}

pub struct Orrery {
    bodies: Vec<Body>,
    sun: BodyFacts,
    config: OrreryConfig,
    clock: SimulationClock,
    paths: PathBuffer,
    selected: Option<usize>,
    orbits_visible: bool,
}

impl Orrery {
    /// Build from a manifest. An invalid config is replaced by the default.
    pub fn new(manifest: SystemManifest) -> Self {
        let SystemManifest { bodies, sun, mut config } = manifest;
        if let Err(e) = config.validate() {
            log::warn!("{e}; using default config");
            config = OrreryConfig::default();
        }
        let segments = config.path_samples.max(1);

        let paths: Vec<Vec<DVec3>> = bodies
            .iter()
            .map(|b| orbit::sample_orbit_path(&b.elements, segments))
            .collect();
        let paths = PathBuffer::from_paths(&paths, segments + 1);

        let bodies = bodies
            .into_iter()
            .map(|desc| {
                let state = BodyState {
                    position: orbit::position_at_time(&desc.elements, 0.0),
                    spin_angle: 0.0,
                };
                Body { desc, state }
            })
            .collect::<Vec<_>>();

        if bodies.len() > config.max_bodies {
            log::warn!(
                "{} bodies exceed instance capacity {}; extra bodies will not be drawn",
                bodies.len(),
                config.max_bodies
            );
        }

        Self {
            bodies,
            sun,
            clock: SimulationClock::new(config.time_step),
            config,
            paths,
            selected: None,
            orbits_visible: true,
        }
    }

    /// Run one simulation tick.
    ///
    /// Bodies are placed at the current time, then the clock moves on by
    /// `time_step`. A paused orrery does nothing.
    pub fn tick(&mut self) {
        if self.clock.is_paused() {
            return;
        }
        let time = self.clock.time();
        for body in &mut self.bodies {
            body.state.advance(&body.desc.elements, time);
        }
        self.clock.advance();
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_name(&self, index: usize) -> Option<&str> {
        self.bodies.get(index).map(|b| b.desc.name.as_str())
    }

    pub fn elements(&self, index: usize) -> Option<&OrbitalElements> {
        self.bodies.get(index).map(|b| &b.desc.elements)
    }

    pub fn state(&self, index: usize) -> Option<&BodyState> {
        self.bodies.get(index).map(|b| &b.state)
    }

    /// Case-insensitive index lookup.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies
            .iter()
            .position(|b| catalog::name_matches(&b.desc.name, name))
    }

    /// Facts for a body or the Sun.
    pub fn facts(&self, name: &str) -> Option<&BodyFacts> {
        if catalog::name_matches(name, catalog::SUN_NAME) {
            return Some(&self.sun);
        }
        self.index_of(name).map(|i| &self.bodies[i].desc.facts)
    }

    pub fn paths(&self) -> &PathBuffer {
        &self.paths
    }

    // ── Selection / view state ─────────────────────────────────────

    /// Select a body by name. Unknown names clear the selection.
    pub fn select(&mut self, name: &str) -> Option<usize> {
        let idx = self.index_of(name);
        self.set_selected(idx);
        idx
    }

    /// Select a body by index. Out-of-range indices clear the selection.
    pub fn select_index(&mut self, index: usize) -> Option<usize> {
        let idx = (index < self.bodies.len()).then_some(index);
        self.set_selected(idx);
        idx
    }

    fn set_selected(&mut self, idx: Option<usize>) {
        if idx != self.selected {
            match idx.and_then(|i| self.body_name(i)) {
                Some(name) => log::debug!("selected {name}"),
                None => log::debug!("selection cleared"),
            }
        }
        self.selected = idx;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drop the selection (the view's "refresh" button).
    pub fn reset(&mut self) {
        self.set_selected(None);
    }

    /// Flip orbit-line visibility, returning the new state.
    pub fn toggle_orbits(&mut self) -> bool {
        self.orbits_visible = !self.orbits_visible;
        self.orbits_visible
    }

    pub fn orbits_visible(&self) -> bool {
        self.orbits_visible
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = !self.clock.is_paused();
        self.clock.set_paused(paused);
        paused
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    // ── Output ─────────────────────────────────────────────────────

    /// Pack the current body states for the renderer.
    pub fn write_instances(&self, buffer: &mut InstanceBuffer) {
        buffer.clear();
        let orbit_flag = if self.orbits_visible { 1.0 } else { 0.0 };
        for (i, body) in self.bodies.iter().enumerate() {
            let p = body.state.position.as_vec3();
            let pushed = buffer.push(BodyInstance {
                x: p.x,
                y: p.y,
                z: p.z,
                spin: body.state.spin_angle.to_radians() as f32,
                radius: body.desc.elements.radius() as f32,
                selected: if self.selected == Some(i) { 1.0 } else { 0.0 },
                orbit_visible: orbit_flag,
                _pad: 0.0,
            });
            if !pushed {
                break;
            }
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new(SystemManifest::default())
    }
}
