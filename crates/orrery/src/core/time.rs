/// Fixed timestep accumulator.
/// Turns variable browser frame times into a whole number of simulation ticks.
pub struct FixedTimestep {
    /// Real seconds per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Ticks run per frame at most, so a stalled tab does not fast-forward.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    /// A non-positive tick length never steps.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.dt.is_nan() || self.dt <= 0.0 {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// Simulation time, advanced by a fixed step once per tick.
///
/// Owned by the caller and threaded into the solver as a plain `f64`;
/// the solver never advances it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    time: f64,
    step: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step,
            paused: false,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Move forward one tick unless paused. Returns the new time.
    pub fn advance(&mut self) -> f64 {
        if !self.paused {
            self.time += self.step;
        }
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), FixedTimestep::MAX_STEPS);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-5.0), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn clock_advances_by_step() {
        let mut clock = SimulationClock::new(0.5);
        assert_eq!(clock.time(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.time(), 1.0);
    }

    #[test]
    fn paused_clock_holds() {
        let mut clock = SimulationClock::new(0.5);
        clock.advance();
        clock.set_paused(true);
        assert_eq!(clock.advance(), 0.5);
        clock.set_paused(false);
        assert_eq!(clock.advance(), 1.0);
    }

    #[test]
    fn degenerate_tick_length_never_steps() {
        let mut ts = FixedTimestep::new(-1.0 / 60.0);
        assert_eq!(ts.accumulate(0.0), 0);
        assert_eq!(ts.accumulate(1.0), 0);
        let mut ts = FixedTimestep::new(0.0);
        assert_eq!(ts.accumulate(1.0), 0);
    }
}
