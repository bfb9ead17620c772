//! Simulation clock for the frame loop.
//!
//! Simulation time is decoupled from the wall clock: every rendered frame
//! advances it by a fixed, user-scalable step unless the clock is paused.
//! Wall-clock deltas are tracked separately for FPS reporting only.

use std::time::{Duration, Instant};

/// Default simulation step per frame.
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;
/// Factor applied by one speed-up / slow-down action.
pub const TIME_SCALE_FACTOR: f32 = 1.1;

/// Frame-stepped simulation clock.
#[derive(Debug)]
pub struct SimClock {
    /// Accumulated simulation time.
    time: f32,
    /// Simulation time added per frame while running.
    step: f32,
    /// When set, `tick` does not advance time.
    paused: bool,
    /// Frame count since start (counts paused frames too).
    frame_count: u64,
    /// Wall-clock instant of the last tick.
    last_frame: Instant,
    /// Wall-clock duration of the last frame.
    wall_delta: Duration,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}

impl SimClock {
    /// Create a running clock at time zero.
    pub fn new(step: f32) -> Self {
        Self {
            time: 0.0,
            step,
            paused: false,
            frame_count: 0,
            last_frame: Instant::now(),
            wall_delta: Duration::ZERO,
        }
    }

    /// Advance one frame. Returns the simulation delta, which is zero while paused.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.wall_delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;

        if self.paused {
            0.0
        } else {
            self.time += self.step;
            self.step
        }
    }

    /// Current simulation time.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Simulation time added per running frame.
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Make the simulation run faster. Ignored while paused.
    pub fn speed_up(&mut self) {
        if !self.paused {
            self.step *= TIME_SCALE_FACTOR;
        }
    }

    /// Make the simulation run slower. Ignored while paused.
    pub fn slow_down(&mut self) {
        if !self.paused {
            self.step /= TIME_SCALE_FACTOR;
        }
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.wall_delta.as_secs_f32() > 0.0 {
            1.0 / self.wall_delta.as_secs_f32()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_by_step() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.tick(), 0.5);
        assert_eq!(clock.time(), 1.0);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut clock = SimClock::new(0.25);
        clock.tick();
        assert!(clock.toggle_pause());
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.time(), 0.25);
        assert!(!clock.toggle_pause());
        clock.tick();
        assert_eq!(clock.time(), 0.5);
    }

    #[test]
    fn time_scaling_ignored_while_paused() {
        let mut clock = SimClock::new(1.0);
        clock.speed_up();
        assert!((clock.step() - 1.1).abs() < 1e-6);
        clock.toggle_pause();
        clock.slow_down();
        assert!((clock.step() - 1.1).abs() < 1e-6);
        clock.toggle_pause();
        clock.slow_down();
        assert!((clock.step() - 1.0).abs() < 1e-6);
    }
}
