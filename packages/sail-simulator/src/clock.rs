//! clock.rs — where each tick's Δt comes from
//!
//! `Wall` feeds real elapsed time into the integrator, so scheduling jitter
//! (a slow frame write, OS sleep overshoot) shows up in the dynamics.
//! `Fixed` always returns the nominal step, for reproducible runs.
//! Both scale by the speed multiplier.

use std::time::Instant;

#[derive(Debug, Clone)]
pub enum SimClock {
    Wall { last: Instant, speed: f64 },
    Fixed { dt: f64, speed: f64 },
}

impl SimClock {
    pub fn wall(speed: f64) -> Self {
        Self::Wall { last: Instant::now(), speed }
    }

    pub fn fixed(dt: f64, speed: f64) -> Self {
        Self::Fixed { dt, speed }
    }

    /// Simulated seconds since the previous call
    pub fn elapsed(&mut self) -> f64 {
        match self {
            Self::Wall { last, speed } => {
                let now = Instant::now();
                let real = now.duration_since(*last).as_secs_f64();
                *last = now;
                real * *speed
            }
            Self::Fixed { dt, speed } => *dt * *speed,
        }
    }
}

/// Ticks between rendered frames: one frame per simulated second
pub fn frame_interval(dt: f64) -> u64 {
    (1.0 / dt).round().max(1.0) as u64
}
