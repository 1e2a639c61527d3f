//! autopilot.rs — reactive helm and sail trim
//!
//! Runs once per tick before the force model:
//! - rudder: bang-bang toward the target heading (no deadband, so it
//!   chatters around the target)
//! - sails: squared across the true wind, recomputed every tick

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

use sail_types::{BoatState, ControlSurfaces, WindState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Rudder deflection away from centre (±π) when steering, radians
    pub rudder_hard_over: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { rudder_hard_over: FRAC_PI_3 }
    }
}

impl Autopilot {
    pub fn new(rudder_hard_over: f64) -> Self { Self { rudder_hard_over } }

    /// Set rudder and sail headings for this tick
    pub fn steer(&self, boat: &BoatState, wind: &WindState, controls: &mut ControlSurfaces) {
        let heading = boat.heading();

        controls.rudder_heading = if controls.target_heading < heading {
            -PI + self.rudder_hard_over
        } else {
            PI - self.rudder_hard_over
        };

        controls.mainsail_heading = wind.direction - FRAC_PI_2 - heading;
        controls.jib_heading = controls.mainsail_heading;
    }
}
