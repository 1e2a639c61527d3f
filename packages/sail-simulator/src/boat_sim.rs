//! boat_sim.rs — the simulated world for one boat
//!
//! Owns everything a tick reads or writes: boat state, wind, control
//! surfaces, physics constants, autopilot and wind model. Each tick runs:
//! wind update → autopilot → force model → integrator.

use rand::Rng;

use sail_types::{BoatState, ControlSurfaces, PhysicsConstants, WindState};

use crate::autopilot::Autopilot;
use crate::forces::{compute_forces, ForceBreakdown};
use crate::integrator::step;
use crate::scenarios::{ScenarioConfig, WindModel};
use crate::telemetry::Snapshot;

#[derive(Debug, Clone)]
pub struct BoatSim {
    pub boat: BoatState,
    pub wind: WindState,
    pub controls: ControlSurfaces,
    pub constants: PhysicsConstants,
    pub autopilot: Autopilot,
    pub wind_model: WindModel,
    /// Simulated seconds since start
    pub t_elapsed: f64,
    pub ticks: u64,
}

impl BoatSim {
    /// Boat at rest at the origin, heading north
    pub fn new(scenario: &ScenarioConfig, autopilot: Autopilot, constants: PhysicsConstants) -> Self {
        Self {
            boat: BoatState::default(),
            wind: scenario.wind(),
            controls: ControlSurfaces {
                target_heading: scenario.target_heading(),
                ..ControlSurfaces::default()
            },
            constants,
            autopilot,
            wind_model: scenario.wind_model(),
            t_elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Advance by `dt` simulated seconds
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f64, rng: &mut R) -> ForceBreakdown {
        self.wind_model.update(&mut self.wind, rng);
        self.autopilot.steer(&self.boat, &self.wind, &mut self.controls);

        let (next, forces) = step(&self.boat, &self.wind, &self.controls, &self.constants, dt);
        self.boat = next;
        self.t_elapsed += dt;
        self.ticks += 1;
        forces
    }

    /// Current state with the forces acting on it right now
    pub fn snapshot(&self) -> Snapshot {
        let forces = compute_forces(&self.boat, &self.wind, &self.controls, &self.constants);
        Snapshot {
            tick: self.ticks,
            sim_time_s: self.t_elapsed,
            boat: self.boat,
            wind: self.wind,
            controls: self.controls,
            forces,
        }
    }
}
