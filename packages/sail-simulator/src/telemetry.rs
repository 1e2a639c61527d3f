//! telemetry.rs — once-per-second diagnostics
//!
//! The same snapshot feeds the diagnostic log lines and, when
//! `render.telemetry_path` is set, a JSON file overwritten every frame.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use sail_types::{BoatState, ControlSurfaces, WindState};

use crate::error::SimError;
use crate::forces::ForceBreakdown;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub sim_time_s: f64,
    pub boat: BoatState,
    pub wind: WindState,
    pub controls: ControlSurfaces,
    pub forces: ForceBreakdown,
}

/// Summary at info, every force and torque at debug
pub fn log_diagnostics(s: &Snapshot) {
    info!(
        "⛵ t={:.1}s | pos=({:.2}, {:.2}) | speed={:.2} | heading={:.1}° | roll={:.1}°",
        s.sim_time_s,
        s.boat.position.x,
        s.boat.position.y,
        s.boat.speed(),
        s.boat.heading().to_degrees(),
        s.boat.roll().to_degrees(),
    );
    debug!(
        target_heading = s.controls.target_heading,
        mainsail = s.controls.mainsail_heading,
        jib = s.controls.jib_heading,
        rudder = s.controls.rudder_heading,
        "controls"
    );
    debug!(
        wind = ?s.forces.wind,
        apparent_wind = ?s.forces.apparent_wind,
        wind_direction = s.wind.direction,
        "wind"
    );
    debug!(
        mainsail = ?s.forces.mainsail_force,
        jib = ?s.forces.jib_force,
        keel = ?s.forces.keel_force,
        axial_drag = ?s.forces.axial_drag_force,
        rudder = ?s.forces.rudder_force,
        "forces"
    );
    debug!(
        mainsail = ?s.forces.mainsail_torque,
        jib = ?s.forces.jib_torque,
        keel = ?s.forces.keel_torque,
        rudder = ?s.forces.rudder_torque,
        gravity = ?s.forces.gravity_torque,
        angular_drag = ?s.forces.angular_drag_torque,
        "torques"
    );
    debug!(
        velocity = ?s.boat.velocity,
        orientation = ?s.boat.orientation,
        angular_velocity = ?s.boat.angular_velocity,
        "state"
    );
}

/// Overwrite `path` with the snapshot as pretty JSON
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SimError> {
    let json = serde_json::to_vec_pretty(snapshot)?;
    std::fs::write(path, json).map_err(|source| SimError::Telemetry {
        path: path.to_path_buf(),
        source,
    })
}
