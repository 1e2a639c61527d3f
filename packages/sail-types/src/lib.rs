//! # sail-types
//!
//! Shared state structures for the single-boat sailing simulator.
//!
//! These types are used by:
//! - `sail-simulator`: force model, integrator, autopilot, renderer
//! - telemetry snapshots (serde), so every type here is (de)serializable
//!
//! ## Coordinate Conventions
//!
//! - **World frame**: x = east (screen right), y = south (screen down), z = up
//! - **Body frame**: fixed to the hull; +y runs from the bow toward the stern,
//!   z = up. Force-application offsets are expressed here.
//! - **Headings**: compass style, 0 = north (screen up), positive clockwise,
//!   radians. See [`heading`] for the conversion to vectors.

pub mod heading;
pub mod vector;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub use heading::{direction_to_heading, heading_to_direction, wrap_angle};
pub use vector::{rotate_2d, Vec3};

// ── Boat state ────────────────────────────────────────────────────────────────

/// Kinematic state of the boat. Starts at rest at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatState {
    /// World-frame position
    pub position: Vec3,
    /// World-frame linear velocity
    pub velocity: Vec3,
    /// x: unused, y: roll, z: compass heading (radians)
    pub orientation: Vec3,
    /// Rate of change of `orientation`, same axes
    pub angular_velocity: Vec3,
}

impl BoatState {
    pub fn heading(&self) -> f64 { self.orientation.z }
    pub fn roll(&self) -> f64 { self.orientation.y }
    pub fn speed(&self) -> f64 { self.velocity.magnitude() }
}

// ── Wind ──────────────────────────────────────────────────────────────────────

/// True wind. `direction` is the heading the air moves toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    pub direction: f64,
    pub speed: f64,
}

impl WindState {
    pub fn new(direction: f64, speed: f64) -> Self { Self { direction, speed } }

    /// World-frame wind velocity
    pub fn velocity(&self) -> Vec3 {
        heading_to_direction(self.direction).scale(self.speed)
    }
}

impl Default for WindState {
    fn default() -> Self {
        Self { direction: PI / 6.0, speed: 2.0 }
    }
}

// ── Control surfaces ──────────────────────────────────────────────────────────

/// Control headings. Sail and rudder headings are relative to the boat's own
/// heading; `target_heading` is an absolute compass heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    pub target_heading: f64,
    pub mainsail_heading: f64,
    pub jib_heading: f64,
    /// ±π is centred (blade trailing straight aft)
    pub rudder_heading: f64,
}

impl Default for ControlSurfaces {
    fn default() -> Self {
        Self {
            target_heading: -PI / 6.0,
            mainsail_heading: -PI / 6.0,
            jib_heading: -PI / 6.0,
            rudder_heading: -PI,
        }
    }
}

// ── Physics constants ─────────────────────────────────────────────────────────

/// Fixed tuning of the boat model. Offsets are body-frame points relative to
/// the centre of gravity; coefficients are unitless lumps of density, area
/// and lift/drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConstants {
    pub mainsail_force_center: Vec3,
    pub jib_force_center: Vec3,
    pub keel_force_center: Vec3,
    /// Mass centre with no roll
    pub base_mass_center: Vec3,
    /// Rudder hinge
    pub rudder_pivot: Vec3,
    /// Hinge → blade centre of effort, rotated with the rudder deflection
    pub rudder_arm: Vec3,
    /// Multiplies raw torques to give angular acceleration per axis
    pub moment_of_inertia_scale: Vec3,

    pub mainsail_coefficient: f64,
    pub jib_coefficient: f64,
    /// Also stands in for the hull's other lateral drag
    pub keel_coefficient: f64,
    pub rudder_coefficient: f64,

    /// Per second
    pub axial_friction: f64,
    /// Per second
    pub angular_friction: f64,

    pub gravity: Vec3,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            mainsail_force_center: Vec3::new(0.0, 15.0, 20.0),
            jib_force_center: Vec3::new(0.0, -10.0, 15.0),
            keel_force_center: Vec3::new(0.0, 0.0, -30.0),
            base_mass_center: Vec3::new(0.0, 0.0, 5.0),
            rudder_pivot: Vec3::new(0.0, 30.0, 0.0),
            rudder_arm: Vec3::new(0.0, 5.0, 0.0),
            moment_of_inertia_scale: Vec3::new(0.0, 0.001, 0.002),
            mainsail_coefficient: 1.0,
            jib_coefficient: 0.5,
            keel_coefficient: 1.0,
            rudder_coefficient: 10.0,
            axial_friction: 0.05,
            angular_friction: 0.25,
            gravity: Vec3::new(0.0, 0.0, -100.0),
        }
    }
}
