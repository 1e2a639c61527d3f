//! forces.rs — force and torque model
//!
//! Given the boat, the wind and the control headings, derives every force
//! acting on the hull and the torque each one produces about the centre of
//! gravity:
//! - mainsail / jib: apparent wind hitting the sail face-on
//! - keel: water resisting sideways motion
//! - axial drag: linear friction on the hull
//! - rudder: water hitting the deflected blade (torque only)
//! - gravity: restoring moment from the rolled mass centre
//! - angular drag: linear damping of every rotation rate
//!
//! Torques are raw `r × F` rescaled per axis by the moment-of-inertia
//! factors; there is no inertia tensor.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use sail_types::{
    rotate_2d, BoatState, ControlSurfaces, PhysicsConstants, Vec3, WindState,
};

/// Every intermediate force and torque of one evaluation, kept for the
/// periodic diagnostic line and the telemetry snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ForceBreakdown {
    pub wind: Vec3,
    pub apparent_wind: Vec3,

    pub mainsail_force: Vec3,
    pub jib_force: Vec3,
    pub keel_force: Vec3,
    pub axial_drag_force: Vec3,
    pub rudder_force: Vec3,

    pub mainsail_torque: Vec3,
    pub jib_torque: Vec3,
    pub keel_torque: Vec3,
    pub rudder_torque: Vec3,
    pub gravity_torque: Vec3,
    pub angular_drag_torque: Vec3,

    pub net_force: Vec3,
    pub net_torque: Vec3,
}

/// Torque of `force` applied at body-frame `point`, scaled to angular
/// acceleration by the per-axis moment-of-inertia factors.
fn torque_on_part(force: Vec3, point: Vec3, constants: &PhysicsConstants) -> Vec3 {
    constants.moment_of_inertia_scale.mul_elem(&point.cross(&force))
}

/// Where the rudder pushes: the blade's centre of effort swings around the
/// hinge with the deflection.
pub fn rudder_force_center(rudder_heading: f64, constants: &PhysicsConstants) -> Vec3 {
    let arm = constants.rudder_arm;
    let (x, y) = rotate_2d(arm.x, arm.y, rudder_heading - PI);
    constants.rudder_pivot + Vec3::new(x, y, arm.z)
}

/// Mass centre displaced in the x/z plane by the current roll
pub fn mass_center(roll: f64, constants: &PhysicsConstants) -> Vec3 {
    let base = constants.base_mass_center;
    let (x, z) = rotate_2d(base.x, base.z, roll);
    Vec3::new(x, base.y, z)
}

/// Evaluate the full force model. Pure; no error cases.
pub fn compute_forces(
    boat: &BoatState,
    wind: &WindState,
    controls: &ControlSurfaces,
    constants: &PhysicsConstants,
) -> ForceBreakdown {
    let heading = boat.heading();
    let water_flow = -boat.velocity;

    let wind_velocity = wind.velocity();
    let apparent_wind = wind_velocity - boat.velocity;

    // Sails only feel the part of the apparent wind striking them face-on
    let mainsail_force = apparent_wind
        .normal_component(heading + controls.mainsail_heading)
        .scale(constants.mainsail_coefficient);
    let jib_force = apparent_wind
        .normal_component(heading + controls.jib_heading)
        .scale(constants.jib_coefficient);

    let keel_force = water_flow
        .normal_component(heading)
        .scale(constants.keel_coefficient);
    let axial_drag_force = water_flow
        .tangent_component(heading + FRAC_PI_2)
        .scale(constants.axial_friction);
    let rudder_force = water_flow
        .normal_component(heading + controls.rudder_heading)
        .scale(constants.rudder_coefficient);

    let mainsail_torque = torque_on_part(mainsail_force, constants.mainsail_force_center, constants);
    let jib_torque = torque_on_part(jib_force, constants.jib_force_center, constants);
    let keel_torque = torque_on_part(keel_force, constants.keel_force_center, constants);
    let rudder_torque = torque_on_part(
        rudder_force,
        rudder_force_center(controls.rudder_heading, constants),
        constants,
    );
    let gravity_torque = torque_on_part(
        constants.gravity,
        mass_center(boat.roll(), constants),
        constants,
    );
    let angular_drag_torque = (-boat.angular_velocity).scale(constants.angular_friction);

    // The rudder steers but is too small to move the hull on its own
    let net_force = mainsail_force + jib_force + keel_force + axial_drag_force;
    let net_torque = mainsail_torque
        + jib_torque
        + keel_torque
        + rudder_torque
        + gravity_torque
        + angular_drag_torque;

    ForceBreakdown {
        wind: wind_velocity,
        apparent_wind,
        mainsail_force,
        jib_force,
        keel_force,
        axial_drag_force,
        rudder_force,
        mainsail_torque,
        jib_torque,
        keel_torque,
        rudder_torque,
        gravity_torque,
        angular_drag_torque,
        net_force,
        net_torque,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sail_types::heading_to_direction;

    fn still_boat() -> BoatState {
        BoatState::default()
    }

    #[test]
    fn still_boat_in_calm_has_no_forces() {
        let calm = WindState::new(0.7, 0.0);
        let out = compute_forces(
            &still_boat(),
            &calm,
            &ControlSurfaces::default(),
            &PhysicsConstants::default(),
        );
        assert_eq!(out.net_force.magnitude(), 0.0);
        assert_eq!(out.net_torque.magnitude(), 0.0);
        assert_eq!(out.rudder_torque.magnitude(), 0.0);
    }

    #[test]
    fn rudder_force_is_excluded_from_net_force() {
        let boat = BoatState {
            velocity: Vec3::new(1.5, -3.0, 0.0),
            ..Default::default()
        };
        let controls = ControlSurfaces { rudder_heading: 2.0 * PI / 3.0, ..Default::default() };
        let calm = WindState::new(0.0, 0.0);
        let out = compute_forces(&boat, &calm, &controls, &PhysicsConstants::default());

        assert!(out.rudder_force.magnitude() > 0.0);
        let expected = out.mainsail_force + out.jib_force + out.keel_force + out.axial_drag_force;
        assert_eq!(out.net_force, expected);
    }

    #[test]
    fn keel_resists_sideways_motion() {
        // heading north, drifting east
        let boat = BoatState {
            velocity: Vec3::new(2.0, 0.0, 0.0),
            ..Default::default()
        };
        let calm = WindState::new(0.0, 0.0);
        let out = compute_forces(&boat, &calm, &ControlSurfaces::default(), &PhysicsConstants::default());
        assert!(out.keel_force.x < 0.0);
        assert_abs_diff_eq!(out.keel_force.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn square_sail_pushes_downwind() {
        let constants = PhysicsConstants::default();
        let wind = WindState::new(0.0, 2.0);
        // Sail across the boat, facing the wind
        let controls = ControlSurfaces {
            mainsail_heading: -PI / 2.0,
            jib_heading: -PI / 2.0,
            rudder_heading: PI,
            ..Default::default()
        };
        let out = compute_forces(&still_boat(), &wind, &controls, &constants);

        let forward = heading_to_direction(0.0);
        assert_abs_diff_eq!(out.mainsail_force.dot(&forward), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.jib_force.dot(&forward), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rolled_mass_centre_rights_the_boat() {
        let constants = PhysicsConstants::default();
        let calm = WindState::new(0.0, 0.0);
        for roll in [0.2, -0.2, 0.6] {
            let boat = BoatState {
                orientation: Vec3::new(0.0, roll, 0.0),
                ..Default::default()
            };
            let out = compute_forces(&boat, &calm, &ControlSurfaces::default(), &constants);
            assert!(
                out.gravity_torque.y * roll < 0.0,
                "roll {roll} gave gravity torque {:?}",
                out.gravity_torque
            );
        }
    }

    #[test]
    fn centred_rudder_arm_points_aft() {
        let c = rudder_force_center(PI, &PhysicsConstants::default());
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 35.0, epsilon = 1e-9);
    }

    #[test]
    fn angular_drag_opposes_rotation() {
        let boat = BoatState {
            angular_velocity: Vec3::new(0.0, 0.4, -2.0),
            ..Default::default()
        };
        let calm = WindState::new(0.0, 0.0);
        let out = compute_forces(&boat, &calm, &ControlSurfaces::default(), &PhysicsConstants::default());
        assert_abs_diff_eq!(out.angular_drag_torque.y, -0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(out.angular_drag_torque.z, 0.5, epsilon = 1e-12);
    }
}
