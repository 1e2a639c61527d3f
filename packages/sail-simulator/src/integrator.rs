//! integrator.rs — semi-implicit Euler stepping
//!
//! Rates are updated from force and torque first; position and orientation
//! then move with the already-updated rates. `dt` is always explicit so the
//! same step runs under the wall clock, a fixed step, or a test.

use sail_types::{BoatState, ControlSurfaces, PhysicsConstants, Vec3, WindState};

use crate::forces::{compute_forces, ForceBreakdown};

/// Advance `boat` by `dt` seconds under constant `net_force` / `net_torque`
pub fn integrate(boat: &BoatState, net_force: Vec3, net_torque: Vec3, dt: f64) -> BoatState {
    let velocity = boat.velocity + net_force.scale(dt);
    let angular_velocity = boat.angular_velocity + net_torque.scale(dt);
    BoatState {
        position: boat.position + velocity.scale(dt),
        velocity,
        orientation: boat.orientation + angular_velocity.scale(dt),
        angular_velocity,
    }
}

/// One physics tick: force model followed by integration
pub fn step(
    boat: &BoatState,
    wind: &WindState,
    controls: &ControlSurfaces,
    constants: &PhysicsConstants,
    dt: f64,
) -> (BoatState, ForceBreakdown) {
    let forces = compute_forces(boat, wind, controls, constants);
    let next = integrate(boat, forces.net_force, forces.net_torque, dt);
    (next, forces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_inputs_from_rest() {
        let force = Vec3::new(0.3, -1.7, 0.0);
        let torque = Vec3::new(0.0, 0.02, -0.45);
        for dt in [0.01, 0.016, 0.25, 1.0] {
            let next = integrate(&BoatState::default(), force, torque, dt);
            assert_eq!(next.velocity, force.scale(dt));
            assert_eq!(next.angular_velocity, torque.scale(dt));
            assert_eq!(next.position, force.scale(dt).scale(dt));
            assert_eq!(next.orientation, torque.scale(dt).scale(dt));
        }
    }

    #[test]
    fn position_uses_updated_velocity() {
        let boat = BoatState {
            velocity: Vec3::new(1.0, 0.0, 0.0),
            ..Default::default()
        };
        let next = integrate(&boat, Vec3::new(2.0, 0.0, 0.0), Vec3::zero(), 0.5);
        assert_abs_diff_eq!(next.velocity.x, 2.0, epsilon = 1e-12);
        // explicit Euler would give 0.5
        assert_abs_diff_eq!(next.position.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_dt_is_identity() {
        let boat = BoatState {
            position: Vec3::new(4.0, -2.0, 0.0),
            velocity: Vec3::new(1.0, 1.0, 0.0),
            orientation: Vec3::new(0.0, 0.1, 0.7),
            angular_velocity: Vec3::new(0.0, 0.0, 0.3),
        };
        let next = integrate(&boat, Vec3::new(5.0, 5.0, 5.0), Vec3::new(1.0, 1.0, 1.0), 0.0);
        assert_eq!(next, boat);
    }

    #[test]
    fn calm_still_boat_stays_put() {
        let calm = WindState::new(0.3, 0.0);
        let mut boat = BoatState::default();
        for _ in 0..500 {
            boat = step(&boat, &calm, &ControlSurfaces::default(), &PhysicsConstants::default(), 0.01).0;
        }
        assert_eq!(boat.position.magnitude(), 0.0);
        assert_eq!(boat.orientation.magnitude(), 0.0);
    }
}
