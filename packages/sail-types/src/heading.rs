//! heading.rs — compass heading ⇄ direction vector
//!
//! Compass headings: 0 = north (up on screen), positive turns clockwise.
//! `cos`/`sin` measure from +x, counter-clockwise in math terms. With y
//! growing downward on screen the two differ by a fixed quarter turn, and
//! this module is the only place that offset is applied.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::vector::Vec3;

/// Compass heading → angle understood by `cos`/`sin`
pub fn heading_to_native(heading: f64) -> f64 {
    heading - FRAC_PI_2
}

/// Angle understood by `atan2` → compass heading (not wrapped)
pub fn native_to_heading(native: f64) -> f64 {
    native + FRAC_PI_2
}

/// Unit vector in the horizontal plane pointing along `heading`
pub fn heading_to_direction(heading: f64) -> Vec3 {
    let (sin, cos) = heading_to_native(heading).sin_cos();
    Vec3::new(cos, sin, 0.0)
}

/// Compass heading of the horizontal part of `v`, wrapped to (-π, π].
/// The zero vector maps to heading 0.
pub fn direction_to_heading(v: &Vec3) -> f64 {
    wrap_angle(native_to_heading(v.y.atan2(v.x)))
}

/// Wrap an angle into (-π, π]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Angular distance on the circle
    fn angle_diff(a: f64, b: f64) -> f64 {
        wrap_angle(a - b).abs()
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let north = heading_to_direction(0.0);
        assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(north.y, -1.0, epsilon = 1e-12);

        let east = heading_to_direction(FRAC_PI_2);
        assert_abs_diff_eq!(east.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(east.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn heading_round_trip() {
        for i in -40..=40 {
            let heading = i as f64 * 0.37;
            let back = direction_to_heading(&heading_to_direction(heading));
            assert!(
                angle_diff(back, heading) < 1e-9,
                "heading {heading} came back as {back}"
            );
        }
    }

    #[test]
    fn direction_is_unit_and_horizontal() {
        for i in 0..64 {
            let d = heading_to_direction(i as f64 * TAU / 64.0);
            assert_abs_diff_eq!(d.magnitude(), 1.0, epsilon = 1e-12);
            assert_eq!(d.z, 0.0);
        }
    }

    #[test]
    fn wrap_angle_range() {
        assert_abs_diff_eq!(wrap_angle(3.0 * PI - 0.5), PI - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(-0.25), -0.25, epsilon = 1e-12);
    }
}
