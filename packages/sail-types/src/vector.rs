//! vector.rs — 3D vector algebra used by the force model and renderer
//!
//! Frame conventions:
//! - x/y span the sea surface (screen plane, y grows "south"/down)
//! - z is up
//!
//! Normal/tangent projections work in the horizontal plane only; the z
//! component of the projected force is discarded.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::heading::heading_to_direction;

/// 3D vector, immutable value semantics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }
    pub const fn zero() -> Self { Self { x: 0.0, y: 0.0, z: 0.0 } }

    pub fn scale(&self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    /// Componentwise (Hadamard) product
    pub fn mul_elem(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. A zero vector normalizes to zero.
    pub fn normalized(&self) -> Vec3 {
        *self / self.magnitude()
    }

    /// In-plane perpendicular: (x, y) rotated +90° in the math convention
    pub fn perpendicular_xy(&self) -> Vec3 {
        Vec3::new(-self.y, self.x, 0.0)
    }

    /// Component of `self` perpendicular (in the horizontal plane) to a
    /// surface lying along `surface_heading`.
    ///
    /// Flow striking a flat sail, keel or rudder only pushes through the part
    /// of it that hits the surface face-on.
    pub fn normal_component(&self, surface_heading: f64) -> Vec3 {
        let normal = heading_to_direction(surface_heading).perpendicular_xy();
        normal.scale(self.dot(&normal))
    }

    /// Component of `self` along the direction of `surface_heading`
    pub fn tangent_component(&self, surface_heading: f64) -> Vec3 {
        let along = heading_to_direction(surface_heading);
        along.scale(self.dot(&along))
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

/// Division by zero yields the zero vector rather than Inf/NaN.
impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        if rhs == 0.0 {
            return Vec3::zero();
        }
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Rotate the pair (x, y) by `theta` radians (counter-clockwise in the math
/// convention). Used for body-frame offsets in any coordinate plane.
pub fn rotate_2d(x: f64, y: f64, theta: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}
