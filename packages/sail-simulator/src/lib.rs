//! # sail-simulator
//!
//! Real-time rigid-body model of a single sailboat.
//!
//! - [`forces`]: sail, keel, rudder, drag and gravity forces/torques
//! - [`integrator`]: semi-implicit Euler step with explicit Δt
//! - [`autopilot`]: bang-bang helm and square-to-the-wind sail trim
//! - [`scenarios`]: wind random walk and named presets
//! - [`render`]: top-down grayscale schematic, written as PNG
//! - [`boat_sim`]: owns the world and runs one tick
//!
//! The `sail-sim` binary paces ticks in real time and renders once per
//! simulated second.

pub mod autopilot;
pub mod boat_sim;
pub mod clock;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod render;
pub mod scenarios;
pub mod telemetry;

pub use boat_sim::BoatSim;
pub use error::SimError;
