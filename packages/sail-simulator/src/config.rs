//! config.rs — config.toml layout and loading
//!
//! Every section is optional; missing keys fall back to the reference
//! tuning. A missing file falls back to the copy embedded at build time.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use sail_types::PhysicsConstants;

use crate::autopilot::Autopilot;
use crate::error::SimError;
use crate::render::RenderConfig;
use crate::scenarios::ScenarioConfig;

/// Shipped defaults, also used when no config file is found
pub const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FullConfig {
    pub simulation: SimulationConfig,
    pub scenario: ScenarioConfig,
    pub autopilot: AutopilotConfig,
    pub physics: PhysicsConstants,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Nominal tick length, seconds
    pub timestep_s: f64,
    /// Simulated seconds per real second
    pub speed: f64,
    /// Integrate with the nominal step instead of measured wall time
    pub fixed_step: bool,
    /// Stop after this many ticks (runs forever when absent)
    pub max_ticks: Option<u64>,
    /// Seed for the wind walk (entropy when absent)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep_s: 0.01,
            speed: 1.0,
            fixed_step: false,
            max_ticks: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject timesteps and speeds the loop can't pace
    pub fn validate(&self) -> Result<(), SimError> {
        for (key, value) in [("simulation.timestep_s", self.timestep_s), ("simulation.speed", self.speed)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidSetting { key, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    pub rudder_hard_over_deg: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self { rudder_hard_over_deg: 60.0 }
    }
}

impl AutopilotConfig {
    pub fn autopilot(&self) -> Autopilot {
        Autopilot::new(self.rudder_hard_over_deg.to_radians())
    }
}

impl FullConfig {
    pub fn from_toml(raw: &str) -> Result<Self, SimError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read `path`, or the embedded defaults if it cannot be read
    pub fn load(path: &Path) -> Result<Self, SimError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                info!("Loaded config from {}", path.display());
                Self::from_toml(&raw)
            }
            Err(e) => {
                warn!("Could not read {}: {e}, using built-in defaults", path.display());
                Self::from_toml(DEFAULT_CONFIG)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let cfg = FullConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg, FullConfig::default());
    }

    #[test]
    fn empty_config_is_all_defaults() {
        assert_eq!(FullConfig::from_toml("").unwrap(), FullConfig::default());
    }

    #[test]
    fn partial_sections_override_single_keys() {
        let cfg = FullConfig::from_toml(
            r#"
            [simulation]
            timestep_s = 0.02
            max_ticks = 500

            [physics]
            rudder_coefficient = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.simulation.timestep_s, 0.02);
        assert_eq!(cfg.simulation.max_ticks, Some(500));
        assert_eq!(cfg.simulation.speed, 1.0);
        assert_eq!(cfg.physics.rudder_coefficient, 4.0);
        assert_eq!(cfg.physics.keel_coefficient, 1.0);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = FullConfig::from_toml("[simulation]\ntimestep_s = \"fast\"").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn unpaceable_timing_is_rejected() {
        for timestep_s in [0.0, -0.01, f64::INFINITY, f64::NAN] {
            let sim = SimulationConfig { timestep_s, ..Default::default() };
            assert!(matches!(
                sim.validate(),
                Err(SimError::InvalidSetting { key: "simulation.timestep_s", .. })
            ));
        }
        for speed in [0.0, -2.0, f64::INFINITY, f64::NAN] {
            let sim = SimulationConfig { speed, ..Default::default() };
            assert!(matches!(
                sim.validate(),
                Err(SimError::InvalidSetting { key: "simulation.speed", .. })
            ));
        }
    }

    #[test]
    fn missing_file_uses_embedded_defaults() {
        let cfg = FullConfig::load(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(cfg, FullConfig::default());
    }

    #[test]
    fn rudder_hard_over_is_degrees() {
        let pilot = AutopilotConfig::default().autopilot();
        assert_abs_diff_eq!(pilot.rudder_hard_over, std::f64::consts::FRAC_PI_3, epsilon = 1e-12);
    }
}
