//! scenarios.rs — wind field and named starting scenarios
//!
//! The wind is a single uniform field. Its direction can optionally wander
//! as a random walk each tick; with a zero step (the default) it is constant.
//!
//! Presets tweak the configured scenario from the CLI (`--preset`), e.g.
//! to put the wind dead astern of the target heading.

use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::Deserialize;

use sail_types::WindState;

use crate::error::SimError;

// ── Wind model ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindModel {
    /// Largest direction change per tick, radians. Zero disables the walk.
    pub walk_step: f64,
}

impl WindModel {
    pub fn new(walk_step: f64) -> Self { Self { walk_step } }

    /// Random-walk the wind direction by up to ±`walk_step`
    pub fn update<R: Rng + ?Sized>(&self, wind: &mut WindState, rng: &mut R) {
        if self.walk_step == 0.0 {
            return;
        }
        let step = Uniform::new_inclusive(-1.0, 1.0);
        wind.direction += step.sample(rng) * self.walk_step;
    }
}

// ── Scenario config ───────────────────────────────────────────────────────────

/// `[scenario]` section of config.toml. Angles are compass degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub wind_direction_deg: f64,
    pub wind_speed: f64,
    pub target_heading_deg: f64,
    pub wind_walk_step_deg: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            wind_direction_deg: 30.0,
            wind_speed: 2.0,
            target_heading_deg: -30.0,
            wind_walk_step_deg: 0.0,
        }
    }
}

impl ScenarioConfig {
    pub fn wind(&self) -> WindState {
        WindState::new(self.wind_direction_deg.to_radians(), self.wind_speed)
    }

    pub fn target_heading(&self) -> f64 {
        self.target_heading_deg.to_radians()
    }

    pub fn wind_model(&self) -> WindModel {
        WindModel::new(self.wind_walk_step_deg.to_radians())
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Config file as written
    Default,
    /// Wind direction wanders up to 1/64 of a turn per tick
    Gusty,
    /// Wind from dead astern of the target heading
    DeadRun,
    /// Wind across the target heading from port
    BeamReach,
    /// No wind; the boat only coasts
    Becalmed,
}

pub const PRESET_NAMES: [&str; 5] = ["default", "gusty", "dead_run", "beam_reach", "becalmed"];

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "gusty" => Ok(Self::Gusty),
            "dead_run" => Ok(Self::DeadRun),
            "beam_reach" => Ok(Self::BeamReach),
            "becalmed" => Ok(Self::Becalmed),
            other => Err(SimError::UnknownPreset(other.to_string())),
        }
    }
}

impl Preset {
    /// Apply this preset on top of the configured scenario
    pub fn apply(&self, base: &ScenarioConfig) -> ScenarioConfig {
        match self {
            Self::Default => *base,
            Self::Gusty => ScenarioConfig { wind_walk_step_deg: 180.0 / 32.0, ..*base },
            Self::DeadRun => ScenarioConfig {
                wind_direction_deg: base.target_heading_deg,
                ..*base
            },
            Self::BeamReach => ScenarioConfig {
                wind_direction_deg: base.target_heading_deg + 90.0,
                ..*base
            },
            Self::Becalmed => ScenarioConfig { wind_speed: 0.0, ..*base },
        }
    }
}
