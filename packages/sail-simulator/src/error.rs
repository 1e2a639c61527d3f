//! error.rs — simulator error type
//!
//! Only startup errors (config, preset) are fatal. Frame and telemetry write
//! failures are logged by the main loop and the frame is dropped.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to write frame to {}: {source}", .path.display())]
    FrameWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write telemetry to {}: {source}", .path.display())]
    Telemetry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode telemetry: {0}")]
    TelemetryEncode(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{key} must be positive and finite, got {value}")]
    InvalidSetting { key: &'static str, value: f64 },

    #[error("unknown preset '{0}' (expected default, gusty, dead_run, beam_reach or becalmed)")]
    UnknownPreset(String),
}
