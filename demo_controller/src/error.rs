//! Error types for the controller crate.

use demo_script::ScriptError;
use thiserror::Error;

/// Problems with controller configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("auto_play_interval_ms must be greater than zero")]
    ZeroInterval,
}

/// Errors surfaced by [`crate::DemoController`].
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("demo controller has stopped")]
    Stopped,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
