//! Errors raised while building or loading scenario content.

use thiserror::Error;

/// Failures when constructing a script, projector or scenario.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script must contain at least one message")]
    EmptyScript,

    #[error("risk score {score} is outside 0..=100")]
    ScoreOutOfRange { score: u8 },

    #[error("breakpoint at step {step} does not come after step {previous}")]
    UnorderedBreakpoints { previous: usize, step: usize },

    #[error("{what} references step {step}, but the script ends at step {last_step}")]
    StepOutOfRange {
        what: String,
        step: usize,
        last_step: usize,
    },

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
