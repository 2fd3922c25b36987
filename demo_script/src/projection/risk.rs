//! Risk Projector - maps a step to a score, a level and the alternate-route flag.

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};

/// Coarse risk bucket shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }

    /// Gauge color used by the dashboard for this level.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::Low => "#10b981",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the displayed risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskState {
    /// Score from 0 to 100.
    pub score: u8,
    pub level: RiskLevel,
    #[serde(default)]
    pub show_alternate_route: bool,
}

impl RiskState {
    pub fn new(score: u8, level: RiskLevel) -> Self {
        Self {
            score,
            level,
            show_alternate_route: false,
        }
    }

    /// Mark the alternate route as shown.
    pub fn with_alternate_route(mut self) -> Self {
        self.show_alternate_route = true;
        self
    }

    /// Badge text on the risk card.
    pub fn phase_label(&self) -> &'static str {
        if self.show_alternate_route {
            "After Correction"
        } else {
            "Before Correction"
        }
    }
}

/// A literal threshold: from `min_step` onward the projector reports `state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakpoint {
    pub min_step: usize,
    #[serde(flatten)]
    pub state: RiskState,
}

impl RiskBreakpoint {
    pub fn new(min_step: usize, state: RiskState) -> Self {
        Self { min_step, state }
    }
}

/// Deterministic mapping from a playback step to a [`RiskState`].
///
/// The breakpoints are keyed to step positions of one particular script.
/// Changing the script means re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjector")]
pub struct RiskProjector {
    baseline: RiskState,
    breakpoints: Vec<RiskBreakpoint>,
}

#[derive(Deserialize)]
struct RawProjector {
    baseline: RiskState,
    #[serde(default)]
    breakpoints: Vec<RiskBreakpoint>,
}

impl TryFrom<RawProjector> for RiskProjector {
    type Error = ScriptError;

    fn try_from(raw: RawProjector) -> ScriptResult<Self> {
        Self::new(raw.baseline, raw.breakpoints)
    }
}

impl RiskProjector {
    /// Build a projector. Scores must lie in `0..=100` and breakpoint steps
    /// must be strictly increasing.
    pub fn new(baseline: RiskState, breakpoints: Vec<RiskBreakpoint>) -> ScriptResult<Self> {
        check_score(baseline.score)?;

        let mut previous: Option<usize> = None;
        for bp in &breakpoints {
            check_score(bp.state.score)?;
            if let Some(prev) = previous {
                if bp.min_step <= prev {
                    return Err(ScriptError::UnorderedBreakpoints {
                        previous: prev,
                        step: bp.min_step,
                    });
                }
            }
            previous = Some(bp.min_step);
        }

        Ok(Self {
            baseline,
            breakpoints,
        })
    }

    /// Thresholds matching [`crate::Script::compliance_demo`].
    pub fn compliance_demo() -> Self {
        Self {
            baseline: RiskState::new(72, RiskLevel::High),
            breakpoints: vec![
                RiskBreakpoint::new(2, RiskState::new(65, RiskLevel::High)),
                RiskBreakpoint::new(4, RiskState::new(55, RiskLevel::Medium)),
                RiskBreakpoint::new(6, RiskState::new(45, RiskLevel::Medium).with_alternate_route()),
                RiskBreakpoint::new(8, RiskState::new(35, RiskLevel::Low).with_alternate_route()),
            ],
        }
    }

    /// The state shown before any breakpoint is reached.
    pub fn baseline(&self) -> RiskState {
        self.baseline
    }

    pub fn breakpoints(&self) -> &[RiskBreakpoint] {
        &self.breakpoints
    }

    /// Project a step: the last breakpoint whose threshold is at or below
    /// `step`, or the baseline.
    pub fn project(&self, step: usize) -> RiskState {
        self.breakpoints
            .iter()
            .rev()
            .find(|bp| step >= bp.min_step)
            .map(|bp| bp.state)
            .unwrap_or(self.baseline)
    }

    /// Highest step any breakpoint refers to.
    pub fn max_step(&self) -> Option<usize> {
        self.breakpoints.last().map(|bp| bp.min_step)
    }
}

fn check_score(score: u8) -> ScriptResult<()> {
    if score > 100 {
        return Err(ScriptError::ScoreOutOfRange { score });
    }
    Ok(())
}
