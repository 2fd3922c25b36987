//! Demo state - the single value the reducer transforms.
//!
//! The state is never mutated in place by callers. The reducer takes a
//! reference and returns a fresh value, so any snapshot stays valid.

mod message;

pub use message::*;

use demo_script::{RiskState, Scenario};
use serde::{Deserialize, Serialize};

/// Progress of the simulated ERP connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ErpStatus {
    #[default]
    Disconnected,
    Connected,
    Scanning,
    Found { documents: u32 },
}

impl ErpStatus {
    /// Button label for the integration card.
    pub fn label(&self) -> String {
        match self {
            ErpStatus::Disconnected => "Connect & Scan BOLs".to_string(),
            ErpStatus::Connected => "Connected".to_string(),
            ErpStatus::Scanning => "Scanning BOLs...".to_string(),
            ErpStatus::Found { documents } => format!("{} BOLs Found", documents),
        }
    }
}

/// Complete controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoState {
    cursor: usize,
    auto_playing: bool,
    /// Bumped whenever the auto-play timer is armed; stale ticks carry an
    /// older value and are dropped.
    auto_play_epoch: u64,
    messages: Vec<DisplayedMessage>,
    erp: ErpStatus,
}

impl DemoState {
    /// State at mount: cursor on the opening line.
    pub fn initial(scenario: &Scenario) -> Self {
        Self {
            cursor: 0,
            auto_playing: false,
            auto_play_epoch: 0,
            messages: script_window(scenario, 0),
            erp: ErpStatus::Disconnected,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn auto_play_epoch(&self) -> u64 {
        self.auto_play_epoch
    }

    /// Currently displayed chat list.
    pub fn messages(&self) -> &[DisplayedMessage] {
        &self.messages
    }

    pub fn erp(&self) -> ErpStatus {
        self.erp
    }

    pub fn is_at_end(&self, scenario: &Scenario) -> bool {
        scenario.script().is_last(self.cursor)
    }

    /// Risk derived from the cursor.
    pub fn risk(&self, scenario: &Scenario) -> RiskState {
        scenario.risk_at(self.cursor)
    }

    pub(crate) fn with_cursor(&self, scenario: &Scenario, cursor: usize) -> Self {
        let cursor = cursor.min(scenario.last_step());
        Self {
            cursor,
            messages: script_window(scenario, cursor),
            ..self.clone()
        }
    }

    pub(crate) fn with_auto_play(&self, on: bool) -> Self {
        Self {
            auto_playing: on,
            auto_play_epoch: if on {
                self.auto_play_epoch + 1
            } else {
                self.auto_play_epoch
            },
            ..self.clone()
        }
    }

    /// Re-arm the auto-play timer without changing the flag.
    pub(crate) fn rearmed(&self) -> Self {
        Self {
            auto_play_epoch: self.auto_play_epoch + 1,
            ..self.clone()
        }
    }

    pub(crate) fn with_message(&self, message: DisplayedMessage) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self {
            messages,
            ..self.clone()
        }
    }

    pub(crate) fn with_messages(&self, messages: Vec<DisplayedMessage>) -> Self {
        Self {
            messages,
            ..self.clone()
        }
    }

    pub(crate) fn with_erp(&self, erp: ErpStatus) -> Self {
        Self {
            erp,
            ..self.clone()
        }
    }
}

/// The scripted prefix for `cursor`, as displayed messages.
pub fn script_window(scenario: &Scenario, cursor: usize) -> Vec<DisplayedMessage> {
    scenario
        .script()
        .visible(cursor)
        .iter()
        .map(|m| DisplayedMessage::from_script(m, MessageOrigin::Script))
        .collect()
}
