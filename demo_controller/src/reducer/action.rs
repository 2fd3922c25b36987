//! Inputs to the reducer and the effects it requests.

use serde::{Deserialize, Serialize};

/// Everything that can happen to the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemoAction {
    /// "Next" button.
    Advance,
    /// "Auto-Play" / "Stop" button.
    ToggleAutoPlay,
    /// Auto-play timer fired for the given arming.
    AutoPlayTick { epoch: u64 },
    /// Free text typed into the chat box.
    SubmitUserText { text: String },
    /// Reply timer fired.
    DeliverDemoReply,
    /// "Connect & Scan BOLs" button.
    ConnectErp,
    ErpScanStarted,
    ErpScanFinished,
}

impl DemoAction {
    pub fn name(&self) -> &'static str {
        match self {
            DemoAction::Advance => "advance",
            DemoAction::ToggleAutoPlay => "toggle_auto_play",
            DemoAction::AutoPlayTick { .. } => "auto_play_tick",
            DemoAction::SubmitUserText { .. } => "submit_user_text",
            DemoAction::DeliverDemoReply => "deliver_demo_reply",
            DemoAction::ConnectErp => "connect_erp",
            DemoAction::ErpScanStarted => "erp_scan_started",
            DemoAction::ErpScanFinished => "erp_scan_finished",
        }
    }
}

/// Symbolic delay, resolved to a duration by [`crate::ControllerConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delay {
    AutoPlay,
    Reply,
    ErpHandshake,
    ErpScan,
}

/// A side effect the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel any pending auto-play tick and schedule a new one for `epoch`.
    ArmAutoPlay { epoch: u64 },
    /// Cancel the pending auto-play tick, if any.
    CancelAutoPlay,
    /// Dispatch `action` once `delay` has elapsed.
    Schedule { action: DemoAction, delay: Delay },
}

/// Why an action left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// Cursor is already on the terminal step.
    AtEnd,
    /// Text was empty or whitespace.
    EmptyText,
    /// Tick belongs to an earlier arming of the timer.
    StaleTick,
    /// Tick arrived while auto-play was off.
    AutoPlayOff,
    /// ERP connection was already started.
    AlreadyConnected,
    /// ERP stage arrived in the wrong state.
    OutOfOrder,
}

impl std::fmt::Display for Ignored {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Ignored::AtEnd => "at end of script",
            Ignored::EmptyText => "empty text",
            Ignored::StaleTick => "stale tick",
            Ignored::AutoPlayOff => "auto-play off",
            Ignored::AlreadyConnected => "already connected",
            Ignored::OutOfOrder => "out of order",
        };
        f.write_str(s)
    }
}
