//! Reducer - the pure `(state, action) -> (state, effects)` function.
//!
//! # Transitions
//!
//! The cursor only ever moves forward by one, through `Advance` or an
//! auto-play tick. Reaching the terminal step stops auto-play. Visitor text,
//! demo replies and the ERP flow change the displayed list but never the
//! cursor, so risk is unaffected by them.

mod action;

pub use action::*;

use demo_script::Scenario;

use crate::state::{DemoState, DisplayedMessage, ErpStatus, MessageOrigin};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DemoState,
    pub effects: Vec<Effect>,
    /// Set when the action was a no-op.
    pub ignored: Option<Ignored>,
}

impl Transition {
    fn applied(state: DemoState, effects: Vec<Effect>) -> Self {
        Self {
            state,
            effects,
            ignored: None,
        }
    }

    fn ignored(state: &DemoState, reason: Ignored) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            ignored: Some(reason),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.ignored.is_none()
    }
}

/// Apply `action` to `state`.
pub fn reduce(scenario: &Scenario, state: &DemoState, action: DemoAction) -> Transition {
    match action {
        DemoAction::Advance => step_forward(scenario, state),

        DemoAction::ToggleAutoPlay => {
            if state.auto_playing() {
                Transition::applied(state.with_auto_play(false), vec![Effect::CancelAutoPlay])
            } else if state.is_at_end(scenario) {
                Transition::ignored(state, Ignored::AtEnd)
            } else {
                let next = state.with_auto_play(true);
                let epoch = next.auto_play_epoch();
                Transition::applied(next, vec![Effect::ArmAutoPlay { epoch }])
            }
        }

        DemoAction::AutoPlayTick { epoch } => {
            if !state.auto_playing() {
                Transition::ignored(state, Ignored::AutoPlayOff)
            } else if epoch != state.auto_play_epoch() {
                Transition::ignored(state, Ignored::StaleTick)
            } else if state.is_at_end(scenario) {
                Transition::applied(state.with_auto_play(false), vec![Effect::CancelAutoPlay])
            } else {
                step_forward(scenario, state)
            }
        }

        DemoAction::SubmitUserText { text } => {
            if text.trim().is_empty() {
                return Transition::ignored(state, Ignored::EmptyText);
            }
            Transition::applied(
                state.with_message(DisplayedMessage::visitor(text)),
                vec![Effect::Schedule {
                    action: DemoAction::DeliverDemoReply,
                    delay: Delay::Reply,
                }],
            )
        }

        DemoAction::DeliverDemoReply => Transition::applied(
            state.with_message(DisplayedMessage::demo_reply(scenario.demo_reply.clone())),
            Vec::new(),
        ),

        DemoAction::ConnectErp => {
            if state.erp() != ErpStatus::Disconnected {
                return Transition::ignored(state, Ignored::AlreadyConnected);
            }
            Transition::applied(
                state.with_erp(ErpStatus::Connected),
                vec![Effect::Schedule {
                    action: DemoAction::ErpScanStarted,
                    delay: Delay::ErpHandshake,
                }],
            )
        }

        DemoAction::ErpScanStarted => {
            if state.erp() != ErpStatus::Connected {
                return Transition::ignored(state, Ignored::OutOfOrder);
            }
            Transition::applied(
                state.with_erp(ErpStatus::Scanning),
                vec![Effect::Schedule {
                    action: DemoAction::ErpScanFinished,
                    delay: Delay::ErpScan,
                }],
            )
        }

        DemoAction::ErpScanFinished => {
            if state.erp() != ErpStatus::Scanning {
                return Transition::ignored(state, Ignored::OutOfOrder);
            }
            let scan = &scenario.erp_scan;
            let transcript = scan
                .transcript
                .iter()
                .map(|m| DisplayedMessage::from_script(m, MessageOrigin::Integration))
                .collect();
            Transition::applied(
                state
                    .with_erp(ErpStatus::Found {
                        documents: scan.documents_found,
                    })
                    .with_messages(transcript),
                Vec::new(),
            )
        }
    }
}

/// Move the cursor by one and keep the auto-play timer consistent.
fn step_forward(scenario: &Scenario, state: &DemoState) -> Transition {
    if state.is_at_end(scenario) {
        return Transition::ignored(state, Ignored::AtEnd);
    }

    let next = state.with_cursor(scenario, state.cursor() + 1);

    if !next.auto_playing() {
        return Transition::applied(next, Vec::new());
    }

    if next.is_at_end(scenario) {
        Transition::applied(next.with_auto_play(false), vec![Effect::CancelAutoPlay])
    } else {
        let next = next.rearmed();
        let epoch = next.auto_play_epoch();
        Transition::applied(next, vec![Effect::ArmAutoPlay { epoch }])
    }
}
