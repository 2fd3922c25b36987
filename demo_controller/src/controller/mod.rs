//! Conversation controller - runs the reducer on a tokio task.
//!
//! The controller is an actor. Button presses and timer firings become
//! [`DemoAction`]s on one channel, the actor applies them in order, executes
//! the resulting effects and publishes a fresh [`DemoView`] through a
//! `watch` channel. Observers never see a half-applied action.

mod timers;

use std::sync::Arc;

use demo_script::{RiskState, Scenario};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ControllerConfig;
use crate::error::{ControllerError, ControllerResult};
use crate::reducer::{reduce, DemoAction};
use crate::state::DemoState;
use crate::view::DemoView;

use timers::Timers;

/// Identifies one running demo, mostly for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a running demo.
///
/// Dropping the handle tears the demo down and cancels every pending timer.
pub struct DemoController {
    id: SessionId,
    actions: mpsc::UnboundedSender<DemoAction>,
    view: watch::Receiver<DemoView>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl DemoController {
    /// Start a demo. Must be called from within a tokio runtime.
    pub fn spawn(scenario: Scenario, config: ControllerConfig) -> ControllerResult<Self> {
        config.validate()?;
        scenario.validate()?;

        let id = SessionId::new();
        let scenario = Arc::new(scenario);
        let state = DemoState::initial(&scenario);
        let (view_tx, view_rx) = watch::channel(DemoView::project(&scenario, &state));
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let actor = Actor {
            id,
            timers: Timers::new(shutdown.child_token(), actions_tx.clone()),
            scenario,
            config,
            state,
            view: view_tx,
        };

        info!(session = %id, steps = actor.scenario.script().len(), "demo started");
        let task = tokio::spawn(actor.run(actions_rx, shutdown.clone()));

        Ok(Self {
            id,
            actions: actions_tx,
            view: view_rx,
            shutdown,
            task: Some(task),
        })
    }

    /// Start the built-in compliance demo with default timings.
    pub fn compliance_demo() -> ControllerResult<Self> {
        Self::spawn(Scenario::compliance_demo(), ControllerConfig::default())
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// Queue an action for the actor.
    pub fn dispatch(&self, action: DemoAction) -> ControllerResult<()> {
        self.actions
            .send(action)
            .map_err(|_| ControllerError::Stopped)
    }

    /// Reveal the next scripted message.
    pub fn advance(&self) -> ControllerResult<()> {
        self.dispatch(DemoAction::Advance)
    }

    /// Start or stop auto-play.
    pub fn toggle_auto_play(&self) -> ControllerResult<()> {
        self.dispatch(DemoAction::ToggleAutoPlay)
    }

    /// Post free text to the chat. Blank text is dropped by the reducer.
    pub fn submit_user_text(&self, text: impl Into<String>) -> ControllerResult<()> {
        self.dispatch(DemoAction::SubmitUserText { text: text.into() })
    }

    /// Kick off the simulated ERP connection and BOL scan.
    pub fn connect_erp(&self) -> ControllerResult<()> {
        self.dispatch(DemoAction::ConnectErp)
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<DemoView> {
        self.view.clone()
    }

    /// Latest published snapshot.
    pub fn view(&self) -> DemoView {
        self.view.borrow().clone()
    }

    /// Current risk, derived from the cursor.
    pub fn risk_state(&self) -> RiskState {
        self.view.borrow().risk
    }

    /// Stop the actor and cancel all timers. Calling it again is a no-op.
    pub async fn shutdown(&mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                debug!(session = %self.id, error = %e, "demo task ended abnormally");
            }
        }
    }
}

impl Drop for DemoController {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// The task that owns the state.
struct Actor {
    id: SessionId,
    timers: Timers,
    scenario: Arc<Scenario>,
    config: ControllerConfig,
    state: DemoState,
    view: watch::Sender<DemoView>,
}

impl Actor {
    async fn run(
        mut self,
        mut actions: mpsc::UnboundedReceiver<DemoAction>,
        shutdown: CancellationToken,
    ) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                action = actions.recv() => match action {
                    Some(action) => self.apply(action),
                    None => break,
                },
            }
        }

        self.timers.cancel_all();
        info!(session = %self.id, cursor = self.state.cursor(), "demo stopped");
    }

    fn apply(&mut self, action: DemoAction) {
        let name = action.name();
        let transition = reduce(&self.scenario, &self.state, action);

        if let Some(reason) = transition.ignored {
            debug!(session = %self.id, action = name, %reason, "action ignored");
            return;
        }

        self.state = transition.state;
        for effect in transition.effects {
            self.timers.run(effect, &self.config);
        }

        let view = DemoView::project(&self.scenario, &self.state);
        debug!(
            session = %self.id,
            action = name,
            cursor = view.cursor,
            risk_score = view.risk.score,
            risk_level = %view.risk.level,
            auto_playing = view.auto_playing,
            auto_play_armed = self.timers.auto_play_armed(),
            "action applied"
        );
        self.view.send_replace(view);
    }
}
