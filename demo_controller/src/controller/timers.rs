//! Cancelable one-shot timers that feed actions back into the actor.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::config::ControllerConfig;
use crate::reducer::{Delay, DemoAction, Effect};

/// Owns every pending timer of one controller.
///
/// All timers hang off `root`, so cancelling it stops everything. The
/// auto-play timer additionally has its own child token so it can be
/// replaced or stopped on its own.
pub(crate) struct Timers {
    root: CancellationToken,
    auto_play: Option<CancellationToken>,
    actions: mpsc::UnboundedSender<DemoAction>,
}

impl Timers {
    pub(crate) fn new(root: CancellationToken, actions: mpsc::UnboundedSender<DemoAction>) -> Self {
        Self {
            root,
            auto_play: None,
            actions,
        }
    }

    /// Execute one reducer effect.
    pub(crate) fn run(&mut self, effect: Effect, config: &ControllerConfig) {
        match effect {
            Effect::ArmAutoPlay { epoch } => {
                self.cancel_auto_play();
                let token = self.root.child_token();
                self.auto_play = Some(token.clone());
                self.spawn_after(
                    token,
                    DemoAction::AutoPlayTick { epoch },
                    config.duration(Delay::AutoPlay),
                );
            }
            Effect::CancelAutoPlay => self.cancel_auto_play(),
            Effect::Schedule { action, delay } => {
                self.spawn_after(self.root.child_token(), action, config.duration(delay));
            }
        }
    }

    /// Stop the pending auto-play tick. Calling it with nothing pending is fine.
    pub(crate) fn cancel_auto_play(&mut self) {
        if let Some(token) = self.auto_play.take() {
            trace!("cancelling auto-play timer");
            token.cancel();
        }
    }

    /// Whether an auto-play tick is currently pending.
    pub(crate) fn auto_play_armed(&self) -> bool {
        self.auto_play
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Cancel everything, including timers not yet polled.
    pub(crate) fn cancel_all(&mut self) {
        self.cancel_auto_play();
        self.root.cancel();
    }

    fn spawn_after(&self, token: CancellationToken, action: DemoAction, after: Duration) {
        let actions = self.actions.clone();
        trace!(action = action.name(), delay_ms = after.as_millis() as u64, "scheduling");

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(after) => {
                    // The actor may already be gone; nothing to deliver to then.
                    let _ = actions.send(action);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cancel_auto_play_is_idempotent() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Timers::new(CancellationToken::new(), tx);
        let config = ControllerConfig::default();

        timers.run(Effect::ArmAutoPlay { epoch: 1 }, &config);
        assert!(timers.auto_play_armed());

        timers.cancel_auto_play();
        timers.cancel_auto_play();
        assert!(!timers.auto_play_armed());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_replaces_pending_tick() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Timers::new(CancellationToken::new(), tx);
        let config = ControllerConfig::default();

        timers.run(Effect::ArmAutoPlay { epoch: 1 }, &config);
        timers.run(Effect::ArmAutoPlay { epoch: 2 }, &config);

        let action = rx.recv().await.unwrap();
        assert_eq!(action, DemoAction::AutoPlayTick { epoch: 2 });

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_action_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Timers::new(CancellationToken::new(), tx);
        let config = ControllerConfig::default();
        let start = tokio::time::Instant::now();

        timers.run(
            Effect::Schedule {
                action: DemoAction::DeliverDemoReply,
                delay: Delay::Reply,
            },
            &config,
        );

        assert_eq!(rx.recv().await, Some(DemoAction::DeliverDemoReply));
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_scheduled_actions() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Timers::new(CancellationToken::new(), tx);
        let config = ControllerConfig::default();

        timers.run(
            Effect::Schedule {
                action: DemoAction::ErpScanStarted,
                delay: Delay::ErpHandshake,
            },
            &config,
        );
        timers.cancel_all();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
