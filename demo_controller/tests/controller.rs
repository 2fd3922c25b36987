//! End-to-end tests of the controller actor on a paused tokio clock.

use std::time::Duration;

use demo_controller::{ControllerConfig, ControllerError, DemoController, ErpStatus, MessageOrigin};
use demo_script::{RiskLevel, Scenario};
use tokio::time::Instant;

const INTERVAL: Duration = Duration::from_millis(2500);

#[tokio::test(start_paused = true)]
async fn test_manual_advance_updates_risk() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();

    controller.advance().unwrap();
    controller.advance().unwrap();
    let snapshot = view.wait_for(|v| v.cursor == 2).await.unwrap().clone();
    assert_eq!(snapshot.risk.score, 65);
    assert_eq!(snapshot.risk.level, RiskLevel::High);
    assert_eq!(snapshot.messages.len(), 3);

    for _ in 0..4 {
        controller.advance().unwrap();
    }
    let snapshot = view.wait_for(|v| v.cursor == 6).await.unwrap().clone();
    assert_eq!(snapshot.risk.score, 45);
    assert_eq!(snapshot.risk.level, RiskLevel::Medium);
    assert!(snapshot.risk.show_alternate_route);
    assert_eq!(snapshot.route.routes[0].id, "alt-route");

    assert_eq!(controller.risk_state(), snapshot.risk);
}

#[tokio::test(start_paused = true)]
async fn test_advance_clamps_at_last_step() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();

    for _ in 0..25 {
        controller.advance().unwrap();
    }
    let snapshot = view.wait_for(|v| v.at_end).await.unwrap().clone();
    assert_eq!(snapshot.cursor, 9);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.view().cursor, 9);
    assert_eq!(controller.view().risk.score, 35);
}

#[tokio::test(start_paused = true)]
async fn test_auto_play_runs_to_end_and_stops() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();
    let start = Instant::now();

    controller.toggle_auto_play().unwrap();
    let snapshot = view.wait_for(|v| v.at_end).await.unwrap().clone();

    // Nine steps from the opening line, one interval each.
    let elapsed = start.elapsed();
    assert!(elapsed >= INTERVAL * 9, "finished too early: {:?}", elapsed);
    assert!(elapsed < INTERVAL * 10, "finished too late: {:?}", elapsed);
    assert!(!snapshot.auto_playing);
    assert_eq!(snapshot.risk.level, RiskLevel::Low);

    tokio::time::sleep(INTERVAL * 4).await;
    let later = controller.view();
    assert_eq!(later.cursor, 9);
    assert!(!later.auto_playing);
}

#[tokio::test(start_paused = true)]
async fn test_auto_play_from_middle() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();

    for _ in 0..5 {
        controller.advance().unwrap();
    }
    view.wait_for(|v| v.cursor == 5).await.unwrap();

    let start = Instant::now();
    controller.toggle_auto_play().unwrap();
    view.wait_for(|v| v.at_end).await.unwrap();

    let elapsed = start.elapsed();
    assert!(elapsed >= INTERVAL * 4);
    assert!(elapsed < INTERVAL * 5);
}

#[tokio::test(start_paused = true)]
async fn test_stopping_auto_play_cancels_timer() {
    let controller = DemoController::compliance_demo().unwrap();

    controller.toggle_auto_play().unwrap();
    tokio::time::sleep(Duration::from_millis(6000)).await;
    assert_eq!(controller.view().cursor, 2);

    controller.toggle_auto_play().unwrap();
    tokio::time::sleep(INTERVAL * 6).await;

    let snapshot = controller.view();
    assert_eq!(snapshot.cursor, 2);
    assert!(!snapshot.auto_playing);
}

#[tokio::test(start_paused = true)]
async fn test_user_text_gets_delayed_reply() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();
    let start = Instant::now();

    controller.submit_user_text("   ").unwrap();
    controller.submit_user_text("").unwrap();
    controller.submit_user_text("Is this real?").unwrap();

    let typed = view.wait_for(|v| v.messages.len() == 2).await.unwrap().clone();
    assert_eq!(typed.messages[1].content, "Is this real?");
    assert_eq!(typed.messages[1].origin, MessageOrigin::Visitor);

    let replied = view.wait_for(|v| v.messages.len() == 3).await.unwrap().clone();
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(replied.messages[2].origin, MessageOrigin::DemoReply);
    assert_eq!(replied.cursor, 0);
    assert_eq!(replied.risk.score, 72);
}

#[tokio::test(start_paused = true)]
async fn test_erp_scan_flow() {
    let controller = DemoController::compliance_demo().unwrap();
    let mut view = controller.subscribe();
    let start = Instant::now();

    controller.connect_erp().unwrap();
    view.wait_for(|v| v.erp == ErpStatus::Connected).await.unwrap();
    view.wait_for(|v| v.erp == ErpStatus::Scanning).await.unwrap();
    let found = view
        .wait_for(|v| matches!(v.erp, ErpStatus::Found { .. }))
        .await
        .unwrap()
        .clone();

    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert_eq!(found.erp, ErpStatus::Found { documents: 4 });
    assert_eq!(found.messages.len(), 2);
    assert!(found.messages[1].content.contains("4 Bills of Lading"));
    assert_eq!(found.risk.score, 72);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_and_is_repeatable() {
    let mut controller = DemoController::compliance_demo().unwrap();

    controller.toggle_auto_play().unwrap();
    controller.shutdown().await;
    controller.shutdown().await;

    assert!(matches!(controller.advance(), Err(ControllerError::Stopped)));

    tokio::time::sleep(INTERVAL * 3).await;
    assert_eq!(controller.view().cursor, 0);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timings() {
    let config = ControllerConfig::from_toml_str("auto_play_interval_ms = 100").unwrap();
    let controller = DemoController::spawn(Scenario::compliance_demo(), config).unwrap();
    let mut view = controller.subscribe();
    let start = Instant::now();

    controller.toggle_auto_play().unwrap();
    view.wait_for(|v| v.at_end).await.unwrap();

    assert!(start.elapsed() < Duration::from_millis(1000));
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config = ControllerConfig {
        auto_play_interval_ms: 0,
        ..ControllerConfig::default()
    };

    let result = DemoController::spawn(Scenario::compliance_demo(), config);
    assert!(matches!(result, Err(ControllerError::Config(_))));
}
