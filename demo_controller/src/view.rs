//! View snapshot handed to the presentation surface.

use demo_script::{FactorStatus, RiskState, RoutePlan, Scenario};
use serde::{Deserialize, Serialize};

use crate::state::{DemoState, DisplayedMessage, ErpStatus};

/// Everything a renderer needs, derived from one [`DemoState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoView {
    pub cursor: usize,
    pub step_count: usize,
    pub at_end: bool,
    pub auto_playing: bool,
    pub messages: Vec<DisplayedMessage>,
    pub risk: RiskState,
    pub risk_factors: Vec<FactorStatus>,
    pub route: RoutePlan,
    pub erp: ErpStatus,
}

impl DemoView {
    pub fn project(scenario: &Scenario, state: &DemoState) -> Self {
        let cursor = state.cursor();
        Self {
            cursor,
            step_count: scenario.script().len(),
            at_end: state.is_at_end(scenario),
            auto_playing: state.auto_playing(),
            messages: state.messages().to_vec(),
            risk: state.risk(scenario),
            risk_factors: scenario.checklist_at(cursor),
            route: scenario.route_at(cursor),
            erp: state.erp(),
        }
    }

    /// JSON encoding for web front ends.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce, DemoAction};

    #[test]
    fn test_view_follows_cursor() {
        let scenario = Scenario::compliance_demo();
        let mut state = DemoState::initial(&scenario);
        for _ in 0..7 {
            state = reduce(&scenario, &state, DemoAction::Advance).state;
        }

        let view = DemoView::project(&scenario, &state);
        assert_eq!(view.cursor, 7);
        assert_eq!(view.step_count, 10);
        assert!(!view.at_end);
        assert_eq!(view.messages.len(), 8);
        assert_eq!(view.risk.score, 45);
        assert!(view.risk_factors.iter().all(|f| f.resolved));
        assert_eq!(view.route.routes[0].id, "alt-route");
    }

    #[test]
    fn test_view_json() {
        let scenario = Scenario::compliance_demo();
        let view = DemoView::project(&scenario, &DemoState::initial(&scenario));

        let json = view.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["risk"]["score"], 72);
        assert_eq!(value["risk"]["level"], "high");
        assert_eq!(value["erp"]["status"], "disconnected");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["origin"], "script");
    }
}
