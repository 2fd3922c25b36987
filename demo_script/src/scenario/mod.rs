//! Scenario - a script bundled with the projections keyed to its steps.

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};
use crate::projection::{Checklist, FactorStatus, RiskProjector, RiskState};
use crate::route::{RouteOverlay, RoutePlan};
use crate::script::{Script, ScriptMessage};

const DEMO_REPLY: &str = "This is a demo showing how our system can identify and fix Bills of \
                          Lading issues. Please use the auto-play button to see the full scenario.";

/// Canned result of the one-click ERP connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpScan {
    /// Name of the connected system.
    pub system: String,
    pub documents_found: u32,
    /// Replaces the chat transcript when the scan completes.
    pub transcript: Vec<ScriptMessage>,
}

impl Default for ErpScan {
    fn default() -> Self {
        Self {
            system: "Salesforce".to_string(),
            documents_found: 4,
            transcript: vec![
                ScriptMessage::user("Can you scan my Salesforce BOLs for risks?"),
                ScriptMessage::assistant(
                    "I've found 4 Bills of Lading in your Salesforce. The polyethylene shipment \
                     from Jebel Ali to Houston needs immediate attention due to incomplete HS codes.",
                ),
            ],
        }
    }
}

fn default_demo_reply() -> String {
    DEMO_REPLY.to_string()
}

/// Everything needed to play one demo conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub messages: Script,
    pub risk: RiskProjector,
    #[serde(default)]
    pub checklist: Checklist,
    #[serde(default)]
    pub route: RouteOverlay,
    #[serde(default)]
    pub erp_scan: ErpScan,
    /// Assistant answer to anything typed into the chat box.
    #[serde(default = "default_demo_reply")]
    pub demo_reply: String,
}

impl Scenario {
    /// Assemble and validate a scenario.
    pub fn new(
        messages: Script,
        risk: RiskProjector,
        checklist: Checklist,
        route: RouteOverlay,
    ) -> ScriptResult<Self> {
        let scenario = Self {
            messages,
            risk,
            checklist,
            route,
            erp_scan: ErpScan::default(),
            demo_reply: default_demo_reply(),
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// The built-in customs-hold demo.
    pub fn compliance_demo() -> Self {
        Self {
            messages: Script::compliance_demo(),
            risk: RiskProjector::compliance_demo(),
            checklist: Checklist::compliance_demo(),
            route: RouteOverlay::compliance_demo(),
            erp_scan: ErpScan::default(),
            demo_reply: default_demo_reply(),
        }
    }

    /// Replace the canned ERP scan result.
    pub fn with_erp_scan(mut self, erp_scan: ErpScan) -> Self {
        self.erp_scan = erp_scan;
        self
    }

    /// Replace the canned reply to typed input.
    pub fn with_demo_reply(mut self, reply: impl Into<String>) -> Self {
        self.demo_reply = reply.into();
        self
    }

    /// Parse a scenario from TOML and validate it.
    pub fn from_toml_str(input: &str) -> ScriptResult<Self> {
        let scenario: Scenario = toml::from_str(input)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check that every breakpoint and checklist step exists in the script.
    ///
    /// Thresholds are literal step numbers, so a shortened script silently
    /// strands them; this catches that.
    pub fn validate(&self) -> ScriptResult<()> {
        let last_step = self.messages.last_step();

        if let Some(step) = self.risk.max_step() {
            if step > last_step {
                return Err(ScriptError::StepOutOfRange {
                    what: "risk breakpoint".to_string(),
                    step,
                    last_step,
                });
            }
        }

        for factor in self.checklist.factors() {
            if factor.resolved_at_step > last_step {
                return Err(ScriptError::StepOutOfRange {
                    what: format!("risk factor '{}'", factor.key),
                    step: factor.resolved_at_step,
                    last_step,
                });
            }
        }

        Ok(())
    }

    pub fn script(&self) -> &Script {
        &self.messages
    }

    pub fn last_step(&self) -> usize {
        self.messages.last_step()
    }

    pub fn risk_at(&self, step: usize) -> RiskState {
        self.risk.project(step)
    }

    pub fn checklist_at(&self, step: usize) -> Vec<FactorStatus> {
        self.checklist.statuses(step)
    }

    pub fn route_at(&self, step: usize) -> RoutePlan {
        self.route.plan(self.risk_at(step).show_alternate_route)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::compliance_demo()
    }
}
