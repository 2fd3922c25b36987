//! Risk factor checklist shown under the score gauge.

use serde::{Deserialize, Serialize};

/// A named risk that the conversation resolves at a given step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub key: String,
    pub label: String,
    pub resolved_at_step: usize,
}

impl RiskFactor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, resolved_at_step: usize) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            resolved_at_step,
        }
    }

    pub fn is_resolved(&self, step: usize) -> bool {
        step >= self.resolved_at_step
    }
}

/// Resolution status of one factor at a particular step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorStatus {
    pub key: String,
    pub label: String,
    pub resolved: bool,
}

/// Ordered set of risk factors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    factors: Vec<RiskFactor>,
}

impl Checklist {
    pub fn new(factors: Vec<RiskFactor>) -> Self {
        Self { factors }
    }

    /// Factors resolved by [`crate::Script::compliance_demo`].
    pub fn compliance_demo() -> Self {
        Self::new(vec![
            RiskFactor::new("hs_code", "Incomplete HS Code", 3),
            RiskFactor::new("port_congestion", "Port Congestion", 6),
            RiskFactor::new("route_risk", "Route Risk", 7),
        ])
    }

    pub fn factors(&self) -> &[RiskFactor] {
        &self.factors
    }

    /// Status of every factor at `step`, in checklist order.
    pub fn statuses(&self, step: usize) -> Vec<FactorStatus> {
        self.factors
            .iter()
            .map(|f| FactorStatus {
                key: f.key.clone(),
                label: f.label.clone(),
                resolved: f.is_resolved(step),
            })
            .collect()
    }

    /// Check if every factor is resolved at `step`.
    pub fn all_resolved(&self, step: usize) -> bool {
        self.factors.iter().all(|f| f.is_resolved(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_resolve_in_order() {
        let checklist = Checklist::compliance_demo();

        let resolved = |step| -> Vec<bool> {
            checklist.statuses(step).iter().map(|s| s.resolved).collect()
        };

        assert_eq!(resolved(0), vec![false, false, false]);
        assert_eq!(resolved(3), vec![true, false, false]);
        assert_eq!(resolved(6), vec![true, true, false]);
        assert_eq!(resolved(7), vec![true, true, true]);
    }

    #[test]
    fn test_all_resolved() {
        let checklist = Checklist::compliance_demo();
        assert!(!checklist.all_resolved(6));
        assert!(checklist.all_resolved(7));
        assert!(Checklist::default().all_resolved(0));
    }
}
