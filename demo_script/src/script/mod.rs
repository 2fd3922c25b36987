//! Script Store - the fixed, ordered conversation the demo plays back.
//!
//! Steps are zero-based indices into the script. Step `0` is the opening
//! line and step `len() - 1` is the terminal step.

mod message;

pub use message::*;

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};

/// An immutable, non-empty sequence of script messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScriptMessage>", into = "Vec<ScriptMessage>")]
pub struct Script {
    messages: Vec<ScriptMessage>,
}

impl Script {
    /// Build a script from its messages. An empty script is rejected since
    /// there would be no valid playback position.
    pub fn new(messages: Vec<ScriptMessage>) -> ScriptResult<Self> {
        if messages.is_empty() {
            return Err(ScriptError::EmptyScript);
        }
        Ok(Self { messages })
    }

    /// The Gulf PetroChem customs-hold conversation shown on the demo page.
    pub fn compliance_demo() -> Self {
        let messages = vec![
            ScriptMessage::user(
                "Hi, this is Sarah from Gulf PetroChem. Our shipment of polyethylene from Jebel Ali \
                 to Houston is stuck in Dubai Customs. They're threatening fines, and we don't know why!",
            ),
            ScriptMessage::assistant(
                "I've identified the issue. There's an incomplete HS code on your Bill of Lading. \
                 It's listed as `3901.10` instead of the required 8-digit code for UAE and 10-digit \
                 HTS code for U.S. This has triggered a customs compliance flag with a risk score of 72/100.",
            ),
            ScriptMessage::user("Can you help fix this? What should the correct codes be?"),
            ScriptMessage::assistant(
                "For your linear low-density polyethylene:\n\n\
                 • Jebel Ali requires 8-digit code: `3901.1030`\n\
                 • Houston requires 10-digit code: `3901.10.0010`\n\n\
                 I'm generating an amended BOL and submitting it electronically to Dubai Customs. \
                 Your risk score will reduce to 65/100 once we fix this issue.",
            ),
            ScriptMessage::assistant(
                "I also recommend rerouting through Khalifa Port to avoid Jebel Ali's post-flood \
                 delays. This would reduce your risk score further by avoiding the port congestion.",
            ),
            ScriptMessage::user("That would be great. What about future shipments?"),
            ScriptMessage::assistant(
                "Good news! Dubai Customs has accepted the amended HS codes. Your risk score is now \
                 55/100.\n\nFor future shipments, I recommend using our HS Code Automated \
                 Classification system to prevent these issues.",
            ),
            ScriptMessage::assistant(
                "I've confirmed your route change to Khalifa Port. Your vessel has been granted \
                 priority berthing. Risk score now at 45/100.",
            ),
            ScriptMessage::user("Fantastic! What was our total cost and time savings?"),
            ScriptMessage::assistant(
                "Your final risk score is 35/100 - within our 'low risk' threshold. Here's the \
                 impact of our changes:\n\n\
                 • Time saved: 12+ hours of manual corrections\n\
                 • Days saved: 4 days transit time\n\
                 • Cost avoided: $50,000 in fines + $15,000 in demurrage fees\n\n\
                 Your shipment will now arrive in Houston 4 days earlier than originally scheduled, \
                 with full compliance.",
            ),
        ];
        Self { messages }
    }

    /// Number of messages (`N`).
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The terminal step, `N - 1`.
    pub fn last_step(&self) -> usize {
        self.messages.len() - 1
    }

    /// Check whether `step` is the terminal step (or beyond it).
    pub fn is_last(&self, step: usize) -> bool {
        step >= self.last_step()
    }

    /// Get the message at a step.
    pub fn get(&self, step: usize) -> Option<&ScriptMessage> {
        self.messages.get(step)
    }

    /// The revealed prefix for a cursor: the first `cursor + 1` messages.
    /// Cursors past the end are clamped to the terminal step.
    pub fn visible(&self, cursor: usize) -> &[ScriptMessage] {
        let end = cursor.min(self.last_step()) + 1;
        &self.messages[..end]
    }

    /// Iterate over all messages in playback order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptMessage> {
        self.messages.iter()
    }
}

impl TryFrom<Vec<ScriptMessage>> for Script {
    type Error = ScriptError;

    fn try_from(messages: Vec<ScriptMessage>) -> ScriptResult<Self> {
        Self::new(messages)
    }
}

impl From<Script> for Vec<ScriptMessage> {
    fn from(script: Script) -> Self {
        script.messages
    }
}
