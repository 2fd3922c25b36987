//! Messages as they appear in the chat pane.

use demo_script::{Role, ScriptMessage};
use serde::{Deserialize, Serialize};

/// Where a displayed message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    /// Revealed from the script by the playback cursor.
    Script,
    /// Typed by the visitor.
    Visitor,
    /// The canned answer to visitor input.
    DemoReply,
    /// Produced by the ERP scan.
    Integration,
}

/// One entry of the displayed chat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMessage {
    pub role: Role,
    pub content: String,
    pub origin: MessageOrigin,
}

impl DisplayedMessage {
    pub fn from_script(msg: &ScriptMessage, origin: MessageOrigin) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
            origin,
        }
    }

    pub fn visitor(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            origin: MessageOrigin::Visitor,
        }
    }

    pub fn demo_reply(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            origin: MessageOrigin::DemoReply,
        }
    }

    /// Check if this message was revealed from the script.
    pub fn is_scripted(&self) -> bool {
        self.origin == MessageOrigin::Script
    }
}
