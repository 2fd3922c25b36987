//! Projections - pure functions from a playback step to what the dashboard
//! shows beside the chat.
//!
//! Every projection is total and deterministic: projecting the same step
//! twice yields the same value.

mod checklist;
mod risk;

pub use checklist::*;
pub use risk::*;
