//! # Demo Script
//!
//! The content crate of the shipment-compliance demo. It holds the canned
//! conversation and every projection derived from a playback position, and it
//! contains no timers or runtime state of its own.
//!
//! ## Core Components
//!
//! - **script**: The ordered, immutable conversation the demo plays back
//! - **projection**: Risk score and risk-factor checklist derived from a step
//! - **route**: Map markers and route lines for the original and alternate route
//! - **scenario**: Bundles all of the above and loads custom scenarios from TOML

pub mod error;
pub mod projection;
pub mod route;
pub mod scenario;
pub mod script;

pub use error::*;
pub use projection::*;
pub use route::*;
pub use scenario::*;
pub use script::*;
