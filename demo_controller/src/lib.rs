//! # Demo Controller
//!
//! Drives the scripted compliance demo forward. The crate is split into a
//! pure half and an async half:
//!
//! - **state** / **reducer**: an immutable [`DemoState`] and a pure
//!   `reduce(scenario, state, action)` returning the next state plus the
//!   timer effects the driver should run
//! - **controller**: a tokio actor that owns the state, executes effects with
//!   cancelable timers and publishes [`DemoView`] snapshots to observers
//! - **config**: timing knobs, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Derived, not patched**: visible messages and risk are recomputed from
//!   the cursor on every change
//! - **Explicit effects**: the reducer never sleeps; it asks for timers and the
//!   driver decides how to run and cancel them

pub mod config;
pub mod controller;
pub mod error;
pub mod reducer;
pub mod state;
pub mod view;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use reducer::*;
pub use state::*;
pub use view::*;
