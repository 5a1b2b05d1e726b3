//! dorametrics server library entry.
//!
//! Wires config, the tool dispatcher, static asset hosting and the built-in
//! DORA molecule into an HTTP tool server. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod assets;
pub mod config;
pub mod dispatch;
pub mod molecules;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
