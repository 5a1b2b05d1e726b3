//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and the tool-provider capability so molecules
//! can depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, RegisteredTool, StaticAsset, ToolProvider, ToolSpec};
