//! Tool-call envelope (JSON).
//!
//! `args` is kept as `RawValue` so each provider parses its own argument
//! shape lazily.

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::{DoraError, Result};

/// Only envelope version understood by this host.
pub const PROTOCOL_VERSION: u8 = 1;

/// Versioned tool invocation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolCall {
    /// Protocol version.
    pub v: u8,
    /// Tool name (e.g., "get_dora_metrics").
    pub tool: String,
    /// Optional arguments object, stored as raw JSON.
    #[serde(default)]
    pub args: Option<Box<RawValue>>,
}

impl ToolCall {
    /// Arguments as a JSON string; a missing `args` behaves like `{}`.
    pub fn args_json(&self) -> &str {
        self.args.as_deref().map(RawValue::get).unwrap_or("{}")
    }
}

/// Decode and version-check an envelope.
pub fn decode(text: &str) -> Result<ToolCall> {
    let call: ToolCall = serde_json::from_str(text)
        .map_err(|e| DoraError::BadRequest(format!("invalid tool call: {e}")))?;
    if call.v != PROTOCOL_VERSION {
        return Err(DoraError::UnsupportedVersion);
    }
    if call.tool.trim().is_empty() {
        return Err(DoraError::BadRequest("tool must not be empty".into()));
    }
    Ok(call)
}
