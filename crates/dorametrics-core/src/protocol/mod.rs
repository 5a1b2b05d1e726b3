//! Tool-call wire format.
//!
//! The host accepts tool invocations either as a bare JSON arguments object
//! posted to a tool route, or wrapped in a versioned [`call::ToolCall`]
//! envelope. Parsing never panics: malformed input is reported as
//! `DoraError` so hostile payloads cannot take the host down.

pub mod call;
