//! Transport layer (HTTP).
//!
//! Exposes the tool-call and static-asset handlers plus the error-to-response
//! mapping.

pub mod http;
