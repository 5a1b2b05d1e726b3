//! dorametrics core: error surface, tool-call envelope and the synthetic DORA
//! metrics generator.
//!
//! This crate carries no transport or runtime dependencies so the generator
//! can be reused by any tool host. Randomness is always injected through
//! [`dora::RandomSource`], which keeps every operation reproducible in tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Invalid arguments surface as `DoraError::BadRequest` instead.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dora;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{DoraError, Result};
