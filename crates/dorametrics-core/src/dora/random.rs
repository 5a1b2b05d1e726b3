//! Injectable random sources.
//!
//! Generators never reach for an implicit global: they ask a [`RandomSource`]
//! for a fresh `StdRng` per request. Production uses the thread-local
//! generator (no lock); tests use [`SeededSource`] for reproducible output.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{DoraError, Result};

pub trait RandomSource: Send + Sync {
    /// Hand out an independent generator for one request.
    fn fork(&self) -> Result<StdRng>;
}

/// Seeds each request from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
    fn fork(&self) -> Result<StdRng> {
        Ok(StdRng::from_rng(&mut rand::rng()))
    }
}

/// Deterministic source: the same seed yields the same sequence of forks.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededSource {
    fn fork(&self) -> Result<StdRng> {
        let mut parent = self
            .rng
            .lock()
            .map_err(|_| DoraError::Internal("random source poisoned".into()))?;
        Ok(StdRng::from_rng(&mut *parent))
    }
}
