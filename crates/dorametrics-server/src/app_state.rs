//! Shared application state for the dorametrics server.
//!
//! Builds the dispatcher, registers the built-in molecules and keeps the
//! loaded config. Startup errors are returned, never panicked on.

use std::sync::Arc;

use dorametrics_core::dora::{DoraGenerator, RandomSource, ThreadSource};
use dorametrics_core::error::Result;

use crate::assets::AssetResolver;
use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::molecules::DoraMolecule;
use crate::obs::metrics::ToolMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
    metrics: Arc<ToolMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Production state: molecules draw from the thread-local RNG.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_source(cfg, ThreadSource)
    }

    /// State whose DORA molecule draws from `source` (seeded in tests).
    pub fn with_source<S: RandomSource + 'static>(cfg: ServerConfig, source: S) -> Result<Self> {
        let assets = AssetResolver::new(&cfg.server.base_url);
        let dispatcher = Dispatcher::new();

        dispatcher.register(Arc::new(DoraMolecule::new(
            DoraGenerator::with_source(source),
            &assets,
            cfg.dora.limits(),
        )))?;

        for t in dispatcher.registered_tools() {
            tracing::info!(tool = %t.name, plugin = %t.plugin, "tool registered");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg }),
            dispatcher: Arc::new(dispatcher),
            metrics: Arc::new(ToolMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn metrics(&self) -> Arc<ToolMetrics> {
        Arc::clone(&self.metrics)
    }
}
