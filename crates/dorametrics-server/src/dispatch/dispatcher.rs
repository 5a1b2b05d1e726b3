use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;

use dorametrics_core::error::{DoraError, Result};

/// A tool a provider exposes.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// A file a provider ships for clients (e.g. a JS renderer).
#[derive(Debug, Clone, Copy)]
pub struct StaticAsset {
    pub file: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

/// Capability a plugin implements to be hosted: a set of named tools, each a
/// function of a JSON arguments object, plus optional static assets.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    fn plugin_fqdn(&self) -> &'static str;
    fn assets_version(&self) -> &'static str;
    fn tools(&self) -> Vec<ToolSpec>;
    fn static_assets(&self) -> Vec<StaticAsset> {
        Vec::new()
    }
    /// `args` is a JSON object in text form.
    async fn call(&self, tool: &str, args: &str) -> Result<Value>;
}

/// Listing entry for `/v1/tools`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredTool {
    pub name: &'static str,
    pub plugin: &'static str,
    pub description: &'static str,
}

struct HostedAsset {
    version: &'static str,
    asset: StaticAsset,
}

/// Registry of tool providers and their assets.
#[derive(Default)]
pub struct Dispatcher {
    tools: DashMap<&'static str, (ToolSpec, Arc<dyn ToolProvider>)>,
    /// plugin fqdn -> file -> asset
    assets: DashMap<&'static str, HashMap<&'static str, HostedAsset>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
            assets: DashMap::new(),
        }
    }

    /// Register every tool and asset of `provider`. Tool names are global;
    /// a name already taken, by another provider or earlier in the same
    /// list, fails the whole registration and leaves the registry unchanged.
    pub fn register(&self, provider: Arc<dyn ToolProvider>) -> Result<()> {
        let mut inserted: Vec<&'static str> = Vec::new();
        for spec in provider.tools() {
            let taken = match self.tools.entry(spec.name) {
                Entry::Occupied(_) => true,
                Entry::Vacant(slot) => {
                    slot.insert((spec, Arc::clone(&provider)));
                    false
                }
            };
            if taken {
                for name in &inserted {
                    self.tools.remove(name);
                }
                return Err(DoraError::Internal(format!(
                    "tool {} already registered (plugin={})",
                    spec.name,
                    provider.plugin_fqdn()
                )));
            }
            inserted.push(spec.name);
        }

        let mut files = self.assets.entry(provider.plugin_fqdn()).or_default();
        for asset in provider.static_assets() {
            files.insert(
                asset.file,
                HostedAsset {
                    version: provider.assets_version(),
                    asset,
                },
            );
        }
        Ok(())
    }

    pub fn registered_tools(&self) -> Vec<RegisteredTool> {
        let mut out: Vec<RegisteredTool> = self
            .tools
            .iter()
            .map(|e| {
                let (spec, provider) = e.value();
                RegisteredTool {
                    name: spec.name,
                    plugin: provider.plugin_fqdn(),
                    description: spec.description,
                }
            })
            .collect();
        out.sort_by_key(|t| t.name);
        out
    }

    pub async fn dispatch(&self, tool: &str, args: &str) -> Result<Value> {
        let provider = self
            .tools
            .get(tool)
            .ok_or_else(|| DoraError::UnknownTool(tool.to_string()))?
            .value()
            .1
            .clone();
        provider.call(tool, args).await
    }

    pub fn asset(&self, plugin: &str, version: &str, file: &str) -> Result<StaticAsset> {
        self.assets
            .get(plugin)
            .and_then(|files| {
                files
                    .get(file)
                    .filter(|h| h.version == version)
                    .map(|h| h.asset)
            })
            .ok_or_else(|| DoraError::NotFound(format!("static/{plugin}/{version}/{file}")))
    }
}
