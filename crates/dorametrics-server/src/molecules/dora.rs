//! DORA metrics molecule.
//!
//! Exposes the synthetic generator as six tools and ships the JS component
//! that renders `get_dora_metrics` results on the client (remote renderer).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use dorametrics_core::dora::{DoraGenerator, DoraSummary, RandomSource, StatusFilter};
use dorametrics_core::error::{DoraError, Result};

use crate::assets::AssetResolver;
use crate::dispatch::{StaticAsset, ToolProvider, ToolSpec};

pub const PLUGIN_FQDN: &str = "dora.molecules.devgraph.ai";
pub const ASSETS_VERSION: &str = "1.0.0";
pub const RENDERER_FILE: &str = "dora-metrics.js";

const RENDERER_JS: &str = include_str!("../../static/dora-metrics.js");

const TOOLS: [ToolSpec; 6] = [
    ToolSpec {
        name: "get_dora_metrics",
        description: "All four DORA metrics for a service, with a remote renderer",
    },
    ToolSpec {
        name: "get_deployment_frequency",
        description: "How often the service deploys to production",
    },
    ToolSpec {
        name: "get_lead_time",
        description: "Time from commit to production",
    },
    ToolSpec {
        name: "get_mttr",
        description: "Mean time to restore service after an incident",
    },
    ToolSpec {
        name: "get_change_failure_rate",
        description: "Percentage of deployments causing a failure",
    },
    ToolSpec {
        name: "list_deployments",
        description: "Recent deployments, newest first, optionally filtered by status",
    },
];

/// Upper bounds on caller-supplied windows and page sizes.
#[derive(Debug, Clone, Copy)]
pub struct DoraLimits {
    pub max_days: u32,
    pub max_list_limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WindowArgs {
    service: String,
    #[serde(default = "default_days")]
    days: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ListArgs {
    service: String,
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default)]
    status: StatusFilter,
}

fn default_days() -> u32 {
    30
}
fn default_limit() -> usize {
    10
}

#[derive(Debug, Serialize)]
struct Renderer<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct RenderMeta<'a> {
    renderer: Renderer<'a>,
}

#[derive(Debug, Serialize)]
struct DoraMetricsReply<'a> {
    #[serde(flatten)]
    summary: DoraSummary,
    #[serde(rename = "_meta")]
    meta: RenderMeta<'a>,
}

pub struct DoraMolecule<S> {
    generator: DoraGenerator<S>,
    limits: DoraLimits,
    renderer_url: String,
}

impl<S: RandomSource> DoraMolecule<S> {
    pub fn new(generator: DoraGenerator<S>, assets: &AssetResolver, limits: DoraLimits) -> Self {
        Self {
            generator,
            limits,
            renderer_url: assets.static_url(PLUGIN_FQDN, ASSETS_VERSION, RENDERER_FILE),
        }
    }

    pub fn renderer_url(&self) -> &str {
        &self.renderer_url
    }

    fn window(&self, tool: &str, args: &str) -> Result<WindowArgs> {
        let a: WindowArgs = parse_args(tool, args)?;
        if a.days == 0 || a.days > self.limits.max_days {
            return Err(DoraError::BadRequest(format!(
                "{tool}: days must be between 1 and {}",
                self.limits.max_days
            )));
        }
        Ok(a)
    }
}

fn parse_args<T: DeserializeOwned>(tool: &str, args: &str) -> Result<T> {
    serde_json::from_str(args)
        .map_err(|e| DoraError::BadRequest(format!("{tool} invalid args: {e}")))
}

fn to_json<T: Serialize>(v: &T) -> Result<Value> {
    serde_json::to_value(v).map_err(|e| DoraError::Internal(format!("encode reply failed: {e}")))
}

#[async_trait]
impl<S: RandomSource + 'static> ToolProvider for DoraMolecule<S> {
    fn plugin_fqdn(&self) -> &'static str {
        PLUGIN_FQDN
    }

    fn assets_version(&self) -> &'static str {
        ASSETS_VERSION
    }

    fn tools(&self) -> Vec<ToolSpec> {
        TOOLS.to_vec()
    }

    fn static_assets(&self) -> Vec<StaticAsset> {
        vec![StaticAsset {
            file: RENDERER_FILE,
            content_type: "application/javascript; charset=utf-8",
            body: RENDERER_JS,
        }]
    }

    async fn call(&self, tool: &str, args: &str) -> Result<Value> {
        match tool {
            "get_dora_metrics" => {
                let a = self.window(tool, args)?;
                let summary = self.generator.aggregate_metrics(&a.service, a.days)?;
                to_json(&DoraMetricsReply {
                    summary,
                    meta: RenderMeta {
                        renderer: Renderer {
                            kind: "remote",
                            source: &self.renderer_url,
                        },
                    },
                })
            }
            "get_deployment_frequency" => {
                let a = self.window(tool, args)?;
                to_json(&self.generator.deployment_frequency(&a.service, a.days)?)
            }
            "get_lead_time" => {
                let a = self.window(tool, args)?;
                to_json(&self.generator.lead_time(&a.service, a.days)?)
            }
            "get_mttr" => {
                let a = self.window(tool, args)?;
                to_json(&self.generator.mttr(&a.service, a.days)?)
            }
            "get_change_failure_rate" => {
                let a = self.window(tool, args)?;
                to_json(&self.generator.change_failure_rate(&a.service, a.days)?)
            }
            "list_deployments" => {
                let a: ListArgs = parse_args(tool, args)?;
                if a.limit > self.limits.max_list_limit {
                    return Err(DoraError::BadRequest(format!(
                        "list_deployments: limit must be at most {}",
                        self.limits.max_list_limit
                    )));
                }
                to_json(&self.generator.list_deployments(&a.service, a.limit, a.status)?)
            }
            other => Err(DoraError::UnknownTool(other.to_string())),
        }
    }
}
