//! Provider registration on the dispatcher.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use dorametrics_core::dora::{DoraGenerator, SeededSource};
use dorametrics_core::error::Result;
use dorametrics_server::assets::AssetResolver;
use dorametrics_server::dispatch::{Dispatcher, ToolProvider, ToolSpec};
use dorametrics_server::molecules::dora::{DoraLimits, DoraMolecule};

struct Echo;

#[async_trait]
impl ToolProvider for Echo {
    fn plugin_fqdn(&self) -> &'static str {
        "echo.test"
    }
    fn assets_version(&self) -> &'static str {
        "0.1.0"
    }
    fn tools(&self) -> Vec<ToolSpec> {
        vec![ToolSpec {
            name: "echo",
            description: "returns its arguments",
        }]
    }
    async fn call(&self, _tool: &str, args: &str) -> Result<Value> {
        Ok(serde_json::from_str(args).unwrap())
    }
}

struct Shadow;

#[async_trait]
impl ToolProvider for Shadow {
    fn plugin_fqdn(&self) -> &'static str {
        "shadow.test"
    }
    fn assets_version(&self) -> &'static str {
        "0.1.0"
    }
    fn tools(&self) -> Vec<ToolSpec> {
        vec![ToolSpec {
            name: "get_mttr",
            description: "collides with the DORA molecule",
        }]
    }
    async fn call(&self, _tool: &str, _args: &str) -> Result<Value> {
        Ok(Value::Null)
    }
}

/// Lists the same tool name twice.
struct Twice;

#[async_trait]
impl ToolProvider for Twice {
    fn plugin_fqdn(&self) -> &'static str {
        "twice.test"
    }
    fn assets_version(&self) -> &'static str {
        "0.1.0"
    }
    fn tools(&self) -> Vec<ToolSpec> {
        vec![
            ToolSpec {
                name: "ping",
                description: "first",
            },
            ToolSpec {
                name: "pong",
                description: "unique",
            },
            ToolSpec {
                name: "ping",
                description: "second",
            },
        ]
    }
    async fn call(&self, _tool: &str, _args: &str) -> Result<Value> {
        Ok(Value::Null)
    }
}

fn dora() -> Arc<DoraMolecule<SeededSource>> {
    Arc::new(DoraMolecule::new(
        DoraGenerator::with_source(SeededSource::new(1)),
        &AssetResolver::new("http://localhost:9000/"),
        DoraLimits {
            max_days: 365,
            max_list_limit: 50,
        },
    ))
}

#[tokio::test]
async fn hosts_several_providers() {
    let d = Dispatcher::new();
    d.register(dora()).unwrap();
    d.register(Arc::new(Echo)).unwrap();

    assert_eq!(d.registered_tools().len(), 7);
    let v = d.dispatch("echo", r#"{"a":1}"#).await.unwrap();
    assert_eq!(v, json!({"a": 1}));
    let v = d.dispatch("get_lead_time", r#"{"service":"x"}"#).await.unwrap();
    assert_eq!(v["service"], "x");
}

#[tokio::test]
async fn duplicate_tool_names_are_rejected() {
    let d = Dispatcher::new();
    d.register(dora()).unwrap();
    let err = d.register(Arc::new(Shadow)).unwrap_err();
    assert_eq!(err.client_code().as_str(), "INTERNAL");

    // the original provider still answers
    let v = d.dispatch("get_mttr", r#"{"service":"x"}"#).await.unwrap();
    assert_eq!(v["metric"], "mean_time_to_recovery");
}

#[test]
fn duplicate_names_within_one_provider_are_rejected() {
    let d = Dispatcher::new();
    let err = d.register(Arc::new(Twice)).unwrap_err();
    assert_eq!(err.client_code().as_str(), "INTERNAL");
    assert!(err.to_string().contains("ping"));

    // nothing from the failed registration is left behind
    assert!(d.registered_tools().is_empty());
    d.register(Arc::new(Echo)).unwrap();
    assert_eq!(d.registered_tools().len(), 1);
}

#[test]
fn renderer_url_comes_from_the_resolver() {
    assert_eq!(
        dora().renderer_url(),
        "http://localhost:9000/static/dora.molecules.devgraph.ai/1.0.0/dora-metrics.js"
    );
}

#[test]
fn assets_are_looked_up_by_plugin_version_and_file() {
    let d = Dispatcher::new();
    d.register(dora()).unwrap();

    let asset = d
        .asset("dora.molecules.devgraph.ai", "1.0.0", "dora-metrics.js")
        .unwrap();
    assert!(asset.content_type.starts_with("application/javascript"));

    let err = d.asset("dora.molecules.devgraph.ai", "1.0.0", "other.js").unwrap_err();
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    assert!(d.asset("dora.molecules.devgraph.ai", "2.0.0", "dora-metrics.js").is_err());
    assert!(d.asset("echo.test", "1.0.0", "dora-metrics.js").is_err());
}
