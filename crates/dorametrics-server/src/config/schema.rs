use std::net::SocketAddr;

use serde::Deserialize;
use dorametrics_core::error::{DoraError, Result};

use crate::molecules::dora::DoraLimits;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub dora: DoraSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DoraError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.dora.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Public origin of this server; static asset URLs are built from it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            base_url: default_base_url(),
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            DoraError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(DoraError::BadRequest(
                "server.base_url must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:9000".into()
}
fn default_base_url() -> String {
    "http://localhost:9000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoraSection {
    #[serde(default = "default_max_days")]
    pub max_days: u32,

    #[serde(default = "default_max_list_limit")]
    pub max_list_limit: usize,
}

impl Default for DoraSection {
    fn default() -> Self {
        Self {
            max_days: default_max_days(),
            max_list_limit: default_max_list_limit(),
        }
    }
}

impl DoraSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_days == 0 {
            return Err(DoraError::BadRequest("dora.max_days must be at least 1".into()));
        }
        if !(1..=10_000).contains(&self.max_list_limit) {
            return Err(DoraError::BadRequest(
                "dora.max_list_limit must be between 1 and 10000".into(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> DoraLimits {
        DoraLimits {
            max_days: self.max_days,
            max_list_limit: self.max_list_limit,
        }
    }
}

fn default_max_days() -> u32 {
    3650
}
fn default_max_list_limit() -> usize {
    500
}
