//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use dorametrics_core::error::{DoraError, Result};

pub use schema::{DoraSection, ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DoraError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let mut cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DoraError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.server.base_url = cfg.server.base_url.trim_end_matches('/').to_string();
    cfg.validate()?;
    Ok(cfg)
}
