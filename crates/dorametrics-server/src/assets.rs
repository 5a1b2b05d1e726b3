//! Static asset URL resolution.
//!
//! Providers never build URLs themselves; they ask the host, which knows its
//! public origin and the `/static/{plugin}/{version}/{file}` layout served by
//! the router.

#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn static_url(&self, plugin: &str, version: &str, file: &str) -> String {
        format!("{}/static/{plugin}/{version}/{file}", self.base_url)
    }
}
