use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_timeout_ms")]
    pub read_timeout_ms: u64,

    #[serde(default = "default_timeout_ms")]
    pub write_timeout_ms: u64,

    /// Base URL of the instance metadata service used when a zone has no
    /// explicit upstream address.
    #[serde(default = "default_metadata_url")]
    pub metadata_url: String,

    #[serde(default = "default_metadata_timeout_ms")]
    pub metadata_timeout_ms: u64,

    /// Resolver that receives queries for names outside every zone. Without
    /// one such queries are answered SERVFAIL.
    #[serde(default)]
    pub fallback_server: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: default_timeout_ms(),
            write_timeout_ms: default_timeout_ms(),
            metadata_url: default_metadata_url(),
            metadata_timeout_ms: default_metadata_timeout_ms(),
            fallback_server: None,
        }
    }
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_metadata_url() -> String {
    "http://169.254.169.254/latest/meta-data/".to_string()
}

fn default_metadata_timeout_ms() -> u64 {
    2000
}
