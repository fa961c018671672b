use serde::{Deserialize, Serialize};

/// One `[[zones]]` entry. Records are kept in presentation format and parsed
/// when the zone table is built.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    pub name: String,

    /// `ip[:port]` of the resolver for this zone; discovered when absent.
    #[serde(default)]
    pub upstream: Option<String>,

    #[serde(default)]
    pub soa: Option<String>,

    #[serde(default)]
    pub ns: Vec<String>,

    /// Glue address records for the NS targets.
    #[serde(default)]
    pub nsa: Vec<String>,
}
