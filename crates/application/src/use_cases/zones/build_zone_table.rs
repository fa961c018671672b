use crate::ports::UpstreamDiscovery;
use apexdns_domain::config::ZoneConfig;
use apexdns_domain::{parse_record, DomainError, DomainName, Zone, ZoneError, ZoneTable};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_DNS_PORT: u16 = 53;

/// Turns the `[[zones]]` configuration into a validated [`ZoneTable`].
/// Any error aborts startup.
pub struct BuildZoneTableUseCase {
    discovery: Arc<dyn UpstreamDiscovery>,
}

impl BuildZoneTableUseCase {
    pub fn new(discovery: Arc<dyn UpstreamDiscovery>) -> Self {
        Self { discovery }
    }

    pub async fn execute(&self, configs: &[ZoneConfig]) -> Result<ZoneTable, DomainError> {
        let mut discovered: Option<SocketAddr> = None;
        let mut zones = Vec::with_capacity(configs.len());

        for config in configs {
            let name = DomainName::parse(&config.name)?;

            let upstream = match config.upstream.as_deref() {
                Some(address) => parse_upstream(&name, address)?,
                None => match discovered {
                    Some(addr) => addr,
                    None => {
                        let addr = self.discovery.discover().await?;
                        info!(upstream = %addr, "Discovered upstream resolver");
                        discovered = Some(addr);
                        addr
                    }
                },
            };

            let zone = build_zone(name, upstream, config)?;

            for owner in zone.orphan_glue() {
                warn!(
                    zone = %zone.name(),
                    owner = %owner,
                    "Glue record owner is not the target of any NS record"
                );
            }

            info!(
                zone = %zone.name(),
                upstream = %zone.upstream(),
                ns = zone.ns_records().len(),
                glue = zone.glue_records().len(),
                "Zone configured"
            );
            zones.push(zone);
        }

        Ok(ZoneTable::new(zones)?)
    }
}

fn build_zone(
    name: DomainName,
    upstream: SocketAddr,
    config: &ZoneConfig,
) -> Result<Zone, ZoneError> {
    let soa = config
        .soa
        .as_deref()
        .ok_or_else(|| ZoneError::MissingSoa {
            zone: name.to_string(),
        })
        .and_then(parse_record)?;

    if config.ns.is_empty() {
        return Err(ZoneError::MissingNs {
            zone: name.to_string(),
        });
    }
    if config.nsa.is_empty() {
        return Err(ZoneError::MissingGlue {
            zone: name.to_string(),
        });
    }

    let ns = config
        .ns
        .iter()
        .map(|text| parse_record(text))
        .collect::<Result<Vec<_>, _>>()?;
    let glue = config
        .nsa
        .iter()
        .map(|text| parse_record(text))
        .collect::<Result<Vec<_>, _>>()?;

    Zone::new(name, upstream, soa, ns, glue)
}

/// `ip`, `ip:port` or `[ipv6]:port`. Host names are not resolved.
fn parse_upstream(zone: &DomainName, address: &str) -> Result<SocketAddr, ZoneError> {
    let address = address.trim();
    if let Ok(addr) = address.parse::<SocketAddr>() {
        return Ok(addr);
    }
    address
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|e| ZoneError::InvalidUpstream {
            zone: zone.to_string(),
            address: address.to_string(),
            reason: e.to_string(),
        })
}
