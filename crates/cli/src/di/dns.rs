use apexdns_application::use_cases::{BuildZoneTableUseCase, ResolveZoneQueryUseCase};
use apexdns_domain::{Config, ZoneTable};
use apexdns_infrastructure::discovery::MetadataUpstreamDiscovery;
use apexdns_infrastructure::dns::{
    DnsServerHandler, ExchangeTimeouts, ForwardNextHandler, NextHandler, ServFailNextHandler,
    UdpUpstreamForwarder,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        info!(zones = config.zones.len(), "Initializing DNS services");

        let timeouts = ExchangeTimeouts::from_millis(
            config.upstream.write_timeout_ms,
            config.upstream.read_timeout_ms,
        );
        let next = Self::build_next_handler(config, timeouts)?;
        let zones = Arc::new(Self::build_zone_table(config).await?);

        let forwarder = Arc::new(UdpUpstreamForwarder::new(timeouts));
        let use_case = Arc::new(ResolveZoneQueryUseCase::new(zones.clone(), forwarder));

        info!(
            zones = zones.len(),
            next_handler = next.name(),
            read_timeout_ms = config.upstream.read_timeout_ms,
            write_timeout_ms = config.upstream.write_timeout_ms,
            "DNS services ready"
        );

        Ok(Self {
            handler: Arc::new(DnsServerHandler::new(use_case, next)),
        })
    }

    async fn build_zone_table(config: &Config) -> anyhow::Result<ZoneTable> {
        let discovery = Arc::new(MetadataUpstreamDiscovery::new(
            &config.upstream.metadata_url,
            Duration::from_millis(config.upstream.metadata_timeout_ms),
        )?);

        let table = BuildZoneTableUseCase::new(discovery)
            .execute(&config.zones)
            .await?;
        Ok(table)
    }

    fn build_next_handler(
        config: &Config,
        timeouts: ExchangeTimeouts,
    ) -> anyhow::Result<Arc<dyn NextHandler>> {
        let Some(fallback) = config.upstream.fallback_server.as_deref() else {
            return Ok(Arc::new(ServFailNextHandler));
        };

        let server = parse_server(fallback).ok_or_else(|| {
            anyhow::anyhow!("invalid upstream.fallback_server address '{}'", fallback)
        })?;

        info!(server = %server, "Names outside every zone go to the fallback resolver");
        Ok(Arc::new(ForwardNextHandler::new(server, timeouts)))
    }
}

fn parse_server(address: &str) -> Option<SocketAddr> {
    let address = address.trim();
    address.parse::<SocketAddr>().ok().or_else(|| {
        address
            .parse::<std::net::IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, 53))
    })
}
