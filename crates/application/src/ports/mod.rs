mod upstream_discovery;
mod upstream_forwarder;

pub use upstream_discovery::UpstreamDiscovery;
pub use upstream_forwarder::{UpstreamAnswer, UpstreamForwarder};

pub use apexdns_domain::DnsQuery;
