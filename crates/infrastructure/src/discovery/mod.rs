pub mod metadata;

pub use metadata::{upstream_from_cidr, MetadataUpstreamDiscovery};
