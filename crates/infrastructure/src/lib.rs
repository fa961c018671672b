//! apexdns infrastructure: DNS wire handling, upstream transports and
//! metadata-based upstream discovery.
pub mod discovery;
pub mod dns;
