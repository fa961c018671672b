#![allow(unused_imports)]

pub mod builders;
pub mod dns_server_mock;
pub mod metadata_server_mock;

pub use builders::*;
pub use dns_server_mock::MockDnsServer;
pub use metadata_server_mock::MockMetadataServer;
