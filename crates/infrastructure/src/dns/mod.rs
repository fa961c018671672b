pub mod forwarding;
pub mod next_handler;
pub mod record_map;
pub mod response_assembler;
pub mod server;
pub mod transport;

pub use forwarding::UdpUpstreamForwarder;
pub use next_handler::{ForwardNextHandler, NextHandler, ServFailNextHandler};
pub use record_map::RecordMapper;
pub use response_assembler::{ResponseAssembler, ServerTransport};
pub use server::DnsServerHandler;
pub use transport::ExchangeTimeouts;
