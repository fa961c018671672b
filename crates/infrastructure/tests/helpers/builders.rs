#![allow(dead_code)]
use apexdns_application::use_cases::ResolveZoneQueryUseCase;
use apexdns_domain::{parse_record, DomainName, Zone, ZoneTable};
use apexdns_infrastructure::dns::{
    DnsServerHandler, ExchangeTimeouts, NextHandler, RecordMapper, UdpUpstreamForwarder,
};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::Arc;

pub fn fast_timeouts() -> ExchangeTimeouts {
    ExchangeTimeouts::from_millis(200, 200)
}

/// Client query with RD set; `edns_payload` adds an OPT record.
pub fn request(name: &str, record_type: RecordType, edns_payload: Option<u16>) -> Message {
    let mut message = Message::new();
    message
        .set_id(0x4242)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));

    if let Some(payload) = edns_payload {
        let mut edns = Edns::new();
        edns.set_max_payload(payload);
        message.set_edns(edns);
    }
    message
}

pub fn encode(message: &Message) -> Vec<u8> {
    message.to_bytes().unwrap()
}

pub fn decode(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).unwrap()
}

pub fn wire_record(text: &str) -> Record {
    RecordMapper::to_hickory_record(&parse_record(text).unwrap()).unwrap()
}

/// Upstream reply to `query` carrying `answers`.
pub fn reply_to(query: &Message, rcode: ResponseCode, answers: &[&str]) -> Message {
    let mut message = Message::new();
    message
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(rcode);
    message.add_queries(query.queries().to_vec());
    message.add_answers(answers.iter().map(|text| wire_record(text)));
    message
}

pub fn example_zone(upstream: SocketAddr) -> Zone {
    Zone::new(
        DomainName::parse("example.org").unwrap(),
        upstream,
        parse_record(
            "example.org 60 IN SOA ns1.example.org hostmaster.example.org 1 7200 900 1209600 86400",
        )
        .unwrap(),
        vec![
            parse_record("example.org 60 IN NS ns1.example.org").unwrap(),
            parse_record("example.org 60 IN NS ns2.example.org").unwrap(),
        ],
        vec![
            parse_record("ns1.example.org 60 IN A 192.168.0.1").unwrap(),
            parse_record("ns2.example.org 60 IN A 192.168.0.2").unwrap(),
        ],
    )
    .unwrap()
}

pub fn handler(upstream: SocketAddr, next: Arc<dyn NextHandler>) -> DnsServerHandler {
    let table = Arc::new(ZoneTable::new([example_zone(upstream)]).unwrap());
    let forwarder = Arc::new(UdpUpstreamForwarder::new(fast_timeouts()));
    let use_case = Arc::new(ResolveZoneQueryUseCase::new(table, forwarder));
    DnsServerHandler::new(use_case, next)
}
