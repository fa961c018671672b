//! Presentation-format parser for the handful of record kinds a zone is
//! configured with.
//!
//! Accepts `owner [ttl] [class] type rdata...` where TTL and class may come in
//! either order, parentheses may wrap the rdata and `;` starts a comment.
//! Names are always absolute; the trailing dot is optional.

use super::{DnsRecord, RecordData, RecordType, SoaData};
use crate::{DomainName, ZoneError};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub const DEFAULT_TTL: u32 = 3600;

pub fn parse_record(text: &str) -> Result<DnsRecord, ZoneError> {
    let invalid = |reason: String| ZoneError::InvalidRecord {
        record: text.trim().to_string(),
        reason,
    };

    let tokens = tokenize(text);
    let mut tokens = tokens.iter().map(String::as_str);

    let owner = tokens
        .next()
        .ok_or_else(|| invalid("empty record".to_string()))?;
    let owner = DomainName::parse(owner).map_err(|e| invalid(e.to_string()))?;

    let mut ttl: Option<u32> = None;
    let mut class_seen = false;
    let record_type = loop {
        let token = tokens
            .next()
            .ok_or_else(|| invalid("missing record type".to_string()))?;

        if ttl.is_none() && token.bytes().all(|b| b.is_ascii_digit()) {
            ttl = Some(
                token
                    .parse::<u32>()
                    .map_err(|e| invalid(format!("bad TTL '{}': {}", token, e)))?,
            );
            continue;
        }
        if !class_seen && is_class(token) {
            if !token.eq_ignore_ascii_case("IN") {
                return Err(invalid(format!("unsupported class '{}'", token)));
            }
            class_seen = true;
            continue;
        }

        break RecordType::from_str(token).map_err(invalid)?;
    };

    let rdata: Vec<&str> = tokens.collect();
    let data = parse_rdata(record_type, &rdata).map_err(invalid)?;

    Ok(DnsRecord::new(owner, ttl.unwrap_or(DEFAULT_TTL), data))
}

fn tokenize(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split(';').next().unwrap_or_default())
        .flat_map(|line| {
            line.replace(['(', ')'], " ")
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn is_class(token: &str) -> bool {
    ["IN", "CH", "CS", "HS", "ANY", "NONE"]
        .iter()
        .any(|class| token.eq_ignore_ascii_case(class))
}

fn parse_rdata(record_type: RecordType, rdata: &[&str]) -> Result<RecordData, String> {
    let expected = match record_type {
        RecordType::SOA => 7,
        RecordType::Other(_) => {
            return Err(format!("unsupported record type {}", record_type));
        }
        _ => 1,
    };
    if rdata.len() != expected {
        return Err(format!(
            "{} record takes {} rdata field(s), got {}",
            record_type,
            expected,
            rdata.len()
        ));
    }

    let name = |token: &str| DomainName::parse(token).map_err(|e| e.to_string());
    let number = |token: &str| {
        token
            .parse::<u32>()
            .map_err(|e| format!("bad number '{}': {}", token, e))
    };

    let data = match record_type {
        RecordType::A => RecordData::A(
            Ipv4Addr::from_str(rdata[0])
                .map_err(|e| format!("bad IPv4 address '{}': {}", rdata[0], e))?,
        ),
        RecordType::AAAA => RecordData::AAAA(
            Ipv6Addr::from_str(rdata[0])
                .map_err(|e| format!("bad IPv6 address '{}': {}", rdata[0], e))?,
        ),
        RecordType::CNAME => RecordData::CNAME(name(rdata[0])?),
        RecordType::NS => RecordData::NS(name(rdata[0])?),
        RecordType::SOA => RecordData::SOA(SoaData {
            mname: name(rdata[0])?,
            rname: name(rdata[1])?,
            serial: number(rdata[2])?,
            refresh: number(rdata[3])?,
            retry: number(rdata[4])?,
            expire: number(rdata[5])?,
            minimum: number(rdata[6])?,
        }),
        RecordType::Other(_) => return Err(format!("unsupported record type {}", record_type)),
    };

    Ok(data)
}
