//! Conversions between the domain record model and `hickory-proto` wire types.

use apexdns_domain::{
    DnsRecord, DomainError, DomainName, RecordData, RecordType, ResponseCode, SoaData,
};
use hickory_proto::op::ResponseCode as HickoryResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_hickory_type(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    pub fn from_hickory_type(record_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(record_type))
    }

    pub fn to_hickory_rcode(rcode: ResponseCode) -> HickoryResponseCode {
        <HickoryResponseCode as From<u16>>::from(rcode.0)
    }

    pub fn from_hickory_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        ResponseCode(u16::from(rcode))
    }

    pub fn to_hickory_name(name: &DomainName) -> Result<Name, DomainError> {
        Name::from_ascii(name.as_str()).map_err(|e| {
            DomainError::InvalidDomainName(format!("'{}' is not a valid wire name: {}", name, e))
        })
    }

    pub fn from_hickory_name(name: &Name) -> Result<DomainName, DomainError> {
        DomainName::parse(&name.to_ascii())
    }

    pub fn to_hickory_record(record: &DnsRecord) -> Result<Record, DomainError> {
        let rdata = match record.data() {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::AAAA(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::CNAME(target) => RData::CNAME(CNAME(Self::to_hickory_name(target)?)),
            RecordData::NS(target) => RData::NS(NS(Self::to_hickory_name(target)?)),
            RecordData::SOA(soa) => RData::SOA(SOA::new(
                Self::to_hickory_name(&soa.mname)?,
                Self::to_hickory_name(&soa.rname)?,
                soa.serial,
                soa.refresh as i32,
                soa.retry as i32,
                soa.expire as i32,
                soa.minimum,
            )),
        };

        Ok(Record::from_rdata(
            Self::to_hickory_name(record.name())?,
            record.ttl(),
            rdata,
        ))
    }

    pub fn to_hickory_records(records: &[DnsRecord]) -> Result<Vec<Record>, DomainError> {
        records.iter().map(Self::to_hickory_record).collect()
    }

    /// `Ok(None)` for record types this server does not model.
    pub fn from_hickory_record(record: &Record) -> Result<Option<DnsRecord>, DomainError> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(cname) => RecordData::CNAME(Self::from_hickory_name(&cname.0)?),
            RData::NS(ns) => RecordData::NS(Self::from_hickory_name(&ns.0)?),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                mname: Self::from_hickory_name(soa.mname())?,
                rname: Self::from_hickory_name(soa.rname())?,
                serial: soa.serial(),
                refresh: soa.refresh() as u32,
                retry: soa.retry() as u32,
                expire: soa.expire() as u32,
                minimum: soa.minimum(),
            }),
            _ => return Ok(None),
        };

        Ok(Some(DnsRecord::new(
            Self::from_hickory_name(record.name())?,
            record.ttl(),
            data,
        )))
    }
}
