use super::DnsRecord;
use std::fmt;

/// DNS response code. Kept numeric so codes received from an upstream
/// resolver can be passed on unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseCode(pub u16);

impl ResponseCode {
    pub const NO_ERROR: Self = Self(0);
    pub const FORM_ERR: Self = Self(1);
    pub const SERV_FAIL: Self = Self(2);
    pub const NX_DOMAIN: Self = Self(3);
    pub const NOT_IMP: Self = Self(4);
    pub const REFUSED: Self = Self(5);

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::NO_ERROR => "NOERROR",
            Self::FORM_ERR => "FORMERR",
            Self::SERV_FAIL => "SERVFAIL",
            Self::NX_DOMAIN => "NXDOMAIN",
            Self::NOT_IMP => "NOTIMP",
            Self::REFUSED => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            "UNKNOWN" => write!(f, "RCODE{}", self.0),
            name => f.write_str(name),
        }
    }
}

/// Sections and code of a response produced for a zone query, before
/// header flags, EDNS and size limits are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResponse {
    pub rcode: ResponseCode,
    pub answers: Vec<DnsRecord>,
    pub authority: Vec<DnsRecord>,
    pub additional: Vec<DnsRecord>,
}

impl ZoneResponse {
    pub fn new(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }
}

impl Default for ZoneResponse {
    fn default() -> Self {
        Self::new(ResponseCode::NO_ERROR)
    }
}
