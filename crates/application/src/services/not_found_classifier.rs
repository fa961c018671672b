use apexdns_domain::{DomainName, ResponseCode, Zone, ZoneResponse};

/// Decides NOERROR vs NXDOMAIN for a name that produced no data, and puts
/// the zone SOA in the authority section either way.
pub struct NotFoundClassifier;

impl NotFoundClassifier {
    pub fn classify(zone: &Zone, qname: &DomainName, response: &mut ZoneResponse) {
        response.authority = vec![zone.soa().clone()];
        response.rcode = if zone.is_known_name(qname) {
            ResponseCode::NO_ERROR
        } else {
            ResponseCode::NX_DOMAIN
        };
    }
}
