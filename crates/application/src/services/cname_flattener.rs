use apexdns_domain::{DnsRecord, DomainName};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Rewrites a CNAME chain in an upstream answer so the terminal records are
/// owned by the queried name.
///
/// `alias CNAME canonical` + `canonical A 1.2.3.4` becomes
/// `alias A 1.2.3.4`, carrying the CNAME's TTL. An alias whose target has no
/// records in the answer keeps its CNAME.
pub struct CnameFlattener;

impl CnameFlattener {
    pub fn flatten(qname: &DomainName, mut answers: Vec<DnsRecord>) -> Vec<DnsRecord> {
        let mut ignored: FxHashSet<DomainName> = FxHashSet::default();

        loop {
            if ignored.contains(qname) {
                break;
            }

            let Some(cname_idx) = answers
                .iter()
                .position(|r| r.name() == qname && r.cname_target().is_some())
            else {
                break;
            };

            let cname = &answers[cname_idx];
            let Some(target) = cname.cname_target().cloned() else {
                break;
            };
            let ttl = cname.ttl();

            let mut renamed = 0usize;
            for (idx, record) in answers.iter_mut().enumerate() {
                if idx != cname_idx && record.name() == &target {
                    record.set_name(qname.clone());
                    record.set_ttl(ttl);
                    renamed += 1;
                }
            }

            if renamed == 0 {
                debug!(alias = %qname, target = %target, "CNAME target not in answer, keeping alias");
                ignored.insert(qname.clone());
                continue;
            }

            answers.remove(cname_idx);
        }

        answers
    }
}
