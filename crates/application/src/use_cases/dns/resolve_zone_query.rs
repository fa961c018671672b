use crate::ports::UpstreamForwarder;
use crate::services::{CnameFlattener, NotFoundClassifier};
use apexdns_domain::{
    DnsQuery, DomainError, RecordType, ResponseCode, Zone, ZoneResponse, ZoneTable,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a query inside a zone is going to be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Answered from zone data alone.
    AnsweredLocally(ZoneResponse),
    /// Sent to the zone's upstream, CNAME chain flattened on return.
    ForwardThenFlatten,
    /// No data for this name and type; the classifier decides the rcode.
    NotFound,
}

impl QueryPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryPlan::AnsweredLocally(_) => "local",
            QueryPlan::ForwardThenFlatten => "forward",
            QueryPlan::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Answered(ZoneResponse),
    /// The name is under no configured zone and belongs to the next handler.
    NotInZone,
}

pub struct ResolveZoneQueryUseCase {
    zones: Arc<ZoneTable>,
    forwarder: Arc<dyn UpstreamForwarder>,
}

impl ResolveZoneQueryUseCase {
    pub fn new(zones: Arc<ZoneTable>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self { zones, forwarder }
    }

    pub fn plan(zone: &Zone, query: &DnsQuery) -> QueryPlan {
        let qname = &query.name;

        match query.record_type {
            RecordType::A => match zone.glue_for(qname, RecordType::A) {
                Some(glue) => {
                    let mut response = ZoneResponse::new(ResponseCode::NO_ERROR);
                    response.answers = vec![glue.clone()];
                    response.authority = zone.ns_records().to_vec();
                    QueryPlan::AnsweredLocally(response)
                }
                None => QueryPlan::ForwardThenFlatten,
            },
            RecordType::AAAA | RecordType::CNAME => QueryPlan::ForwardThenFlatten,
            RecordType::NS if zone.is_apex(qname) => {
                let mut response = ZoneResponse::new(ResponseCode::NO_ERROR);
                response.answers = zone.ns_records().to_vec();
                response.authority = zone.ns_records().to_vec();
                response.additional = zone.glue_records().to_vec();
                QueryPlan::AnsweredLocally(response)
            }
            RecordType::SOA if zone.is_apex(qname) => {
                let mut response = ZoneResponse::new(ResponseCode::NO_ERROR);
                response.answers = vec![zone.soa().clone()];
                response.authority = zone.ns_records().to_vec();
                QueryPlan::AnsweredLocally(response)
            }
            _ => QueryPlan::NotFound,
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<QueryOutcome, DomainError> {
        let Some(zone) = self.zones.match_zone(&query.name) else {
            debug!(name = %query.name, "Name outside every zone");
            return Ok(QueryOutcome::NotInZone);
        };

        let plan = Self::plan(zone, query);
        debug!(
            name = %query.name,
            record_type = %query.record_type,
            zone = %zone.name(),
            plan = plan.as_str(),
            "Zone query planned"
        );

        let response = match plan {
            QueryPlan::AnsweredLocally(response) => response,
            QueryPlan::NotFound => {
                let mut response = ZoneResponse::default();
                NotFoundClassifier::classify(zone, &query.name, &mut response);
                response
            }
            QueryPlan::ForwardThenFlatten => self.forward(zone, query).await?,
        };

        Ok(QueryOutcome::Answered(response))
    }

    async fn forward(&self, zone: &Zone, query: &DnsQuery) -> Result<ZoneResponse, DomainError> {
        let upstream = zone.upstream();
        let answer = self
            .forwarder
            .forward(upstream, query)
            .await
            .inspect_err(|e| {
                warn!(
                    name = %query.name,
                    upstream = %upstream,
                    error = %e,
                    "Upstream exchange failed"
                );
            })?;

        let mut response = ZoneResponse::new(answer.rcode);
        response.answers = CnameFlattener::flatten(&query.name, answer.answers);

        if response.answers.is_empty() {
            NotFoundClassifier::classify(zone, &query.name, &mut response);
        } else {
            response.authority = zone.ns_records().to_vec();
            response.additional = zone.glue_records().to_vec();
        }

        debug!(
            name = %query.name,
            rcode = %response.rcode,
            answers = response.answers.len(),
            "Upstream answer shaped"
        );
        Ok(response)
    }
}
