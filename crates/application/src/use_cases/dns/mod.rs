pub mod resolve_zone_query;

pub use resolve_zone_query::{QueryOutcome, QueryPlan, ResolveZoneQueryUseCase};
