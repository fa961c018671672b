pub mod dns;
pub mod zones;

pub use dns::{QueryOutcome, QueryPlan, ResolveZoneQueryUseCase};
pub use zones::BuildZoneTableUseCase;
