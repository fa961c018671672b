pub mod build_zone_table;

pub use build_zone_table::BuildZoneTableUseCase;
