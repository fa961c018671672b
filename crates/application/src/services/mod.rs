pub mod cname_flattener;
pub mod not_found_classifier;

pub use cname_flattener::CnameFlattener;
pub use not_found_classifier::NotFoundClassifier;
