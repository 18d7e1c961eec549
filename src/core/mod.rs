pub mod import;
pub mod query;
pub mod reconcile;
