pub mod bootstrap;
pub mod workflow;

pub use bootstrap::{build_resolver, build_store, StoreBackend};
pub use workflow::run_resolution;
