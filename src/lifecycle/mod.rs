//! # System Lifecycle
//!
//! Starting, wiring and stopping the storage actors ([`StoreSystem`]), plus the
//! tracing setup shared by the binary and the tests.

mod store_system;
pub mod tracing;

pub use store_system::StoreSystem;
