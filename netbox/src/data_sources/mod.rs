//! Data sources
//!
//! Every resource descriptor doubles as a `netbox_<name>` data source that
//! looks up one existing object.

pub mod generic;

pub use generic::GenericDataSource;
