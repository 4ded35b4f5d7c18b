//! tfplug - Terraform Plugin Framework for Rust
//!
//! Provider-side building blocks: dynamic values, schemas, validators, plan
//! modifiers, planning, and the provider/resource/data source traits.

// Core modules
pub mod context;
pub mod error;
pub mod schema;
pub mod types;

// Provider API modules
pub mod data_source;
pub mod provider;
pub mod resource;

// Helper modules
pub mod import;
pub mod plan;
pub mod plan_modifier;
pub mod validator;

pub use context::Context;
pub use data_source::{DataSource, DataSourceWithConfigure};
pub use error::{Result, TfplugError};
pub use import::parse_numeric_import_id;
pub use plan::{plan_resource_change, validate_config, PlanAction, PlannedChange};
pub use provider::{Provider, ProviderMetadataRequest, ProviderMetadataResponse};
pub use resource::{ManagedResource, Resource, ResourceWithConfigure, ResourceWithImportState};
pub use schema::{AttributeBuilder, AttributeType, Schema, SchemaBuilder};
pub use types::{
    AttributePath, Diagnostic, DiagnosticSeverity, DiagnosticsExt, Dynamic, DynamicValue,
};
